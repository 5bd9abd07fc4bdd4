//! NekoBrowser — a random-image browser widget with bounded back/forward history.
//!
//! Entry point: runs the console widget. `n` fetches or replays the next
//! image, `p` steps back through the bounded history, `q` quits.

use std::io::{self, BufRead, Write};

use nekobrowser::app::ImageBrowser;
use nekobrowser::services::image_service::ImageService;
use nekobrowser::ui::console::ConsoleDisplay;

#[tokio::main]
async fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              NekoBrowser v{}                               ║", env!("CARGO_PKG_VERSION"));
    println!("║     Random images with bounded back/forward history          ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut browser = ImageBrowser::new(ImageService::new(), ConsoleDisplay::new());

    // Fetch a first image on startup so there is something to navigate.
    let _ = browser.fetch_next().await;

    let stdin = io::stdin();
    loop {
        let prev_hint = if browser.can_go_back() { "[p]rev  " } else { "" };
        print!("\n  {}[n]ext  [q]uit > ", prev_hint);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match line.trim() {
            "n" | "next" => {
                let _ = browser.go_forward_or_fetch().await;
            }
            "p" | "prev" => {
                if browser.go_back().is_none() {
                    println!("  Already at the oldest image.");
                }
            }
            "q" | "quit" => break,
            "" => {}
            other => println!("  Unknown command: {}", other),
        }
    }

    println!();
    println!("  Bye!");
}

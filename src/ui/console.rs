//! Console display sink.

use super::DisplaySink;
use crate::types::image::ImageEntry;

/// Display sink that resolves entry ids to image URLs and writes status
/// lines to stdout.
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for ConsoleDisplay {
    fn show_loading(&mut self) {
        println!("  Loading...");
    }

    fn show_entry(&mut self, entry: &ImageEntry) {
        println!("  ▶ {}", entry.image_url());
    }

    fn show_empty(&mut self) {
        println!("  No images found :(");
    }

    fn show_error(&mut self, message: &str) {
        println!("  Failed to load image ({}). The source may be down.", message);
    }
}

//! NekoBrowser display layer.
//!
//! The widget pushes loading/entry/empty/error markers through the
//! `DisplaySink` seam; a sink resolves entry ids into something the user
//! can actually see.

pub mod console;

use crate::types::image::ImageEntry;

/// Trait defining the display sink the widget renders through.
pub trait DisplaySink {
    fn show_loading(&mut self);
    fn show_entry(&mut self, entry: &ImageEntry);
    fn show_empty(&mut self);
    fn show_error(&mut self, message: &str);
}

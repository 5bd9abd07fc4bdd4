//! Widget core for NekoBrowser.
//!
//! `ImageBrowser` composes the random-image source, the bounded history
//! navigator and the display sink, and owns the fetch-generation guard
//! that keeps a superseded response from ever touching the cursor.

use crate::managers::history_navigator::{HistoryNavigator, HistoryNavigatorTrait};
use crate::services::image_service::ImageSourceTrait;
use crate::types::errors::FetchError;
use crate::types::image::ImageEntry;
use crate::ui::DisplaySink;

/// Token identifying one fetch attempt. Only the most recently issued
/// ticket may commit its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Image browser widget: one image shown at a time, up to three previous
/// images replayable, a new image fetched when advancing past the end.
pub struct ImageBrowser<S, D> {
    source: S,
    display: D,
    navigator: HistoryNavigator,
    generation: u64,
}

impl<S: ImageSourceTrait, D: DisplaySink> ImageBrowser<S, D> {
    pub fn new(source: S, display: D) -> Self {
        Self {
            source,
            display,
            navigator: HistoryNavigator::new(),
            generation: 0,
        }
    }

    /// Starts a fetch attempt: shows the loading marker, invalidates any
    /// ticket issued earlier, and returns the token the eventual result
    /// must be committed with.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.display.show_loading();
        FetchTicket(self.generation)
    }

    /// Commits the outcome of a fetch attempt.
    ///
    /// A stale ticket is rejected with `Superseded`, leaving both the
    /// history and the display untouched — the newer attempt owns them.
    /// An empty batch leaves the history unchanged and shows the empty
    /// marker; a failed fetch leaves it unchanged and shows the error.
    pub fn commit_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ImageEntry>, FetchError>,
    ) -> Result<ImageEntry, FetchError> {
        if ticket.0 != self.generation {
            return Err(FetchError::Superseded);
        }

        match result {
            Ok(batch) => match batch.into_iter().next() {
                Some(entry) => {
                    self.navigator.push_entry(entry.clone());
                    self.display.show_entry(&entry);
                    Ok(entry)
                }
                None => {
                    self.display.show_empty();
                    Err(FetchError::EmptyResult)
                }
            },
            Err(err) => {
                self.display.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Fetches one new image and appends it to the history.
    pub async fn fetch_next(&mut self) -> Result<ImageEntry, FetchError> {
        let ticket = self.begin_fetch();
        let result = self.source.fetch_random(1).await;
        self.commit_fetch(ticket, result)
    }

    /// Steps back to the previous image. Never calls the source; returns
    /// `None` (and shows nothing) when already at the oldest entry.
    pub fn go_back(&mut self) -> Option<ImageEntry> {
        let entry = self.navigator.go_back().cloned();
        if let Some(ref entry) = entry {
            self.display.show_entry(entry);
        }
        entry
    }

    /// Steps forward through history when forward entries exist (a pure
    /// replay, no source call), otherwise fetches a new image.
    pub async fn go_forward_or_fetch(&mut self) -> Result<ImageEntry, FetchError> {
        match self.navigator.go_forward().cloned() {
            Some(entry) => {
                self.display.show_entry(&entry);
                Ok(entry)
            }
            None => self.fetch_next().await,
        }
    }

    /// Whether a previous entry exists. Drives the "previous" control's
    /// enabled state.
    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    /// The currently displayed entry, if any.
    pub fn current(&self) -> Option<&ImageEntry> {
        self.navigator.current()
    }

    /// Read access to the underlying history state.
    pub fn navigator(&self) -> &HistoryNavigator {
        &self.navigator
    }
}

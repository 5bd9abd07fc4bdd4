//! Bounded History Navigator for NekoBrowser.
//!
//! Keeps the last few viewed images in fetch order with a cursor marking
//! the currently displayed one, using browser back/forward semantics:
//! inserting while the cursor is mid-history discards the forward entries,
//! and overflowing the capacity evicts the oldest entry.

use log::debug;

use crate::types::image::ImageEntry;

/// Default number of entries kept (the current image plus three previous).
pub const DEFAULT_HISTORY_CAPACITY: usize = 4;

/// Trait defining the bounded history navigation interface.
pub trait HistoryNavigatorTrait {
    fn push_entry(&mut self, entry: ImageEntry) -> usize;
    fn go_back(&mut self) -> Option<&ImageEntry>;
    fn go_forward(&mut self) -> Option<&ImageEntry>;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn current(&self) -> Option<&ImageEntry>;
    fn cursor(&self) -> Option<usize>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn capacity(&self) -> usize;
}

/// In-memory bounded history with a movement cursor.
pub struct HistoryNavigator {
    history: Vec<ImageEntry>,
    cursor: Option<usize>,
    capacity: usize,
}

impl HistoryNavigator {
    /// Creates a navigator with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a navigator bounded at `capacity` entries (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Entries in fetch order, oldest first.
    pub fn entries(&self) -> &[ImageEntry] {
        &self.history
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryNavigatorTrait for HistoryNavigator {
    /// Appends a freshly fetched entry and moves the cursor onto it.
    ///
    /// If the cursor is not at the last index, everything after it is
    /// discarded first. If the append overflows the capacity, the oldest
    /// entry is evicted and the cursor shifts left with the rest.
    /// Returns the new cursor index.
    fn push_entry(&mut self, entry: ImageEntry) -> usize {
        if let Some(cursor) = self.cursor {
            if cursor + 1 < self.history.len() {
                debug!(
                    "discarding {} forward history entries",
                    self.history.len() - cursor - 1
                );
                self.history.truncate(cursor + 1);
            }
        }

        self.history.push(entry);

        if self.history.len() > self.capacity {
            debug!("history full, evicting oldest entry");
            self.history.remove(0);
        }

        let cursor = self.history.len() - 1;
        self.cursor = Some(cursor);
        cursor
    }

    /// Moves the cursor one entry back and returns the new current entry.
    /// No-op at the oldest entry or on an empty history.
    fn go_back(&mut self) -> Option<&ImageEntry> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.history.get(cursor - 1)
            }
            _ => None,
        }
    }

    /// Moves the cursor one entry forward and returns the new current
    /// entry. No-op when already at the newest entry.
    fn go_forward(&mut self) -> Option<&ImageEntry> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.history.len() => {
                self.cursor = Some(cursor + 1);
                self.history.get(cursor + 1)
            }
            _ => None,
        }
    }

    /// Whether a previous entry exists. Drives the "previous" control.
    fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    /// Whether a forward replay is possible without fetching.
    fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.history.len())
    }

    fn current(&self) -> Option<&ImageEntry> {
        self.cursor.and_then(|cursor| self.history.get(cursor))
    }

    fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    fn len(&self) -> usize {
        self.history.len()
    }

    fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

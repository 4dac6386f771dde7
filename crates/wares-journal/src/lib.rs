//! Append-only text journal with numbered rendering.
//!
//! A [`Journal`] only owns its entry list; it never touches the filesystem.
//! Writing the rendering to disk lives in the `store` module, so the journal
//! and its persistence can evolve independently.

mod store;

pub use store::save_to_file;

use std::fmt;
use thiserror::Error;

/// Errors produced by journal operations and persistence.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Entry number outside the journal's current range.
    #[error("no journal entry numbered {0}")]
    NoSuchEntry(usize),

    /// The journal file could not be written.
    #[error("failed to write journal file: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered, append-only list of text entries.
///
/// Entries are numbered from 1 in insertion order. Removal shifts later
/// entries down, so renders always show a dense numbering.
#[derive(Debug, Default, Clone)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning its 1-based entry number.
    pub fn add(&mut self, entry: impl Into<String>) -> usize {
        self.entries.push(entry.into());
        self.entries.len()
    }

    /// Remove and return the entry with the given 1-based number.
    pub fn remove(&mut self, number: usize) -> Result<String, JournalError> {
        if number == 0 || number > self.entries.len() {
            return Err(JournalError::NoSuchEntry(number));
        }
        Ok(self.entries.remove(number - 1))
    }

    /// Number of entries currently in the journal.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{}: {entry}", index + 1)?;
        }
        Ok(())
    }
}

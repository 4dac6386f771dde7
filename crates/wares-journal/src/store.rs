//! Plain-text persistence for journals.

use crate::{Journal, JournalError};
use std::path::Path;
use tracing::debug;

/// Write the journal's numbered rendering to `path` as UTF-8 text.
///
/// The whole rendering is written in one call; an existing file at `path` is
/// replaced.
pub fn save_to_file(journal: &Journal, path: &Path) -> Result<(), JournalError> {
    std::fs::write(path, journal.to_string())?;
    debug!(path = %path.display(), entries = journal.len(), "journal saved");
    Ok(())
}

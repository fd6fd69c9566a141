//! Shared utilities: atomic artifact replacement.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `contents` to `path`, replacing any existing file atomically.
///
/// The content lands in a temporary file in the destination's directory and
/// is renamed into place once fully flushed. A failure partway through
/// leaves any pre-existing file at `path` untouched.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.flush()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

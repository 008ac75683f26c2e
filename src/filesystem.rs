//! Stream and file editing
//!
//! Both modes hold the complete text in memory: the input is read in full,
//! the chain runs over it, and only then is anything written.
//!
//! File edits replace the target atomically (temporary file in the same
//! directory, fsync, rename), so a failure at any point leaves the original
//! file untouched.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::chain::EditChain;
use crate::error::Result;

/// What happened to an edited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum FileOutcome {
    /// The edits changed the text and the file was replaced.
    Rewritten,
    /// The edits left the text as it was; the file was not touched.
    Unchanged,
}

/// Read all of `input`, apply the chain, and write the result to `output`.
pub fn edit_stream<R: Read, W: Write>(chain: &EditChain, mut input: R, mut output: W) -> Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let edited = chain.apply(&text);
    output.write_all(edited.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Apply the chain to the file at `path`, replacing it atomically.
pub fn edit_file(chain: &EditChain, path: &Path) -> Result<FileOutcome> {
    let original = fs::read_to_string(path)?;
    let edited = chain.apply(&original);

    if edited == original {
        debug!("{}: no changes", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    atomic_write(path, edited.as_bytes())?;
    info!("{}: rewritten", path.display());
    Ok(FileOutcome::Rewritten)
}

/// Atomic file write: tempfile + fsync + rename, keeping the permissions of
/// the file being replaced.
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Same directory, so the rename never crosses filesystems.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

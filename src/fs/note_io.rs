//! Locked note file access.
//!
//! Reads and writes go through `fs2` advisory locks so a reconciliation
//! batch and any other cooperating process (sync agent, editor plugin)
//! never interleave a partial write with a read. Advisory locks are
//! cooperative - all participants must use these functions for the
//! locking to be effective.
//!
//! Callers never handle raw file contents: a read returns the parsed
//! [`NoteDocument`], a write takes the updated mapping plus the original
//! body and reassembles the note on the way out.

use anyhow::{Context, Result};
use fs2::FileExt;
use serde_yaml::Mapping;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::parser::frontmatter::{parse_note, render_note, NoteDocument};

/// Read and parse one note under a shared lock.
pub fn read_note(path: &Path) -> Result<NoteDocument> {
    let content = locked_read(path)?;
    parse_note(&content).with_context(|| format!("Failed to parse note: {}", path.display()))
}

/// Render and write one note under an exclusive lock.
pub fn write_note(path: &Path, frontmatter: &Mapping, body: &str) -> Result<()> {
    let content = render_note(frontmatter, body)
        .with_context(|| format!("Failed to render note: {}", path.display()))?;
    locked_write(path, &content)
}

fn locked_read(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open note: {}", path.display()))?;
    file.lock_shared()
        .with_context(|| format!("Failed to acquire shared lock: {}", path.display()))?;
    let mut content = String::new();
    BufReader::new(&file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read note: {}", path.display()))?;
    Ok(content)
}

fn locked_write(path: &Path, content: &str) -> Result<()> {
    // Open without truncation; the file is truncated via set_len(0) only
    // after the exclusive lock is held, so a concurrent reader can never
    // observe the empty window between truncate and write.
    #[allow(clippy::suspicious_open_options)]
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open note for writing: {}", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
    file.set_len(0)
        .with_context(|| format!("Failed to truncate note: {}", path.display()))?;
    let mut writer = BufWriter::new(&file);
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write note: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush note: {}", path.display()))?;
    Ok(())
}

//! Vault root handle and note discovery.

use anyhow::{bail, Context, Result};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Directories that never hold course content, even though they may
/// contain `.md` files (editor config, deleted notes, note templates).
const SKIPPED_DIRS: &[&str] = &["templates"];

/// Handle to an opened vault root.
///
/// The root is canonicalized once at open time and treated as immutable
/// for the rest of the run; every worker in a batch shares it read-only.
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open an existing vault directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.exists() {
            bail!("Vault root does not exist: {}", root.display());
        }
        if !root.is_dir() {
            bail!("Vault root is not a directory: {}", root.display());
        }
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve vault root: {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect every note in the vault, sorted for deterministic output.
    ///
    /// Dot-directories and the well-known non-content directories are
    /// skipped. When a filter is given, only notes whose vault-relative
    /// path matches the glob are returned.
    pub fn discover_notes(&self, filter: Option<&Pattern>) -> Result<Vec<PathBuf>> {
        let mut notes = Vec::new();
        self.collect_notes(&self.root, filter, &mut notes)?;
        Ok(notes)
    }

    fn collect_notes(
        &self,
        dir: &Path,
        filter: Option<&Pattern>,
        notes: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        let mut paths: Vec<PathBuf> = entries
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?
            .into_iter()
            .map(|entry| entry.path())
            .collect();
        paths.sort();

        for path in paths {
            if path.is_dir() {
                if self.is_skipped_dir(&path) {
                    continue;
                }
                self.collect_notes(&path, filter, notes)?;
                continue;
            }

            let is_md = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
            if !is_md {
                continue;
            }

            if let Some(pattern) = filter {
                let relative = path.strip_prefix(&self.root).unwrap_or(&path);
                if !pattern.matches_path(relative) {
                    continue;
                }
            }

            notes.push(path);
        }

        Ok(())
    }

    fn is_skipped_dir(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return true;
        };
        name.starts_with('.')
            || SKIPPED_DIRS
                .iter()
                .any(|skipped| name.eq_ignore_ascii_case(skipped))
    }

    /// Display a path relative to the vault root, or just the filename if
    /// outside. This keeps full system paths out of reports and logs.
    pub fn relative_display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .map(|relative| relative.display().to_string())
            .unwrap_or_else(|_| {
                path.file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string())
            })
    }
}

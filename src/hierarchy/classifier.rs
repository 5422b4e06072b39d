//! Path classification against the vault root.
//!
//! Classification is purely lexical: both paths are normalized
//! component-wise (`.` dropped, `..` resolved, separators unified) without
//! touching the filesystem, so the classifier stays pure and callable on
//! paths that only exist in tests.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors produced while classifying a note's path.
///
/// Both variants are file-scoped: the caller should skip the file and keep
/// processing the rest of the batch.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// The file does not live under the vault root.
    #[error("file is not inside the vault `{}`: {}", .vault_root.display(), .path.display())]
    OutOfVault { vault_root: PathBuf, path: PathBuf },

    /// The hierarchy depth cannot be determined for this path.
    #[error("cannot determine hierarchy depth for `{}`: {reason}", .path.display())]
    AmbiguousDepth { path: PathBuf, reason: String },
}

/// Where a note sits in the folder tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Number of folders between the vault root and the file. Not capped;
    /// depth beyond four is still module-level content.
    pub depth: usize,
    /// Folder names from the vault root down to the file's containing
    /// folder, exactly as they appear on disk.
    pub segments: Vec<String>,
    /// True when the file is an index file: named after its containing
    /// folder, or the vault's root landing page.
    pub is_index_file: bool,
}

/// Classify a file's position relative to the vault root.
///
/// Fails with [`HierarchyError::OutOfVault`] when the file is not a
/// descendant of the root, and with [`HierarchyError::AmbiguousDepth`]
/// when the path is the root itself or cannot be normalized.
pub fn classify(vault_root: &Path, file_path: &Path) -> Result<Classification, HierarchyError> {
    let root = normalize(vault_root).ok_or_else(|| HierarchyError::AmbiguousDepth {
        path: file_path.to_path_buf(),
        reason: "vault root path cannot be normalized".to_string(),
    })?;
    let file = normalize(file_path).ok_or_else(|| HierarchyError::AmbiguousDepth {
        path: file_path.to_path_buf(),
        reason: "file path cannot be normalized".to_string(),
    })?;

    let relative = file
        .strip_prefix(&root)
        .map_err(|_| HierarchyError::OutOfVault {
            vault_root: root.clone(),
            path: file_path.to_path_buf(),
        })?;

    let mut segments: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();

    let Some(file_name) = segments.pop() else {
        return Err(HierarchyError::AmbiguousDepth {
            path: file_path.to_path_buf(),
            reason: "path is the vault root itself".to_string(),
        });
    };

    let depth = segments.len();
    let is_index_file = is_index_file(&file_name, depth, &segments, &root);

    Ok(Classification {
        depth,
        segments,
        is_index_file,
    })
}

/// An index file is named identically to its containing folder
/// (case-insensitive, `.md` suffix). At the vault root, `index.md` and
/// `<vault-folder-name>.md` are both recognized as the main index.
fn is_index_file(file_name: &str, depth: usize, segments: &[String], root: &Path) -> bool {
    let path = Path::new(file_name);
    let is_md = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    if !is_md {
        return false;
    }
    let Some(stem) = path.file_stem().map(|stem| stem.to_string_lossy()) else {
        return false;
    };
    let stem = stem.to_lowercase();

    if depth == 0 {
        if stem == "index" {
            return true;
        }
        return root
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .is_some_and(|vault_name| stem == vault_name);
    }

    stem == segments[depth - 1].to_lowercase()
}

/// Lexical path normalization: drop `.`, resolve `..`, unify separators.
/// Returns `None` when `..` would escape past the path's root.
fn normalize(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    Some(out)
}

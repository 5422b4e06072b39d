//! Run report model shared by the scan and fix pipelines.
//!
//! A report is the machine-readable record of one batch run: which notes
//! were looked at, what changed (or would change), and what failed. The
//! `scan --json` output is exactly this structure serialized with
//! serde_json, so every correction stays auditable after the run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::hierarchy::{ChangeKind, FieldChange};
use crate::models::hierarchy::IndexType;

/// Whether a run persists updates or only reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Scan,
    Fix,
}

/// Outcome of reconciling a single note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteOutcome {
    /// Vault-relative path, for display and audit logs.
    pub path: String,
    /// Derived index-type; absent when the note failed before classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_type: Option<IndexType>,
    /// Changes applied (fix) or pending (scan).
    pub changes: Vec<FieldChange>,
    /// True when the updated frontmatter was written back to disk.
    pub wrote: bool,
    /// File-scoped failure; the batch continues past it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NoteOutcome {
    pub fn failed(path: String, error: String) -> Self {
        Self {
            path,
            index_type: None,
            changes: Vec::new(),
            wrote: false,
            error: Some(error),
        }
    }
}

/// Record of one batch run over the vault.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub vault_root: PathBuf,
    pub mode: RunMode,
    /// Set when the run was stopped early (Ctrl-C) before visiting every note.
    pub interrupted: bool,
    pub notes: Vec<NoteOutcome>,
}

impl RunReport {
    pub fn new(mode: RunMode, vault_root: &Path) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            vault_root: vault_root.to_path_buf(),
            mode,
            interrupted: false,
            notes: Vec::new(),
        }
    }

    pub fn files_seen(&self) -> usize {
        self.notes.len()
    }

    pub fn files_changed(&self) -> usize {
        self.notes
            .iter()
            .filter(|note| note.error.is_none() && !note.changes.is_empty())
            .count()
    }

    pub fn files_errored(&self) -> usize {
        self.notes.iter().filter(|note| note.error.is_some()).count()
    }

    pub fn changes_of(&self, kind: ChangeKind) -> usize {
        self.notes
            .iter()
            .flat_map(|note| note.changes.iter())
            .filter(|change| change.kind == kind)
            .count()
    }

    pub fn total_changes(&self) -> usize {
        self.notes.iter().map(|note| note.changes.len()).sum()
    }

    /// True when no note needs (or received) any change and nothing failed.
    pub fn is_clean(&self) -> bool {
        self.total_changes() == 0 && self.files_errored() == 0
    }
}

//! Batch reconciliation pipeline.
//!
//! Walks the vault, reconciles every note, and collects a [`RunReport`].
//! Failures are file-scoped: a note that cannot be read, parsed, or
//! classified is recorded in the report and the batch moves on. Each
//! individual correction is logged with file, field, old and new value so
//! a run can be audited after the fact.

use anyhow::Result;
use glob::Pattern;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::fs::{note_io, Vault};
use crate::hierarchy::reconcile_frontmatter;
use crate::models::{NoteOutcome, RunMode, RunReport};

/// Reconcile every note in the vault.
///
/// In [`RunMode::Fix`] updated frontmatter is written back; in
/// [`RunMode::Scan`] changes are only reported. When an interrupt flag is
/// supplied and becomes set, the batch stops after the in-flight note and
/// the report is marked interrupted.
pub fn process_vault(
    vault: &Vault,
    filter: Option<&Pattern>,
    mode: RunMode,
    interrupt: Option<&AtomicBool>,
) -> Result<RunReport> {
    let mut report = RunReport::new(mode, vault.root());

    for path in vault.discover_notes(filter)? {
        if interrupt.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
            tracing::info!("interrupt received, stopping before next note");
            report.interrupted = true;
            break;
        }
        report.notes.push(process_note(vault, &path, mode));
    }

    Ok(report)
}

/// Reconcile a single note, capturing any failure in the outcome instead
/// of propagating it.
pub fn process_note(vault: &Vault, path: &Path, mode: RunMode) -> NoteOutcome {
    let relative = vault.relative_display(path);
    match reconcile_note(vault, path, &relative, mode) {
        Ok(outcome) => outcome,
        Err(err) => {
            let message = format!("{err:#}");
            tracing::warn!(file = %relative, error = %message, "skipping note");
            NoteOutcome::failed(relative, message)
        }
    }
}

fn reconcile_note(
    vault: &Vault,
    path: &Path,
    relative: &str,
    mode: RunMode,
) -> Result<NoteOutcome> {
    let doc = note_io::read_note(path)?;
    let (index_type, result) = reconcile_frontmatter(vault.root(), path, &doc.frontmatter)?;

    for change in &result.changes {
        tracing::debug!(
            file = %relative,
            field = %change.field,
            old = change.old.as_deref().unwrap_or("-"),
            new = change.new.as_deref().unwrap_or("-"),
            kind = ?change.kind,
            "frontmatter change"
        );
    }

    let wrote = if mode == RunMode::Fix && result.is_changed() {
        note_io::write_note(path, &result.frontmatter, &doc.body)?;
        true
    } else {
        false
    };

    Ok(NoteOutcome {
        path: relative.to_string(),
        index_type: Some(index_type),
        changes: result.changes,
        wrote,
        error: None,
    })
}

//! Scan the vault and report pending metadata changes without writing.

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use std::path::PathBuf;

use crate::config;
use crate::fs::Vault;
use crate::hierarchy::ChangeKind;
use crate::models::{RunMode, RunReport};
use crate::pipeline;

/// Run a dry-run reconciliation pass over the whole vault.
pub fn execute(vault_path: Option<PathBuf>, pattern: Option<String>, json: bool) -> Result<()> {
    let root = config::resolve_vault_root(vault_path)?;
    let vault = Vault::open(&root)?;
    let filter = compile_filter(pattern)?;

    let report = pipeline::process_vault(&vault, filter.as_ref(), RunMode::Scan, None)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", crate::LOGO);
    println!("\n{}", "Vault Metadata Scan".bold().blue());
    println!("{}", "=".repeat(50));
    println!("Vault: {}", vault.root().display());

    print_changes(&report);
    print_errors(&report);
    print_summary(&report);

    if report.files_changed() > 0 {
        println!("\nRun {} to apply these changes.", "lectern fix".bold());
    }

    Ok(())
}

pub(crate) fn compile_filter(pattern: Option<String>) -> Result<Option<Pattern>> {
    pattern
        .map(|raw| Pattern::new(&raw).with_context(|| format!("Invalid --match pattern: {raw}")))
        .transpose()
}

pub(crate) fn print_changes(report: &RunReport) {
    for note in &report.notes {
        if note.changes.is_empty() {
            continue;
        }
        println!("\n  {}", note.path.bold());
        for change in &note.changes {
            let line = match change.kind {
                ChangeKind::Added => format!(
                    "+ {}: {}",
                    change.field,
                    change.new.as_deref().unwrap_or("-")
                )
                .green(),
                ChangeKind::Corrected => format!(
                    "~ {}: {} -> {}",
                    change.field,
                    change.old.as_deref().unwrap_or("-"),
                    change.new.as_deref().unwrap_or("-")
                )
                .yellow(),
                ChangeKind::Removed => format!(
                    "- {}: {}",
                    change.field,
                    change.old.as_deref().unwrap_or("-")
                )
                .red(),
            };
            println!("    {line}");
        }
    }
}

pub(crate) fn print_errors(report: &RunReport) {
    let failed: Vec<_> = report
        .notes
        .iter()
        .filter(|note| note.error.is_some())
        .collect();
    if failed.is_empty() {
        return;
    }

    println!("\n{}", "Skipped files".red().bold());
    for note in failed {
        println!(
            "  {} {}",
            note.path.red(),
            note.error.as_deref().unwrap_or("")
        );
    }
}

pub(crate) fn print_summary(report: &RunReport) {
    println!("\n{}", "Summary".bold());
    println!("  Files scanned:   {}", report.files_seen());
    println!("  Needing changes: {}", report.files_changed());
    println!("  Fields to add:     {}", report.changes_of(ChangeKind::Added));
    println!(
        "  Fields to correct: {}",
        report.changes_of(ChangeKind::Corrected)
    );
    println!(
        "  Fields to remove:  {}",
        report.changes_of(ChangeKind::Removed)
    );
    if report.files_errored() > 0 {
        println!(
            "  {}",
            format!("Skipped: {}", report.files_errored()).red()
        );
    }

    if report.is_clean() {
        println!("\n{}", "All hierarchy metadata is consistent!".green().bold());
    }
}

//! Apply metadata corrections across the vault.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::commands::scan::{compile_filter, print_changes, print_errors};
use crate::config;
use crate::fs::Vault;
use crate::hierarchy::ChangeKind;
use crate::models::RunMode;
use crate::pipeline;

/// Reconcile every note and write updated frontmatter back to disk.
///
/// Ctrl-C stops the batch between files: the in-flight note is finished
/// and written cleanly before the run winds down.
pub fn execute(vault_path: Option<PathBuf>, pattern: Option<String>) -> Result<()> {
    let root = config::resolve_vault_root(vault_path)?;
    let vault = Vault::open(&root)?;
    let filter = compile_filter(pattern)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("Failed to install Ctrl-C handler")?;
    }

    println!("{}", "Reconciling vault metadata...".bold());
    println!("Vault: {}", vault.root().display());

    let report = pipeline::process_vault(&vault, filter.as_ref(), RunMode::Fix, Some(&interrupted))?;

    print_changes(&report);
    print_errors(&report);

    let updated = report.notes.iter().filter(|note| note.wrote).count();
    println!("\n{}", "Summary".bold());
    println!("  Files scanned: {}", report.files_seen());
    println!("  Files updated: {updated}");
    println!("  Fields added:     {}", report.changes_of(ChangeKind::Added));
    println!(
        "  Fields corrected: {}",
        report.changes_of(ChangeKind::Corrected)
    );
    println!(
        "  Fields removed:   {}",
        report.changes_of(ChangeKind::Removed)
    );
    if report.files_errored() > 0 {
        println!(
            "  {}",
            format!("Skipped: {}", report.files_errored()).red()
        );
    }

    if report.interrupted {
        println!(
            "\n{}",
            "Interrupted - remaining notes were not visited. Re-run 'lectern fix' to finish."
                .yellow()
                .bold()
        );
    } else if updated == 0 && report.files_errored() == 0 {
        println!("\n{}", "All hierarchy metadata was already consistent!".green().bold());
    }

    Ok(())
}

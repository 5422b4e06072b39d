//! Explain how one note classifies and what reconciliation would change.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config;
use crate::fs::{note_io, Vault};
use crate::hierarchy::{classify, derive_index_type, reconcile_frontmatter, ChangeKind};

/// Show classification, canonical values, and pending changes for a file.
pub fn execute(vault_path: Option<PathBuf>, file: PathBuf) -> Result<()> {
    let root = config::resolve_vault_root(vault_path)?;
    let vault = Vault::open(&root)?;

    let file = if file.is_absolute() {
        file
    } else {
        std::env::current_dir()
            .context("Failed to determine current directory")?
            .join(file)
    };
    let file = file
        .canonicalize()
        .with_context(|| format!("File not found: {}", file.display()))?;

    let classification = classify(vault.root(), &file)?;
    let index_type = derive_index_type(&classification);

    println!("{}", vault.relative_display(&file).bold().blue());
    println!("{}", "=".repeat(50));

    println!("\n{}", "Classification".bold());
    println!("  Depth:      {}", classification.depth);
    println!(
        "  Folders:    {}",
        if classification.segments.is_empty() {
            "(vault root)".to_string()
        } else {
            classification.segments.join(" / ")
        }
    );
    println!(
        "  Index file: {}",
        if classification.is_index_file { "yes" } else { "no" }
    );
    println!("  Index-type: {index_type}");

    let doc = note_io::read_note(&file)?;
    let (_, result) = reconcile_frontmatter(vault.root(), &file, &doc.frontmatter)?;

    if result.changes.is_empty() {
        println!("\n{}", "Frontmatter is up to date.".green().bold());
        return Ok(());
    }

    println!("\n{}", "Pending changes".bold());
    for change in &result.changes {
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
        println!("  {line}");
    }
    println!("\nRun {} to apply.", "lectern fix".bold());

    Ok(())
}

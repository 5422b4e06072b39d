use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use lectern::commands::completions::{generate_completions, Shell};
use lectern::commands::{check, fix, scan};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Course vault metadata CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the vault root (overrides LECTERN_VAULT and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    vault: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the vault and report pending metadata changes (dry run)
    Scan {
        /// Only scan notes whose vault-relative path matches this glob
        #[arg(short = 'm', long = "match", value_name = "GLOB")]
        pattern: Option<String>,

        /// Emit the full run report as JSON instead of the dashboard
        #[arg(long)]
        json: bool,
    },

    /// Reconcile hierarchy metadata and write corrections back to disk
    Fix {
        /// Only fix notes whose vault-relative path matches this glob
        #[arg(short = 'm', long = "match", value_name = "GLOB")]
        pattern: Option<String>,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Explain how one note classifies and what reconciliation would change
    Check {
        /// Path to the note (absolute, or relative to the current directory)
        file: PathBuf,
    },

    /// Generate shell completions (bash, zsh, fish)
    Completions {
        /// Target shell
        shell: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { pattern, json } => scan::execute(cli.vault, pattern, json),
        Commands::Fix { pattern, dry_run } => {
            if dry_run {
                scan::execute(cli.vault, pattern, false)
            } else {
                fix::execute(cli.vault, pattern)
            }
        }
        Commands::Check { file } => check::execute(cli.vault, file),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}

//! mdnotes - A terminal notebook with one markdown file per note.
//!
//! # Usage
//!
//! ```bash
//! mdnotes
//! mdnotes ~/notes
//! mdnotes --modifier super --save
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdnotes::app::App;
use mdnotes::config::{
    ConfigFlags, ModifierKey, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, save_config_flags,
};
use mdnotes::notebook::Limits;
use mdnotes::vault::Vault;

/// A terminal notebook with one markdown file per note
#[derive(Parser, Debug)]
#[command(name = "mdnotes", version, about, long_about = None)]
struct Cli {
    /// Directory holding the notes
    #[arg(value_name = "VAULT", default_value = "vault")]
    vault: PathBuf,

    /// Modifier key for shortcuts (default: Super on macOS, Ctrl elsewhere)
    #[arg(long, value_enum)]
    modifier: Option<ModifierKey>,

    /// Maximum number of notes
    #[arg(long, value_name = "N")]
    max_notes: Option<usize>,

    /// Maximum size of a note body in bytes
    #[arg(long, value_name = "BYTES")]
    max_note_bytes: Option<usize>,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        modifier: cli.modifier,
        max_notes: cli.max_notes,
        max_note_bytes: cli.max_note_bytes,
        log_file: cli.log_file.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_deref())?;

    let defaults = Limits::default();
    let limits = Limits {
        max_notes: effective.max_notes.unwrap_or(defaults.max_notes),
        max_content_bytes: effective
            .max_note_bytes
            .unwrap_or(defaults.max_content_bytes),
        ..defaults
    };
    let modifier = effective.modifier.unwrap_or_else(ModifierKey::detect);

    let mut app = App::new(Vault::new(cli.vault))
        .with_limits(limits)
        .with_modifier(modifier);

    app.run().context("Application error")
}

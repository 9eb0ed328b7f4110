//! SpudPad - An ultra-minimal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! spudpad notes.txt
//! spudpad --wrap notes.txt
//! spudpad --wrap --save        # remember --wrap as a default
//! ```

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use spudpad::app::App;
use spudpad::clipboard::{MemoryClipboard, SystemClipboard};
use spudpad::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};

/// An ultra-minimal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "spudpad", version, about, long_about = None)]
struct Cli {
    /// Text file to edit (created on first save if it does not exist)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Start with word wrap enabled
    #[arg(long)]
    wrap: bool,

    /// Keep cut/copy/paste inside spudpad instead of the system clipboard
    #[arg(long)]
    internal_clipboard: bool,

    /// Write diagnostic logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            wrap: self.wrap,
            internal_clipboard: self.internal_clipboard,
            log_file: self.log_file.clone(),
        }
    }
}

/// Logs go to `--log-file` when given. Otherwise they go to stderr, but only
/// when stderr is redirected, since the terminal belongs to the editor.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let (writer, level) = if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        (BoxMakeWriter::new(Mutex::new(file)), tracing::Level::INFO)
    } else if std::io::stderr().is_terminal() {
        (BoxMakeWriter::new(std::io::sink), tracing::Level::WARN)
    } else {
        (BoxMakeWriter::new(std::io::stderr), tracing::Level::WARN)
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

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
    tracing::debug!(?effective, "effective configuration");

    if let Some(file) = &cli.file
        && file.is_dir()
    {
        anyhow::bail!("Not a file: {}", file.display());
    }

    let clipboard: Box<dyn spudpad::clipboard::Clipboard> = if effective.internal_clipboard {
        Box::new(MemoryClipboard::new())
    } else {
        Box::new(SystemClipboard::new())
    };

    // Run the application
    let mut app = App::new(cli.file)
        .with_word_wrap(effective.wrap)
        .with_clipboard(clipboard)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}

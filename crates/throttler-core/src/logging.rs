//! Tracing setup: append to a log file under the XDG state dir, or write to stderr.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,throttler=debug,throttler_core=debug";

/// Where log events go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// `~/.local/state/throttler/throttler.log`
pub fn default_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("throttler")?;
    Ok(xdg_dirs
        .get_state_home()
        .join("throttler")
        .join("throttler.log"))
}

/// Open `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

/// `RUST_LOG` if set and valid, else the built-in directives.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber for `target`. Fails if the log file cannot be
/// opened or a subscriber is already installed.
pub fn init(target: &LogTarget) -> Result<()> {
    let writer = match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("{e}"))?;

    if let LogTarget::File(path) = target {
        tracing::info!("throttler logging initialized at {}", path.display());
    }
    Ok(())
}

/// Log to the default file. On error the caller should fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    init(&LogTarget::File(default_log_path()?))
}

/// Log to stderr only, for when the state dir is unusable.
pub fn init_logging_stderr() {
    // A subscriber that is already installed is fine here.
    let _ = init(&LogTarget::Stderr);
}

use std::path::{Path, PathBuf};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// One-shot CLI commands.
    Stderr,
    /// TUI mode. Writing to the terminal would corrupt the display.
    File(PathBuf),
}

/// `<data_dir>/scripture-reader/scripture.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("scripture-reader").join("scripture.log"))
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_timer(UtcTime::rfc_3339());
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = match open_log_file(&path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("Warning: Failed to open log file {}: {}", path.display(), err);
                    return;
                }
            };
            let layer = fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_timer(UtcTime::rfc_3339());
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

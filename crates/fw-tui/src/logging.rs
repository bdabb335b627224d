use std::path::PathBuf;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging for the console.
///
/// stdout belongs to the terminal UI, so log lines go to
/// `~/.fraudwatch/fw-tui.log` (append), falling back to stderr when the
/// file cannot be opened. `RUST_LOG` overrides `default_level`.
///
/// Safe to call multiple times (e.g. in tests) -- subsequent calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match open_log_file() {
        Some(file) => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .try_init()
                .ok();
        }
        None => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .try_init()
                .ok();
        }
    }

    tracing::info!("logging initialised");
}

fn open_log_file() -> Option<std::fs::File> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).ok()?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()
}

fn log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fraudwatch")
        .join("fw-tui.log")
}

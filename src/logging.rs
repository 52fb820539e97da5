use crate::utils::paths::{ensure_directories_exist, get_log_path};
use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Log to `~/.wallet-deck/walletdeck.log`. The TUI owns the terminal, so
/// nothing may be written to stdout or stderr while it runs.
pub fn init_file_logging() -> Result<()> {
    ensure_directories_exist()?;
    let log_path = get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

pub fn init_stderr_logging(default_level: &str) -> Result<()> {
    fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

use crate::dashboard::Dashboard;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the dashboard data file. A missing file yields the default
/// dashboard rather than an error.
pub fn load_dashboard(path: &Path) -> Result<Dashboard> {
    if !path.exists() {
        debug!(path = %path.display(), "No data file, using default dashboard");
        return Ok(Dashboard::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;

    let dashboard: Dashboard = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data file: {}", path.display()))?;

    let duplicates = dashboard.duplicate_wallet_ids();
    if !duplicates.is_empty() {
        warn!(path = %path.display(), ids = ?duplicates, "Data file has duplicate wallet ids");
    }

    info!(
        path = %path.display(),
        wallets = dashboard.wallets.len(),
        stats = dashboard.stats.len(),
        snippets = dashboard.snippets.len(),
        "Loaded dashboard"
    );

    Ok(dashboard)
}

pub fn save_dashboard(path: &Path, dashboard: &Dashboard) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let content =
        serde_json::to_string_pretty(dashboard).context("Failed to serialize dashboard")?;

    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

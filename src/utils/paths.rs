use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;

pub fn get_wallet_deck_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".wallet-deck"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_wallet_deck_dir()?.join("config.toml"))
}

pub fn get_default_data_path() -> Result<PathBuf> {
    Ok(get_wallet_deck_dir()?.join("dashboard.json"))
}

pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_wallet_deck_dir()?.join("walletdeck.log"))
}

pub fn ensure_directories_exist() -> Result<()> {
    let dir = get_wallet_deck_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(())
}

use anyhow::{Result, bail};
use clap::Parser;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use wallet_deck::app::AppState;
use wallet_deck::cli::{Cli, Commands};
use wallet_deck::clipboard::{ClipboardWriter, copy_to_clipboard};
use wallet_deck::config::Config;
use wallet_deck::dashboard::Dashboard;
use wallet_deck::keybindings::KeybindingCache;
use wallet_deck::logging;
use wallet_deck::storage::{load_dashboard, save_dashboard};
use wallet_deck::ui::{self, theme::Theme};
use wallet_deck::utils::format::{format_amount, format_signed_amount};
use wallet_deck::wallet::Wallet;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_path = config.data_path(cli.data)?;

    match cli.command {
        Some(Commands::Show { wallet }) => {
            logging::init_stderr_logging("warn")?;
            handle_show(&data_path, wallet.as_deref())?;
        }
        Some(Commands::Copy { index }) => {
            logging::init_stderr_logging("warn")?;
            handle_copy(&data_path, index)?;
        }
        Some(Commands::Init { force }) => {
            logging::init_stderr_logging("info")?;
            handle_init(&data_path, force)?;
        }
        None => {
            // No command - launch TUI
            logging::init_file_logging()?;
            info!(data = %data_path.display(), "Starting walletdeck");

            let dashboard = load_dashboard(&data_path)?;
            let state = AppState::new(
                dashboard,
                data_path,
                Theme::from_config(&config),
                KeybindingCache::from_config(&config.keybindings),
                Box::new(ClipboardWriter::system()?),
            );

            ui::run_tui(state, Duration::from_millis(config.tick_rate_ms.max(10)))?;
            info!("walletdeck exited");
        }
    }

    Ok(())
}

fn handle_show(data_path: &Path, wallet_id: Option<&str>) -> Result<()> {
    let dashboard = load_dashboard(data_path)?;

    if let Some(id) = wallet_id {
        let Some(wallet) = dashboard.find_wallet(id) else {
            bail!("No wallet with id '{id}' in {}", data_path.display());
        };
        print_wallet(wallet);
        println!();
        return Ok(());
    }

    if dashboard.is_empty() {
        println!("No wallets or stats in {}", data_path.display());
        return Ok(());
    }

    if !dashboard.stats.is_empty() {
        println!();
        for card in &dashboard.stats {
            let trend = card
                .trend
                .as_ref()
                .map(|t| format!(" {} {}", t.arrow(), t.value))
                .unwrap_or_default();
            println!("{} {}: {}{}", card.icon.glyph(), card.title, card.value, trend);
            if let Some(subtitle) = &card.subtitle {
                println!("    {subtitle}");
            }
        }
    }

    for wallet in &dashboard.wallets {
        print_wallet(wallet);
    }

    println!();

    Ok(())
}

fn print_wallet(wallet: &Wallet) {
    println!(
        "\n{} {} ({}) [{}]",
        wallet.kind.glyph(),
        wallet.display_name(),
        wallet.kind,
        wallet.id
    );
    println!("  {}", wallet.description);
    println!(
        "  LAN {}  EUR {}",
        format_amount(wallet.lan_amount),
        format_amount(wallet.eur_amount)
    );

    if let Some(n) = &wallet.notification {
        let action = n.action.as_ref().map(|a| format!(" [{a}]")).unwrap_or_default();
        println!("  {} {}: {}{}", n.kind.glyph(), n.kind, n.message, action);
    }

    for event in &wallet.events {
        let amount = event
            .amount
            .map(|a| format!(" {}", format_signed_amount(a)))
            .unwrap_or_default();
        println!(
            "    {} {} {} {}{}",
            event.timestamp.format("%Y-%m-%d %H:%M"),
            event.kind.glyph(),
            event.kind,
            event.description,
            amount
        );
    }
}

fn handle_copy(data_path: &Path, index: usize) -> Result<()> {
    let dashboard = load_dashboard(data_path)?;

    let Some(snippet) = index.checked_sub(1).and_then(|i| dashboard.snippet(i)) else {
        bail!(
            "No snippet #{index} (available: 1-{})",
            dashboard.snippets.len()
        );
    };

    copy_to_clipboard(&snippet.code)?;
    println!("✓ Copied \"{}\" to clipboard", snippet.title);

    Ok(())
}

fn handle_init(data_path: &Path, force: bool) -> Result<()> {
    if data_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            data_path.display()
        );
    }

    save_dashboard(data_path, &Dashboard::default())?;
    info!(path = %data_path.display(), "Wrote default dashboard");
    println!("✓ Wrote {}", data_path.display());

    Ok(())
}

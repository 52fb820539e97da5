pub mod components;
pub mod theme;

use crate::app::{AppState, event::handle_key_event};
use anyhow::Result;
use crossterm::{
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

struct TerminalGuard {
    keyboard_enhancement: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhancement {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

pub fn run_tui(mut state: AppState, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let supports_keyboard_enhancement = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok();

    let _guard = TerminalGuard {
        keyboard_enhancement: supports_keyboard_enhancement,
    };

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (file_tx, file_rx) = mpsc::channel();
    let _watcher = setup_data_file_watcher(&state.data_path, file_tx);

    let result = run_app(&mut terminal, &mut state, file_rx, tick_rate);
    terminal.show_cursor()?;

    result
}

/// Watch the data file's directory so the file may be created after startup.
fn setup_data_file_watcher(
    data_path: &Path,
    tx: mpsc::Sender<()>,
) -> Option<RecommendedWatcher> {
    let dir = match data_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = data_path.file_name()?.to_os_string();

    let watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                let touches_data_file = event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()));
                if touches_data_file && (event.kind.is_modify() || event.kind.is_create()) {
                    let _ = tx.send(());
                }
            }
        },
        Config::default(),
    );

    match watcher {
        Ok(mut w) => match w.watch(&dir, RecursiveMode::NonRecursive) {
            Ok(()) => {
                debug!(dir = %dir.display(), "Watching data directory");
                Some(w)
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Could not watch data directory");
                None
            }
        },
        Err(e) => {
            warn!(error = %e, "File watcher unavailable");
            None
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    file_rx: mpsc::Receiver<()>,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        state.tick(Instant::now());

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(key, state)?;
                }
            }
        }

        let mut should_reload = false;
        while file_rx.try_recv().is_ok() {
            should_reload = true;
        }
        if should_reload {
            if let Err(e) = state.reload_from_file() {
                let message = format!("{e:#}");
                error!(error = %message, "Reload failed, keeping previous dashboard");
                state.set_status_message(
                    "Data file invalid, keeping previous data",
                    Instant::now(),
                );
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

use super::state::AppState;
use crate::keybindings::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use std::time::Instant;
use tracing::debug;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if let Some(action) = state.keybindings.lookup(&key) {
        handle_action(action, state, Instant::now());
    }
    Ok(())
}

pub fn handle_action(action: Action, state: &mut AppState, now: Instant) {
    debug!(%action, "Handling action");

    if state.show_help {
        match action {
            Action::ToggleHelp | Action::CloseHelp => state.show_help = false,
            Action::Quit => state.should_quit = true,
            _ => {}
        }
        return;
    }

    match action {
        Action::MoveUp => state.move_cursor_up(),
        Action::MoveDown => state.move_cursor_down(),
        Action::NextSnippet => state.next_snippet(),
        Action::PrevSnippet => state.prev_snippet(),
        Action::CopySnippet => state.copy_snippet(now),
        Action::CopyWalletId => state.copy_wallet_id(now),
        Action::ToggleHelp => state.show_help = true,
        Action::CloseHelp => {}
        Action::Quit => state.should_quit = true,
    }
}

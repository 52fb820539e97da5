use crate::app::AppState;
use crate::keybindings::Action;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect, now: Instant) {
    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let pending = state
        .dashboard
        .wallets
        .iter()
        .filter(|w| w.has_pending_notification())
        .count();
    let pending_text = if pending > 0 {
        format!(" ({pending} pending)")
    } else {
        String::new()
    };

    let left_content = format!(
        " {} wallets{} | {} snippets",
        state.dashboard.wallets.len(),
        pending_text,
        state.dashboard.snippets.len(),
    );

    let (message, message_style) = match &state.status_message {
        Some((message, _)) => (
            format!(" | {message}"),
            base_style.add_modifier(Modifier::BOLD),
        ),
        None => (String::new(), base_style),
    };

    let copy_hint = match state.snippet_copy.remaining(now) {
        Some(left) if state.snippet_copy.is_copied() => {
            format!("copied ({:.1}s)  ", left.as_secs_f32())
        }
        _ => key_hint(state, Action::CopySnippet, "copy"),
    };
    let right_content = format!(
        "{copy_hint}{}{}v{VERSION} ",
        key_hint(state, Action::ToggleHelp, "help"),
        key_hint(state, Action::Quit, "quit"),
    );

    let used = left_content.width() + message.width() + right_content.width();
    let padding = (area.width as usize).saturating_sub(used);

    let status = Paragraph::new(Line::from(vec![
        Span::styled(left_content, base_style),
        Span::styled(message, message_style),
        Span::styled(" ".repeat(padding), base_style),
        Span::styled(right_content, base_style),
    ]));

    f.render_widget(status, area);
}

/// `"<key> <label>  "` for the first key bound to `action`, or nothing when unbound.
fn key_hint(state: &AppState, action: Action, label: &str) -> String {
    match state.keybindings.keys_for(action).first() {
        Some(key) => format!("{key} {label}  "),
        None => String::new(),
    }
}

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const MAX_VISIBLE_LINES: u16 = 8;

/// Height of the snippet panel including borders.
pub fn preferred_height(state: &AppState) -> u16 {
    let lines = state
        .current_snippet()
        .map(|s| u16::try_from(s.lines().count().max(1)).unwrap_or(u16::MAX))
        .unwrap_or(1);
    lines.min(MAX_VISIBLE_LINES) + 2
}

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let Some(snippet) = state.current_snippet() else {
        let block = Block::default().borders(Borders::ALL).title(" Snippet ");
        let empty = Paragraph::new(Span::styled("No snippets", Style::default().fg(theme.muted)))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let title = match &snippet.language {
        Some(language) => format!(" {} · {} ", snippet.title, language),
        None => format!(" {} ", snippet.title),
    };

    let status = &state.snippet_copy;
    let button_style = if status.is_copied() {
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.cursor)
    };
    let button = Line::from(Span::styled(
        format!(" [{} {}] ", status.icon(), status.label()),
        button_style,
    ))
    .right_aligned();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_top(button);

    let count = state.dashboard.snippets.len();
    if count > 1 {
        block = block.title_bottom(
            Line::from(format!(" {}/{} ", state.snippet_index + 1, count)).right_aligned(),
        );
    }

    let code_style = Style::default().fg(theme.code);
    let lines: Vec<Line> = snippet
        .lines()
        .map(|line| Line::from(Span::styled(line, code_style)))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

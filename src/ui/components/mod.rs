pub mod code_snippet;
pub mod stat_cards;
pub mod status_bar;
pub mod wallet_detail;
pub mod wallet_list;

use crate::app::AppState;
use crate::keybindings::Action;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::Instant;

pub fn render(f: &mut Frame, state: &AppState) {
    let stats_height = if state.dashboard.stats.is_empty() { 0 } else { 5 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(stats_height),                          // Stat cards
            Constraint::Min(6),                                        // Wallets
            Constraint::Length(code_snippet::preferred_height(state)), // Snippet viewer
            Constraint::Length(1),                                     // Status bar
        ])
        .split(f.area());

    if stats_height > 0 {
        stat_cards::render(f, state, chunks[0]);
    }

    let wallet_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    wallet_list::render(f, state, wallet_chunks[0]);
    wallet_detail::render(f, state, wallet_chunks[1]);
    code_snippet::render(f, state, chunks[2]);
    status_bar::render(f, state, chunks[3], Instant::now());

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let key_style = Style::default()
        .fg(state.theme.cursor)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(state.theme.foreground);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Keys", key_style)),
        Line::from(""),
    ];
    for action in Action::ALL {
        let keys = state.keybindings.keys_for(action);
        if keys.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", keys.join(" ")), key_style),
            Span::styled(action.description(), text_style),
        ]));
    }

    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

use crate::app::AppState;
use crate::dashboard::StatCard;
use crate::ui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let cards = &state.dashboard.stats;
    if cards.is_empty() {
        return;
    }

    let count = cards.len() as u32;
    let constraints: Vec<Constraint> = cards.iter().map(|_| Constraint::Ratio(1, count)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        f.render_widget(card_widget(card, &state.theme), *column);
    }
}

fn card_widget<'a>(card: &'a StatCard, theme: &Theme) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.card_border))
        .title(format!(" {} {} ", card.icon.glyph(), card.title));

    Paragraph::new(card_lines(card, theme)).block(block)
}

fn card_lines<'a>(card: &'a StatCard, theme: &Theme) -> Vec<Line<'a>> {
    let mut headline = vec![Span::styled(
        card.value.as_str(),
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(trend) = &card.trend {
        headline.push(Span::raw("  "));
        headline.push(Span::styled(
            format!("{} {}", trend.arrow(), trend.value),
            Style::default().fg(theme.trend(trend.is_positive)),
        ));
    }

    let mut lines = vec![Line::from(headline)];
    if let Some(subtitle) = &card.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.as_str(),
            Style::default().fg(theme.muted),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Dashboard, StatIcon};
    use crate::ui::components::test_support::{render_to_string, state_for};

    #[test]
    fn test_card_lines_without_optionals() {
        let card = StatCard::new("Wallets", "3", StatIcon::Wallet);
        let lines = card_lines(&card, &Theme::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 1);
    }

    #[test]
    fn test_card_lines_with_trend_and_subtitle() {
        let card = StatCard::new("EUR", "1,200", StatIcon::Coins)
            .with_subtitle("all wallets")
            .with_trend("-3%", false);
        let lines = card_lines(&card, &Theme::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[2].content, "▼ -3%");
        assert_eq!(lines[0].spans[2].style.fg, Some(Theme::default().negative));
    }

    #[test]
    fn test_cards_render_side_by_side() {
        let mut dashboard = Dashboard::default();
        dashboard.stats.push(StatCard::new("Wallets", "3", StatIcon::Wallet));
        dashboard
            .stats
            .push(StatCard::new("Alerts", "1", StatIcon::Bell).with_trend("+1", true));
        let state = state_for(dashboard);

        let screen = render_to_string(&state, 100, 30);
        let title_row = screen.lines().next().unwrap();
        assert!(title_row.contains("Wallets"));
        assert!(title_row.contains("Alerts"));
        assert!(screen.contains("▲ +1"));
    }
}

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Wallets ({}) ", state.dashboard.wallets.len()));

    if state.dashboard.wallets.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No wallets",
            Style::default().fg(state.theme.muted),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .dashboard
        .wallets
        .iter()
        .map(|wallet| {
            let marker = match &wallet.notification {
                Some(n) => Span::styled(
                    format!(" {}", n.kind.glyph()),
                    Style::default().fg(state.theme.notification(n.kind)),
                ),
                None => Span::raw(""),
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", wallet.kind.glyph())),
                    Span::styled(
                        wallet.display_name(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", wallet.kind),
                        Style::default().fg(state.theme.muted),
                    ),
                    marker,
                ]),
                Line::from(Span::styled(
                    format!("  {}", wallet.description),
                    Style::default().fg(state.theme.muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .highlight_style(
            Style::default()
                .fg(state.theme.cursor)
                .add_modifier(Modifier::REVERSED),
        );

    let mut list_state = ListState::default().with_selected(Some(state.cursor_position));
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use crate::dashboard::Dashboard;
    use crate::ui::components::test_support::{render_to_string, state_for};
    use crate::wallet::{NotificationKind, Wallet, WalletKind, WalletNotification};

    #[test]
    fn test_lists_wallets_with_notification_marker() {
        let mut dashboard = Dashboard::default();
        let mut wallet = Wallet::new("w-1", 7, WalletKind::Exchange, "Trading");
        wallet.notification = Some(WalletNotification::new(
            "n-1",
            NotificationKind::Warning,
            "Verify account",
        ));
        dashboard.wallets.push(wallet);
        let state = state_for(dashboard);

        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Wallets (1)"));
        assert!(screen.lines().any(|l| l.contains("Wallet #7  Exchange !")));
    }
}

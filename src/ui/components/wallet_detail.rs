use crate::app::AppState;
use crate::copy::CopyStatus;
use crate::ui::theme::Theme;
use crate::utils::format::{format_amount, format_signed_amount};
use crate::wallet::{Wallet, WalletEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(wallet) = state.selected_wallet() else {
        let block = Block::default().borders(Borders::ALL).title(" Details ");
        f.render_widget(block, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", wallet.display_name()))
        .title_top(copy_badge(&wallet.id, &state.wallet_id_copy, &state.theme).right_aligned());

    let paragraph = Paragraph::new(detail_lines(wallet, &state.theme))
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn copy_badge<'a>(id: &'a str, status: &CopyStatus, theme: &Theme) -> Line<'a> {
    let badge_style = if status.is_copied() {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };

    Line::from(vec![
        Span::styled(format!(" {id} "), Style::default().fg(theme.muted)),
        Span::styled(format!("[{} {}] ", status.icon(), status.label()), badge_style),
    ])
}

fn detail_lines<'a>(wallet: &'a Wallet, theme: &Theme) -> Vec<Line<'a>> {
    let label = Style::default().fg(theme.muted);
    let value = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Type         ", label),
            Span::raw(format!("{} {}", wallet.kind.glyph(), wallet.kind)),
        ]),
        Line::from(vec![
            Span::styled("Description  ", label),
            Span::raw(wallet.description.as_str()),
        ]),
        Line::from(vec![
            Span::styled("LAN          ", label),
            Span::styled(format_amount(wallet.lan_amount), value),
        ]),
        Line::from(vec![
            Span::styled("EUR          ", label),
            Span::styled(format_amount(wallet.eur_amount), value),
        ]),
    ];

    if let Some(notification) = &wallet.notification {
        let style = Style::default().fg(theme.notification(notification.kind));
        let mut spans = vec![
            Span::styled(
                format!("{} {}: ", notification.kind.glyph(), notification.kind),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(notification.message.as_str(), style),
        ];
        if let Some(action) = &notification.action {
            spans.push(Span::styled(
                format!("  [{action}]"),
                style.add_modifier(Modifier::UNDERLINED),
            ));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Events ({})", wallet.events.len()),
        label.add_modifier(Modifier::BOLD),
    )));

    if wallet.events.is_empty() {
        lines.push(Line::from(Span::styled("  No events", label)));
    }

    for event in &wallet.events {
        let kind_style = match event.kind {
            WalletEventKind::Alert => Style::default().fg(theme.warning),
            WalletEventKind::Transaction => Style::default().fg(theme.foreground),
            WalletEventKind::UnregisteredBalance => Style::default().fg(theme.info),
        };

        let mut spans = vec![
            Span::styled(
                format!("  {} ", event.timestamp.format("%Y-%m-%d %H:%M")),
                label,
            ),
            Span::styled(
                format!("{} {:<20} ", event.kind.glyph(), event.kind.label()),
                kind_style,
            ),
            Span::raw(event.description.as_str()),
        ];
        if let Some(amount) = event.amount {
            spans.push(Span::styled(
                format!("  {}", format_signed_amount(amount)),
                Style::default().fg(theme.trend(amount >= 0.0)),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::ui::components::test_support::{render_to_string, state_for};
    use crate::wallet::{NotificationKind, WalletEvent, WalletKind, WalletNotification};
    use chrono::{TimeZone, Utc};
    use std::time::Instant;

    fn sample_wallet() -> Wallet {
        let mut wallet = Wallet::new("w-42", 4, WalletKind::Hardware, "Trezor");
        wallet.lan_amount = 1520.25;
        wallet.events.push(
            WalletEvent::new(
                "e-1",
                Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap(),
                WalletEventKind::Transaction,
                "Deposit",
            )
            .with_amount(-12.0),
        );
        wallet.notification = Some(
            WalletNotification::new("n-1", NotificationKind::Info, "Firmware 2.1 available")
                .with_action("Update"),
        );
        wallet
    }

    #[test]
    fn test_detail_lines_cover_fields() {
        let wallet = sample_wallet();
        let text: Vec<String> = detail_lines(&wallet, &Theme::default())
            .iter()
            .map(|l| l.to_string())
            .collect();

        assert!(text.iter().any(|l| l.contains("1,520.25")));
        assert!(
            text.iter()
                .any(|l| l.contains("Firmware 2.1 available") && l.contains("[Update]"))
        );
        assert!(
            text.iter()
                .any(|l| l.contains("2025-06-02 09:30") && l.contains("-12.00"))
        );
        assert!(text.iter().any(|l| l == "Events (1)"));
    }

    #[test]
    fn test_empty_events_placeholder() {
        let wallet = Wallet::new("w-1", 1, WalletKind::Software, "Phone");
        let text: Vec<String> = detail_lines(&wallet, &Theme::default())
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text.iter().any(|l| l.contains("No events")));
    }

    #[test]
    fn test_title_shows_copy_state() {
        let mut dashboard = Dashboard::default();
        dashboard.wallets.push(sample_wallet());
        let mut state = state_for(dashboard);

        let screen = render_to_string(&state, 120, 30);
        assert!(screen.contains("[⧉ Copy]"));

        state.copy_wallet_id(Instant::now());
        let screen = render_to_string(&state, 120, 30);
        assert!(screen.contains("w-42"));
        assert!(screen.contains("[✓ Copied]"));
    }
}

//! Overview row for the active account
//!
//! Shared by the multi-account and single-account panels. Activating the row
//! is handled by the owning panel.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::context::Account;
use crate::tui::utils::formatting::format_address;

/// Height of the overview row including borders
pub const OVERVIEW_HEIGHT: u16 = 4;

pub fn render_account_overview(f: &mut Frame, account: &Account, area: Rect, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Blue)
    };

    let address = if account.address.is_empty() {
        Span::styled("no address", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            format_address(&account.address),
            Style::default().fg(Color::Gray),
        )
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                account.id.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(address),
    ];

    let overview = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Account"),
    );
    f.render_widget(overview, area);
}

//! First-use explanation shown from the single-account panel

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::tui::utils::responsive::popup_area;

pub const HOW_TO_TITLE: &str = "How accounts work";

fn how_to_lines(can_add: bool) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::White);

    let more_accounts = if can_add {
        "Press a to add another account. The wallet then lists all of its \
         accounts here."
    } else {
        "Set multi_account = true in the configuration file to manage \
         several accounts from the same wallet."
    };
    let close_hint = if can_add {
        "a add account | Esc/Enter close"
    } else {
        "Esc/Enter to close"
    };

    vec![
        Line::from(Span::styled("Your account", heading)),
        Line::from(Span::styled(
            "This wallet holds one account, shown as Account 1. Its address is \
             what you share with others to receive funds.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled("Sending and receiving", heading)),
        Line::from(Span::styled(
            "Use Send and Receive in the navigation panel. Receive shows the \
             address above.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled("More accounts", heading)),
        Line::from(Span::styled(more_accounts, body)),
        Line::from(""),
        Line::from(Span::styled(close_hint, Style::default().fg(Color::Gray))),
    ]
}

/// `can_add` offers the add-account key instead of the config hint
pub fn render_how_to(f: &mut Frame, area: Rect, can_add: bool) {
    let popup = popup_area(area, 60, 60);
    f.render_widget(Clear, popup);

    let paragraph = Paragraph::new(how_to_lines(can_add))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(HOW_TO_TITLE)
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup);
}

//! Status Bar Component
//!
//! This component displays the bottom status bar with the last status or
//! error message and context-sensitive keyboard shortcuts.

use crate::tui::app::{AccountsView, App, Focus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render the status bar component
pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Status/message area
            Constraint::Percentage(50), // Help/shortcuts area
        ])
        .split(area);

    render_status_section(f, app, status_chunks[0]);
    render_help_section(f, app, status_chunks[1]);
}

/// Render the status/message section
fn render_status_section(f: &mut Frame, app: &App, area: Rect) {
    let (text, color, title) = if let Some(error) = &app.state.error_message {
        (format!("✗ {}", error), Color::Red, "Error")
    } else if let Some(status) = &app.state.status_message {
        (status.clone(), Color::Blue, "Status")
    } else {
        (default_status(app), Color::Cyan, "Status")
    };

    let status_text = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        );
    f.render_widget(status_text, area);
}

/// Status shown when no specific message is set
fn default_status(app: &App) -> String {
    format!(
        "Ready | Route: {} | Mode: {}",
        app.current_path(),
        if app.is_privileged() { "Admin" } else { "User" }
    )
}

/// Render help/shortcuts section
fn render_help_section(f: &mut Frame, app: &App, area: Rect) {
    let help = Paragraph::new(get_context_help(app))
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title("Help"),
        );
    f.render_widget(help, area);
}

/// Get context-sensitive help text based on the open dialog or focused panel
pub fn get_context_help(app: &App) -> String {
    if app.has_open_dialog() {
        return "Esc:Close | Enter:Confirm".to_string();
    }

    let base_help = "Tab:Panel | q:Quit | ?:Help";
    let panel_help = match (app.state.focus, &app.state.accounts_view) {
        (Focus::Navigation, _) => "↑↓:Move | Enter:Open | 1-8:Jump",
        (Focus::Accounts, AccountsView::Multi(_)) => "Enter:Accounts",
        (Focus::Accounts, AccountsView::Single(_)) => "Enter:How it works",
    };

    format!("{} | {}", base_help, panel_help)
}

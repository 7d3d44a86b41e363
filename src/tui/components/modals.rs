//! Modal/Popup Components
//!
//! Information and help overlays.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};

use super::navigation::get_navigation_help;
use crate::tui::utils::responsive::popup_area;

/// Modal types for different use cases
#[derive(Debug, Clone, PartialEq)]
pub enum ModalType {
    Information {
        title: String,
        content: Vec<String>,
    },
    Help {
        title: String,
        sections: Vec<HelpSection>,
    },
}

/// Help section for help modal
#[derive(Debug, Clone, PartialEq)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>, // (key, description) pairs
}

/// Modal state
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub modal_type: ModalType,
    pub scroll_offset: usize,
}

impl ModalState {
    /// Create a new information modal
    pub fn information(title: String, content: Vec<String>) -> Self {
        Self {
            modal_type: ModalType::Information { title, content },
            scroll_offset: 0,
        }
    }

    /// Create a new help modal
    pub fn help(title: String, sections: Vec<HelpSection>) -> Self {
        Self {
            modal_type: ModalType::Help { title, sections },
            scroll_offset: 0,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let limit = self.line_count().saturating_sub(1);
        if self.scroll_offset < limit {
            self.scroll_offset += 1;
        }
    }

    fn line_count(&self) -> usize {
        match &self.modal_type {
            ModalType::Information { content, .. } => content.len(),
            ModalType::Help { sections, .. } => help_lines(sections).len(),
        }
    }
}

/// Help modal listing every key binding of the shell
pub fn create_help() -> ModalState {
    let to_owned = |items: Vec<(&str, &str)>| -> Vec<(String, String)> {
        items
            .into_iter()
            .map(|(key, description)| (key.to_string(), description.to_string()))
            .collect()
    };

    let sections = vec![
        HelpSection {
            title: "Navigation".to_string(),
            items: to_owned(get_navigation_help()),
        },
        HelpSection {
            title: "Accounts".to_string(),
            items: to_owned(vec![
                ("Enter", "Open accounts / switch account"),
                ("a", "Add account"),
                ("e", "Rename account"),
                ("m", "Show mnemonic"),
                ("Esc", "Close dialog"),
            ]),
        },
        HelpSection {
            title: "Global Actions".to_string(),
            items: to_owned(vec![
                ("?, F1", "Show this help"),
                ("Click", "Activate row"),
                ("Ctrl+C", "Force quit"),
            ]),
        },
    ];

    ModalState::help("Wallet Shell - Keyboard Shortcuts".to_string(), sections)
}

/// Render modal overlay
pub fn render_modal(f: &mut Frame, modal_state: &ModalState, area: Rect) {
    let modal_area = match &modal_state.modal_type {
        ModalType::Help { .. } => popup_area(area, 70, 70),
        ModalType::Information { .. } => popup_area(area, 60, 40),
    };

    f.render_widget(Clear, modal_area);

    match &modal_state.modal_type {
        ModalType::Information { title, content } => render_information_modal(
            f,
            title,
            content,
            modal_state.scroll_offset,
            modal_area,
        ),
        ModalType::Help { title, sections } => {
            render_help_modal(f, title, sections, modal_state.scroll_offset, modal_area)
        }
    }
}

fn render_information_modal(
    f: &mut Frame,
    title: &str,
    content: &[String],
    scroll_offset: usize,
    area: Rect,
) {
    let mut lines: Vec<Line> = content
        .iter()
        .skip(scroll_offset)
        .map(|line| Line::from(line.as_str()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc/Enter to close",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn help_lines(sections: &[HelpSection]) -> Vec<String> {
    let mut content = Vec::new();
    for section in sections {
        content.push(format!("═══ {} ═══", section.title));
        for (key, description) in &section.items {
            content.push(format!("  {:<12} {}", key, description));
        }
        content.push(String::new());
    }
    content.push("  Esc          Close help".to_string());
    content
}

fn render_help_modal(
    f: &mut Frame,
    title: &str,
    sections: &[HelpSection],
    scroll_offset: usize,
    area: Rect,
) {
    let items: Vec<ListItem> = help_lines(sections)
        .into_iter()
        .skip(scroll_offset)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.starts_with("═══") {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(title),
    );

    f.render_widget(list, area);
}

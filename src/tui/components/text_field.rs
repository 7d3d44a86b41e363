//! Single-line text input used by the account dialogs
//!
//! Wraps `tui_input::Input` with a title, an optional mask for secrets and an
//! inline error line.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{Input, InputRequest};

use crate::tui::events::Event;

#[derive(Debug, Clone, Default)]
pub struct TextField {
    input: Input,
    title: String,
    /// Render every character as `*`
    masked: bool,
    error: Option<String>,
}

impl TextField {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Create a field whose value is never shown
    pub fn masked(title: impl Into<String>) -> Self {
        Self {
            masked: true,
            ..Self::new(title)
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::default().with_value(value.into());
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.input.reset();
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Apply an editing event. Returns false for events the field ignores.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let request = match event {
            Event::Char(c) => InputRequest::InsertChar(*c),
            Event::Backspace => InputRequest::DeletePrevChar,
            Event::Delete => InputRequest::DeleteNextChar,
            Event::Left => InputRequest::GoToPrevChar,
            Event::Right => InputRequest::GoToNextChar,
            _ => return false,
        };
        if self.input.handle(request).is_some_and(|change| change.value) {
            self.error = None;
        }
        true
    }

    /// Text shown in the field
    pub fn display_value(&self) -> String {
        if self.masked {
            "*".repeat(self.input.value().chars().count())
        } else {
            self.input.value().to_string()
        }
    }

    /// Render the field into the top three rows of `area` and the error, if
    /// any, on the row below
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let border_color = if focused { Color::Yellow } else { Color::Gray };

        Paragraph::new(self.display_value())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(self.title.as_str()),
            )
            .style(Style::default().fg(Color::White))
            .render(chunks[0], buf);

        if focused {
            let cursor_x = chunks[0].x + 1 + self.input.visual_cursor() as u16;
            let cursor_y = chunks[0].y + 1;
            if cursor_x < chunks[0].right().saturating_sub(1) && cursor_y < chunks[0].bottom() {
                buf[(cursor_x, cursor_y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }

        if let Some(error) = &self.error {
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .render(chunks[1], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_editing() {
        let mut field = TextField::new("Name");
        for c in "Savx".chars() {
            assert!(field.handle_event(&Event::Char(c)));
        }
        field.handle_event(&Event::Backspace);
        field.handle_event(&Event::Char('e'));
        assert_eq!(field.value(), "Save");

        field.handle_event(&Event::Left);
        field.handle_event(&Event::Delete);
        assert_eq!(field.value(), "Sav");

        assert!(!field.handle_event(&Event::Enter));
    }

    #[test]
    fn test_typing_clears_error() {
        let mut field = TextField::new("Name");
        field.set_error("Account name cannot be empty");
        assert!(field.error().is_some());

        // Cursor moves leave the error in place
        field.handle_event(&Event::Left);
        assert!(field.error().is_some());

        field.handle_event(&Event::Char('a'));
        assert!(field.error().is_none());
    }

    #[test]
    fn test_masked_display() {
        let mut field = TextField::masked("Password");
        field.set_value("sécret");
        assert_eq!(field.display_value(), "******");
        assert_eq!(field.value(), "sécret");

        field.clear();
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_render_shows_error() {
        let mut field = TextField::new("Name");
        field.set_value("bad/name");
        field.set_error("Invalid name");

        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| field.render(f.area(), f.buffer_mut(), true))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("bad/name"));
        assert!(text.contains("Invalid name"));
    }
}

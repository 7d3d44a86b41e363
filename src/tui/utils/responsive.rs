//! Layout helpers shared by the shell and its dialogs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Minimum terminal size the shell renders in
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Sidebar width bounds
const SIDEBAR_MIN: u16 = 26;
const SIDEBAR_MAX: u16 = 40;

/// Check if the terminal is too small to use
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

/// Sidebar width: a third of the screen, clamped
pub fn sidebar_width(area: Rect) -> u16 {
    (area.width / 3).clamp(SIDEBAR_MIN, SIDEBAR_MAX)
}

/// Warning shown instead of the shell when the terminal is too small
pub fn create_size_warning_popup(area: Rect) -> (Rect, Clear, Paragraph<'static>) {
    let popup_area = popup_area(area, 80, 60);

    let warning_text = vec![
        Line::from("Terminal Too Small"),
        Line::from(""),
        Line::from(format!("Current size: {}x{}", area.width, area.height)),
        Line::from(format!("Minimum required: {}x{}", MIN_WIDTH, MIN_HEIGHT)),
        Line::from(""),
        Line::from("Resize the terminal or press Ctrl+C to quit."),
    ];

    let warning = Paragraph::new(warning_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Size Warning")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        );

    (popup_area, Clear, warning)
}

/// Centered popup area taking the given percentages of `area`
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Whether the cell at (`column`, `row`) lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_too_small() {
        assert!(is_too_small(Rect::new(0, 0, 40, 30)));
        assert!(is_too_small(Rect::new(0, 0, 100, 10)));
        assert!(!is_too_small(Rect::new(0, 0, 100, 30)));
    }

    #[test]
    fn test_sidebar_width_is_clamped() {
        assert_eq!(sidebar_width(Rect::new(0, 0, 60, 30)), SIDEBAR_MIN);
        assert_eq!(sidebar_width(Rect::new(0, 0, 300, 30)), SIDEBAR_MAX);
        assert_eq!(sidebar_width(Rect::new(0, 0, 90, 30)), 30);
    }

    #[test]
    fn test_popup_area_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_area(area, 60, 50);
        assert!(popup.width <= 60 && popup.height <= 20);
        assert!(popup.x >= 20 && popup.y >= 10);
    }

    #[test]
    fn test_contains() {
        let area = Rect::new(2, 3, 10, 5);
        assert!(contains(area, 2, 3));
        assert!(contains(area, 11, 7));
        assert!(!contains(area, 12, 7));
        assert!(!contains(area, 5, 8));
    }
}

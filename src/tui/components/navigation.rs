//! Navigation Panel Component
//!
//! Vertical list of navigation entries. Entries gated by a mode are only shown
//! to privileged users, the entry whose route matches the current path is
//! emphasized, and activating an entry either navigates or opens a dialog.

use std::str::FromStr;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::context::{AppCommands, Navigator};
use crate::error::Error;
use crate::tui::utils::responsive::contains;

/// Operating mode an entry is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Admin,
    Dev,
}

impl FromStr for NavMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(NavMode::Admin),
            "dev" => Ok(NavMode::Dev),
            other => Err(Error::Other(format!("Unknown navigation mode: {}", other))),
        }
    }
}

/// Icon shown in front of an entry label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Wallet,
    ArrowForward,
    ArrowBack,
    Bond,
    Unbond,
    Delegate,
    Description,
    Settings,
}

impl NavIcon {
    /// Terminal glyph for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Wallet => "◈",
            NavIcon::ArrowForward => "→",
            NavIcon::ArrowBack => "←",
            NavIcon::Bond => "⊕",
            NavIcon::Unbond => "⊖",
            NavIcon::Delegate => "⇄",
            NavIcon::Description => "☰",
            NavIcon::Settings => "⚙",
        }
    }
}

/// What activating an entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Navigate(&'static str),
    ShowSendModal,
    ShowReceiveModal,
}

impl NavAction {
    pub fn run(self, navigator: &mut dyn Navigator, app: &mut dyn AppCommands) {
        match self {
            NavAction::Navigate(path) => navigator.navigate(path),
            NavAction::ShowSendModal => app.show_send_modal(),
            NavAction::ShowReceiveModal => app.show_receive_modal(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    /// Route used for emphasis; dialog entries have none
    pub route: Option<&'static str>,
    pub icon: NavIcon,
    pub mode: Option<NavMode>,
    pub action: NavAction,
}

/// Whether an entry with `mode` is shown for the given privilege
pub fn is_visible(mode: Option<NavMode>, privileged: bool) -> bool {
    match mode {
        None => true,
        Some(NavMode::Admin) => privileged,
        Some(NavMode::Dev) => privileged,
    }
}

/// A visible entry for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRow<'a> {
    pub entry: &'a NavEntry,
    pub emphasized: bool,
}

fn routes_schema() -> Vec<NavEntry> {
    vec![
        NavEntry {
            label: "Balance",
            route: Some("/balance"),
            icon: NavIcon::Wallet,
            mode: None,
            action: NavAction::Navigate("/balance"),
        },
        NavEntry {
            label: "Send",
            route: None,
            icon: NavIcon::ArrowForward,
            mode: None,
            action: NavAction::ShowSendModal,
        },
        NavEntry {
            label: "Receive",
            route: None,
            icon: NavIcon::ArrowBack,
            mode: None,
            action: NavAction::ShowReceiveModal,
        },
        NavEntry {
            label: "Bond",
            route: Some("/bond"),
            icon: NavIcon::Bond,
            mode: None,
            action: NavAction::Navigate("/bond"),
        },
        NavEntry {
            label: "Unbond",
            route: Some("/unbond"),
            icon: NavIcon::Unbond,
            mode: None,
            action: NavAction::Navigate("/unbond"),
        },
        NavEntry {
            label: "Delegation",
            route: Some("/delegation"),
            icon: NavIcon::Delegate,
            mode: None,
            action: NavAction::Navigate("/delegation"),
        },
        // Emphasis is keyed on `/admin` while the action opens `/docs`. Probably
        // unintended upstream, kept as-is so highlighting behaves the same.
        NavEntry {
            label: "Docs",
            route: Some("/admin"),
            icon: NavIcon::Description,
            mode: Some(NavMode::Dev),
            action: NavAction::Navigate("/docs"),
        },
        NavEntry {
            label: "Admin",
            route: Some("/admin"),
            icon: NavIcon::Settings,
            mode: Some(NavMode::Admin),
            action: NavAction::Navigate("/admin"),
        },
    ]
}

/// Navigation panel state
#[derive(Debug, Clone)]
pub struct Navigation {
    entries: Vec<NavEntry>,
    /// Keyboard cursor over the visible rows
    cursor: usize,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            entries: routes_schema(),
            cursor: 0,
        }
    }

    /// Every entry, visible or not, in display order
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn visible_rows(&self, current_path: &str, privileged: bool) -> Vec<NavRow<'_>> {
        self.entries
            .iter()
            .filter(|entry| is_visible(entry.mode, privileged))
            .map(|entry| NavRow {
                entry,
                emphasized: entry.route == Some(current_path),
            })
            .collect()
    }

    fn visible_count(&self, privileged: bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| is_visible(entry.mode, privileged))
            .count()
    }

    /// Cursor position, clamped to the rows visible for `privileged`
    pub fn cursor(&self, privileged: bool) -> usize {
        self.cursor.min(self.visible_count(privileged).saturating_sub(1))
    }

    pub fn move_up(&mut self, privileged: bool) {
        let count = self.visible_count(privileged);
        if count == 0 {
            return;
        }
        let current = self.cursor(privileged);
        self.cursor = if current == 0 { count - 1 } else { current - 1 };
    }

    pub fn move_down(&mut self, privileged: bool) {
        let count = self.visible_count(privileged);
        if count == 0 {
            return;
        }
        self.cursor = (self.cursor(privileged) + 1) % count;
    }

    /// Activate the visible row at `index`. Returns the action that ran.
    pub fn activate(
        &mut self,
        index: usize,
        privileged: bool,
        navigator: &mut dyn Navigator,
        app: &mut dyn AppCommands,
    ) -> Option<NavAction> {
        let entry = self
            .entries
            .iter()
            .filter(|entry| is_visible(entry.mode, privileged))
            .nth(index)?;
        let action = entry.action;
        tracing::debug!("nav: {} -> {:?}", entry.label, action);

        self.cursor = index;
        action.run(navigator, app);
        Some(action)
    }

    /// Activate the row under the cursor
    pub fn activate_cursor(
        &mut self,
        privileged: bool,
        navigator: &mut dyn Navigator,
        app: &mut dyn AppCommands,
    ) -> Option<NavAction> {
        let index = self.cursor(privileged);
        self.activate(index, privileged, navigator, app)
    }

    /// Index of the visible row rendered at (`column`, `row`) inside `area`
    pub fn row_at(&self, area: Rect, column: u16, row: u16, privileged: bool) -> Option<usize> {
        let inner = area.inner(Margin::new(1, 1));
        if !contains(inner, column, row) {
            return None;
        }
        let index = usize::from(row - inner.y);
        (index < self.visible_count(privileged)).then_some(index)
    }
}

/// Render the navigation panel
pub fn render_navigation(
    f: &mut Frame,
    navigation: &Navigation,
    area: Rect,
    current_path: &str,
    privileged: bool,
    focused: bool,
) {
    let items: Vec<ListItem> = navigation
        .visible_rows(current_path, privileged)
        .into_iter()
        .map(|row| {
            let color = if row.emphasized {
                Color::Cyan
            } else {
                Color::White
            };
            let mut style = Style::default().fg(color);
            if row.emphasized {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", row.entry.icon.glyph()), style),
                Span::styled(row.entry.label, style),
            ]))
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Blue)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Navigation"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if focused {
        state.select(Some(navigation.cursor(privileged)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Get navigation help text
pub fn get_navigation_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("↑/↓", "Move in the focused panel"),
        ("Enter", "Activate"),
        ("1-8", "Activate navigation entry"),
        ("Tab", "Switch panel"),
        ("b", "Go back"),
        ("q", "Quit"),
    ]
}

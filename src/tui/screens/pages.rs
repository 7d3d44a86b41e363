//! Route pages
//!
//! The main area shows one page per route. Balances, staking and docs belong
//! to the wallet backend, so these pages only frame the active account and say
//! what the route is for.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::context::Account;

/// Page selected by the current route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Balance,
    Bond,
    Unbond,
    Delegation,
    Docs,
    Admin,
    NotFound(String),
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/balance" => Page::Balance,
            "/bond" => Page::Bond,
            "/unbond" => Page::Unbond,
            "/delegation" => Page::Delegation,
            "/docs" => Page::Docs,
            "/admin" => Page::Admin,
            other => Page::NotFound(other.to_string()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Balance => "Balance",
            Page::Bond => "Bond",
            Page::Unbond => "Unbond",
            Page::Delegation => "Delegation",
            Page::Docs => "Docs",
            Page::Admin => "Admin",
            Page::NotFound(_) => "Not Found",
        }
    }

    fn body(&self, privileged: bool) -> Vec<String> {
        match self {
            Page::Balance => vec!["Balances are provided by the wallet backend.".to_string()],
            Page::Bond => vec!["Bond tokens to a validator from the active account.".to_string()],
            Page::Unbond => vec!["Unbond previously bonded tokens.".to_string()],
            Page::Delegation => vec!["Review delegations of the active account.".to_string()],
            Page::Docs => vec![
                "Tab switches between the accounts and navigation panels.".to_string(),
                "Enter on the account row opens account management.".to_string(),
                "Press ? for every key binding.".to_string(),
            ],
            Page::Admin if privileged => {
                vec!["Administrative tools for privileged addresses.".to_string()]
            }
            Page::Admin => vec!["Admin access required.".to_string()],
            Page::NotFound(path) => vec![format!("No page at {}", path)],
        }
    }
}

/// Render the page for `path` into `area`
pub fn render_page(
    f: &mut Frame,
    path: &str,
    account: Option<&Account>,
    privileged: bool,
    area: Rect,
) {
    let page = Page::from_path(path);

    let mut lines = Vec::new();
    if let Some(account) = account {
        lines.push(Line::from(vec![
            Span::styled("Account: ", Style::default().fg(Color::Gray)),
            Span::styled(
                account.id.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Address: ", Style::default().fg(Color::Gray)),
            Span::styled(account.address.clone(), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(""));
    }

    let body_style = match page {
        Page::NotFound(_) => Style::default().fg(Color::Red),
        Page::Admin if !privileged => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::White),
    };
    lines.extend(
        page.body(privileged)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, body_style))),
    );

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(page.title())
                .padding(Padding::uniform(1)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/balance"), Page::Balance);
        assert_eq!(Page::from_path("/docs"), Page::Docs);
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(
            Page::from_path("/send"),
            Page::NotFound("/send".to_string())
        );
        assert_eq!(Page::from_path("/send").title(), "Not Found");
    }

    #[test]
    fn test_admin_page_requires_privilege() {
        assert_eq!(Page::Admin.body(false), ["Admin access required."]);
        assert_ne!(Page::Admin.body(true), ["Admin access required."]);
    }
}

//! Account management dialogs
//!
//! The four dialogs mounted by the multi-account panel: the account list, add,
//! rename and reveal-mnemonic. Which one is on screen is owned by the accounts
//! provider through its dialog key; this module only keeps the input state of
//! each dialog and turns key presses into provider commands.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::context::{Account, AccountsProvider, AccountsSnapshot, DialogKey};
use crate::tui::events::Event;
use crate::tui::utils::formatting::{format_address, format_mnemonic};
use crate::tui::utils::responsive::popup_area;

use super::text_field::TextField;

/// Input state of the account dialogs
#[derive(Debug, Clone)]
pub struct AccountDialogs {
    /// Cursor in the account list
    cursor: usize,
    /// Last provider error shown in the account list
    list_error: Option<String>,
    add: TextField,
    edit: TextField,
    password: TextField,
    revealed: Option<String>,
    /// Dialog key seen by the last `sync`
    last_dialog: Option<DialogKey>,
}

impl Default for AccountDialogs {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountDialogs {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            list_error: None,
            add: TextField::new("Account name"),
            edit: TextField::new("New name"),
            password: TextField::masked("Wallet password"),
            revealed: None,
            last_dialog: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn revealed_mnemonic(&self) -> Option<&str> {
        self.revealed.as_deref()
    }

    /// Reset dialog inputs when the provider switches dialogs
    pub fn sync(&mut self, snapshot: &AccountsSnapshot) {
        let count = snapshot.accounts.map_or(0, <[Account]>::len);
        self.cursor = self.cursor.min(count.saturating_sub(1));

        let current = snapshot.dialog_to_display;
        if current == self.last_dialog {
            return;
        }

        match current {
            Some(DialogKey::Accounts) if self.last_dialog.is_none() => {
                self.cursor = selected_index(snapshot).unwrap_or(0);
            }
            Some(DialogKey::Add) => self.add.clear(),
            Some(DialogKey::Edit) => {
                let name = snapshot
                    .account_to_edit
                    .map(|account| account.id.clone())
                    .unwrap_or_default();
                self.edit.set_value(name);
            }
            Some(DialogKey::Mnemonic) => {
                self.password.clear();
                self.revealed = None;
            }
            None => {
                self.list_error = None;
                self.revealed = None;
                self.password.clear();
            }
            _ => {}
        }
        self.last_dialog = current;
    }

    /// Handle an input event for the dialog on screen. Returns false when no
    /// account dialog is open.
    pub fn handle_event(&mut self, event: &Event, provider: &mut dyn AccountsProvider) -> bool {
        self.sync(&provider.snapshot());

        let Some(dialog) = provider.snapshot().dialog_to_display else {
            return false;
        };

        match dialog {
            DialogKey::Accounts => self.handle_accounts(event, provider),
            DialogKey::Add => self.handle_add(event, provider),
            DialogKey::Edit => self.handle_edit(event, provider),
            DialogKey::Mnemonic => self.handle_mnemonic(event, provider),
        }

        self.sync(&provider.snapshot());
        true
    }

    fn handle_accounts(&mut self, event: &Event, provider: &mut dyn AccountsProvider) {
        let ids: Vec<String> = provider
            .snapshot()
            .accounts
            .unwrap_or_default()
            .iter()
            .map(|account| account.id.clone())
            .collect();
        let current = ids.get(self.cursor).cloned();

        match event {
            Event::Up => {
                self.cursor = if self.cursor == 0 {
                    ids.len().saturating_sub(1)
                } else {
                    self.cursor - 1
                };
            }
            Event::Down => {
                if !ids.is_empty() {
                    self.cursor = (self.cursor + 1) % ids.len();
                }
            }
            Event::Enter => {
                if let Some(id) = current {
                    match provider.select_account(&id) {
                        Ok(()) => provider.set_dialog_to_display(None),
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to select account {}", id);
                            self.list_error = Some(e.to_string());
                        }
                    }
                }
            }
            Event::Char('a') => provider.set_dialog_to_display(Some(DialogKey::Add)),
            Event::Char('e') => {
                if let Some(id) = current {
                    provider.set_account_to_edit(Some(&id));
                    provider.set_dialog_to_display(Some(DialogKey::Edit));
                }
            }
            Event::Char('m') => {
                if let Some(id) = current {
                    provider.set_account_to_edit(Some(&id));
                    provider.set_dialog_to_display(Some(DialogKey::Mnemonic));
                }
            }
            Event::Escape => provider.set_dialog_to_display(None),
            _ => {}
        }
    }

    fn handle_add(&mut self, event: &Event, provider: &mut dyn AccountsProvider) {
        match event {
            Event::Enter => match provider.add_account(self.add.value()) {
                Ok(account) => {
                    self.cursor = provider
                        .snapshot()
                        .accounts
                        .unwrap_or_default()
                        .iter()
                        .position(|a| a.id == account.id)
                        .unwrap_or(0);
                    provider.set_dialog_to_display(Some(DialogKey::Accounts));
                }
                Err(e) => self.add.set_error(e.to_string()),
            },
            Event::Escape => provider.set_dialog_to_display(Some(DialogKey::Accounts)),
            other => {
                self.add.handle_event(other);
            }
        }
    }

    fn handle_edit(&mut self, event: &Event, provider: &mut dyn AccountsProvider) {
        match event {
            Event::Enter => {
                let Some(id) = provider.snapshot().account_to_edit.map(|a| a.id.clone()) else {
                    self.edit.set_error("No account to rename");
                    return;
                };
                match provider.rename_account(&id, self.edit.value()) {
                    Ok(()) => {
                        provider.set_account_to_edit(None);
                        provider.set_dialog_to_display(Some(DialogKey::Accounts));
                    }
                    Err(e) => self.edit.set_error(e.to_string()),
                }
            }
            Event::Escape => {
                provider.set_account_to_edit(None);
                provider.set_dialog_to_display(Some(DialogKey::Accounts));
            }
            other => {
                self.edit.handle_event(other);
            }
        }
    }

    fn handle_mnemonic(&mut self, event: &Event, provider: &mut dyn AccountsProvider) {
        match event {
            Event::Enter if self.revealed.is_none() => {
                let Some(id) = provider.snapshot().account_to_edit.map(|a| a.id.clone()) else {
                    self.password.set_error("No account selected");
                    return;
                };
                match provider.reveal_mnemonic(&id, self.password.value()) {
                    Ok(words) => {
                        self.password.clear();
                        self.revealed = Some(words);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "mnemonic reveal refused for {}", id);
                        self.password.clear();
                        self.password.set_error(e.to_string());
                    }
                }
            }
            Event::Escape => {
                self.password.clear();
                self.revealed = None;
                provider.set_account_to_edit(None);
                provider.set_dialog_to_display(Some(DialogKey::Accounts));
            }
            other if self.revealed.is_none() => {
                self.password.handle_event(other);
            }
            _ => {}
        }
    }

    /// Render `dialog` if it is the one on screen
    pub fn render_dialog(
        &self,
        f: &mut Frame,
        dialog: DialogKey,
        snapshot: &AccountsSnapshot,
        area: Rect,
    ) {
        if !snapshot.is_showing(dialog) {
            return;
        }

        match dialog {
            DialogKey::Accounts => self.render_accounts(f, snapshot, area),
            DialogKey::Add => render_input_dialog(f, "Add Account", &self.add, area),
            DialogKey::Edit => {
                let title = match snapshot.account_to_edit {
                    Some(account) => format!("Rename {}", account.id),
                    None => "Rename Account".to_string(),
                };
                render_input_dialog(f, &title, &self.edit, area)
            }
            DialogKey::Mnemonic => self.render_mnemonic(f, snapshot, area),
        }
    }

    fn render_accounts(&self, f: &mut Frame, snapshot: &AccountsSnapshot, area: Rect) {
        let popup = popup_area(area, 60, 60);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Accounts");
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let selected_id = snapshot.selected_account.map(|a| a.id.as_str());
        let items: Vec<ListItem> = snapshot
            .accounts
            .unwrap_or_default()
            .iter()
            .map(|account| {
                let is_selected = Some(account.id.as_str()) == selected_id;
                let marker = if is_selected { "● " } else { "  " };
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}{:<20}", marker, account.id), style),
                    Span::styled(
                        format_address(&account.address),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();

        let list =
            List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        state.select(Some(self.cursor));
        f.render_stateful_widget(list, chunks[0], &mut state);

        if let Some(error) = &self.list_error {
            f.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
                chunks[1],
            );
        }

        f.render_widget(
            Paragraph::new("Enter select · a add · e rename · m mnemonic · Esc close")
                .style(Style::default().fg(Color::Gray)),
            chunks[2],
        );
    }

    fn render_mnemonic(&self, f: &mut Frame, snapshot: &AccountsSnapshot, area: Rect) {
        let popup = popup_area(area, 70, 50);
        f.render_widget(Clear, popup);

        let title = match snapshot.account_to_edit {
            Some(account) => format!("Mnemonic - {}", account.id),
            None => "Mnemonic".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(title);
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        match &self.revealed {
            Some(words) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Never share these words. Anyone holding them controls the account.",
                        Style::default().fg(Color::Yellow),
                    )),
                    Line::from(""),
                ];
                lines.extend(
                    format_mnemonic(words, 3)
                        .into_iter()
                        .map(|row| Line::from(Span::styled(row, Style::default().fg(Color::White)))),
                );
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Esc to close",
                    Style::default().fg(Color::Gray),
                )));
                f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
            }
            None => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(4), Constraint::Length(1)])
                    .split(inner);
                self.password.render(chunks[0], f.buffer_mut(), true);
                f.render_widget(
                    Paragraph::new("Enter reveal · Esc back").style(Style::default().fg(Color::Gray)),
                    chunks[1],
                );
            }
        }
    }
}

fn selected_index(snapshot: &AccountsSnapshot) -> Option<usize> {
    let selected = snapshot.selected_account?;
    snapshot
        .accounts?
        .iter()
        .position(|account| account.id == selected.id)
}

fn render_input_dialog(f: &mut Frame, title: &str, field: &TextField, area: Rect) {
    let popup = popup_area(area, 60, 40);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);
    field.render(chunks[0], f.buffer_mut(), true);
    f.render_widget(
        Paragraph::new("Enter save · Esc back").style(Style::default().fg(Color::Gray)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountsStore;
    use crate::context::AccountsCommands;

    const PASSWORD: &str = "Correct-Horse-42";

    fn store() -> AccountsStore {
        let mut store = AccountsStore::with_password(PASSWORD).unwrap();
        store
            .insert_account(Account::new("Account 1", "n1first"), "alpha beta".to_string())
            .unwrap();
        store
            .insert_account(Account::new("Savings", "n1second"), "gamma delta".to_string())
            .unwrap();
        store
    }

    fn type_text(dialogs: &mut AccountDialogs, store: &mut AccountsStore, text: &str) {
        for c in text.chars() {
            dialogs.handle_event(&Event::Char(c), store);
        }
    }

    #[test]
    fn test_closed_dialogs_ignore_events() {
        let mut store = store();
        let mut dialogs = AccountDialogs::new();
        assert!(!dialogs.handle_event(&Event::Enter, &mut store));
    }

    #[test]
    fn test_enter_switches_account_and_closes() {
        let mut store = store();
        let mut dialogs = AccountDialogs::new();
        store.set_dialog_to_display(Some(DialogKey::Accounts));

        assert!(dialogs.handle_event(&Event::Down, &mut store));
        assert_eq!(dialogs.cursor(), 1);
        dialogs.handle_event(&Event::Enter, &mut store);

        assert_eq!(store.selected_account().unwrap().id, "Savings");
        assert_eq!(store.dialog_to_display(), None);
    }

    #[test]
    fn test_list_opens_at_selected_account() {
        let mut store = store();
        store.select_account("Savings").unwrap();
        let mut dialogs = AccountDialogs::new();

        store.set_dialog_to_display(Some(DialogKey::Accounts));
        dialogs.sync(&store.snapshot());
        assert_eq!(dialogs.cursor(), 1);

        // Wraps upward past the first row
        dialogs.handle_event(&Event::Up, &mut store);
        dialogs.handle_event(&Event::Up, &mut store);
        assert_eq!(dialogs.cursor(), 1);
    }

    #[test]
    fn test_add_account_flow() {
        let mut store = store();
        let mut dialogs = AccountDialogs::new();
        store.set_dialog_to_display(Some(DialogKey::Accounts));

        dialogs.handle_event(&Event::Char('a'), &mut store);
        assert_eq!(store.dialog_to_display(), Some(DialogKey::Add));

        // Duplicate name stays open with an error
        type_text(&mut dialogs, &mut store, "Savings");
        dialogs.handle_event(&Event::Enter, &mut store);
        assert_eq!(store.dialog_to_display(), Some(DialogKey::Add));
        assert!(dialogs.add.error().is_some());

        for _ in 0.."Savings".len() {
            dialogs.handle_event(&Event::Backspace, &mut store);
        }
        type_text(&mut dialogs, &mut store, "Trading");
        dialogs.handle_event(&Event::Enter, &mut store);

        assert_eq!(store.dialog_to_display(), Some(DialogKey::Accounts));
        assert_eq!(store.accounts().len(), 3);
        assert_eq!(dialogs.cursor(), 2);
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut store = store();
        let mut dialogs = AccountDialogs::new();
        store.set_dialog_to_display(Some(DialogKey::Add));

        dialogs.handle_event(&Event::Enter, &mut store);
        assert_eq!(store.dialog_to_display(), Some(DialogKey::Add));
        assert_eq!(store.accounts().len(), 2);

        dialogs.handle_event(&Event::Escape, &mut store);
        assert_eq!(store.dialog_to_display(), Some(DialogKey::Accounts));
    }

    #[test]
    fn test_edit_prefills_and_renames() {
        let mut store = store();
        let mut dialogs = AccountDialogs::new();
        store.set_dialog_to_display(Some(DialogKey::Accounts));

        dialogs.handle_event(&Event::Down, &mut store);
        dialogs.handle_event(&Event::Char('e'), &mut store);
        assert_eq!(store.dialog_to_display(), Some(DialogKey::Edit));
        assert_eq!(dialogs.edit.value(), "Savings");

        type_text(&mut dialogs, &mut store, " Pot");
        dialogs.handle_event(&Event::Enter, &mut store);

        assert_eq!(store.dialog_to_display(), Some(DialogKey::Accounts));
        assert!(store.accounts().iter().any(|a| a.id == "Savings Pot"));
        assert!(store.snapshot().account_to_edit.is_none());
    }

    #[test]
    fn test_mnemonic_requires_password() {
        let mut store = store();
        let mut dialogs = AccountDialogs::new();
        store.set_dialog_to_display(Some(DialogKey::Accounts));

        dialogs.handle_event(&Event::Char('m'), &mut store);
        assert_eq!(store.dialog_to_display(), Some(DialogKey::Mnemonic));

        type_text(&mut dialogs, &mut store, "wrong");
        dialogs.handle_event(&Event::Enter, &mut store);
        assert!(dialogs.revealed_mnemonic().is_none());
        assert!(dialogs.password.error().is_some());
        assert_eq!(dialogs.password.value(), "");

        type_text(&mut dialogs, &mut store, PASSWORD);
        dialogs.handle_event(&Event::Enter, &mut store);
        assert_eq!(dialogs.revealed_mnemonic(), Some("alpha beta"));

        dialogs.handle_event(&Event::Escape, &mut store);
        assert!(dialogs.revealed_mnemonic().is_none());
        assert_eq!(store.dialog_to_display(), Some(DialogKey::Accounts));
    }

    #[test]
    fn test_escape_closes_list() {
        let mut store = store();
        let mut dialogs = AccountDialogs::new();
        store.set_dialog_to_display(Some(DialogKey::Accounts));
        dialogs.handle_event(&Event::Escape, &mut store);
        assert_eq!(store.dialog_to_display(), None);
    }
}

//! Multi-account panel
//!
//! Shows the selected account and mounts the four account dialogs. The panel
//! renders nothing at all, dialogs included, unless the provider reports a
//! non-empty account list and a selected account.

use ratatui::prelude::*;

use crate::context::{Account, AccountsCommands, AccountsSnapshot, DialogKey};

use super::account_dialogs::AccountDialogs;
use super::account_overview::render_account_overview;

/// Dialogs mounted alongside the overview row, in render order
pub const MOUNTED_DIALOGS: [DialogKey; 4] = [
    DialogKey::Accounts,
    DialogKey::Add,
    DialogKey::Edit,
    DialogKey::Mnemonic,
];

/// What the panel puts on screen for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountsView<'a> {
    pub overview: &'a Account,
    pub dialogs: &'static [DialogKey],
}

/// Compose the panel from a snapshot, or `None` when it renders nothing
pub fn compose<'a>(snapshot: &AccountsSnapshot<'a>) -> Option<AccountsView<'a>> {
    snapshot.accounts.filter(|accounts| !accounts.is_empty())?;
    let overview = snapshot.selected_account?;

    Some(AccountsView {
        overview,
        dialogs: &MOUNTED_DIALOGS,
    })
}

/// Overview row activated: open the account list
pub fn activate_overview(commands: &mut dyn AccountsCommands) {
    commands.set_dialog_to_display(Some(DialogKey::Accounts));
}

/// Render the overview row into `area`
pub fn render_accounts_panel(
    f: &mut Frame,
    snapshot: &AccountsSnapshot,
    area: Rect,
    focused: bool,
) {
    if let Some(view) = compose(snapshot) {
        render_account_overview(f, view.overview, area, focused);
    }
}

/// Render the mounted dialogs over `area`. Each dialog decides on its own
/// whether it is visible.
pub fn render_accounts_dialogs(
    f: &mut Frame,
    dialogs: &AccountDialogs,
    snapshot: &AccountsSnapshot,
    area: Rect,
) {
    let Some(view) = compose(snapshot) else {
        return;
    };
    for dialog in view.dialogs {
        dialogs.render_dialog(f, *dialog, snapshot, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountsStore;

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("Account 1", "n1first"),
            Account::new("Savings", "n1second"),
        ]
    }

    #[test]
    fn test_renders_nothing_without_accounts() {
        let selected = Account::new("Account 1", "n1first");
        let empty: Vec<Account> = Vec::new();

        let missing = AccountsSnapshot {
            accounts: None,
            selected_account: Some(&selected),
            ..AccountsSnapshot::default()
        };
        assert!(compose(&missing).is_none());

        let no_accounts = AccountsSnapshot {
            accounts: Some(&empty),
            selected_account: Some(&selected),
            ..AccountsSnapshot::default()
        };
        assert!(compose(&no_accounts).is_none());
    }

    #[test]
    fn test_renders_nothing_without_selection() {
        let accounts = accounts();
        let snapshot = AccountsSnapshot {
            accounts: Some(&accounts),
            selected_account: None,
            ..AccountsSnapshot::default()
        };
        assert!(compose(&snapshot).is_none());
    }

    #[test]
    fn test_one_overview_and_four_dialogs() {
        let accounts = accounts();
        let snapshot = AccountsSnapshot {
            accounts: Some(&accounts),
            selected_account: Some(&accounts[1]),
            ..AccountsSnapshot::default()
        };
        let view = compose(&snapshot).unwrap();
        assert_eq!(view.overview.id, "Savings");
        assert_eq!(view.dialogs.len(), 4);
        assert_eq!(view.dialogs, &MOUNTED_DIALOGS);
    }

    #[test]
    fn test_activate_overview_opens_account_list() {
        let mut store = AccountsStore::new();
        store
            .insert_account(Account::new("Account 1", "n1first"), String::new())
            .unwrap();
        activate_overview(&mut store);
        assert_eq!(store.dialog_to_display(), Some(DialogKey::Accounts));
    }
}

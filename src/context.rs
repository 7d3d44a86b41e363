//! Context contracts shared by the UI components
//!
//! Components never reach into global state. Each render pass receives an
//! immutable snapshot of the values it reads, and user intents are sent
//! through a command trait implemented by whichever provider owns the state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A wallet account as seen by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name, unique within a wallet
    pub id: String,
    pub address: String,
}

impl Account {
    pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
        }
    }
}

/// Which account dialog is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogKey {
    Accounts,
    Add,
    Edit,
    Mnemonic,
}

impl DialogKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKey::Accounts => "Accounts",
            DialogKey::Add => "Add",
            DialogKey::Edit => "Edit",
            DialogKey::Mnemonic => "Mnemonic",
        }
    }
}

impl fmt::Display for DialogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accounts" => Ok(DialogKey::Accounts),
            "Add" => Ok(DialogKey::Add),
            "Edit" => Ok(DialogKey::Edit),
            "Mnemonic" => Ok(DialogKey::Mnemonic),
            other => Err(Error::Other(format!("Unknown dialog: {}", other))),
        }
    }
}

/// Details about the connected client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub client_address: Option<String>,
}

/// Read-only view of the accounts provider for one render pass
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountsSnapshot<'a> {
    pub accounts: Option<&'a [Account]>,
    pub selected_account: Option<&'a Account>,
    pub dialog_to_display: Option<DialogKey>,
    pub account_to_edit: Option<&'a Account>,
}

impl AccountsSnapshot<'_> {
    /// Whether `key` is the dialog currently on screen
    pub fn is_showing(&self, key: DialogKey) -> bool {
        self.dialog_to_display == Some(key)
    }
}

/// Intents the accounts UI can send to the accounts provider
pub trait AccountsCommands {
    /// Show `dialog`, or hide every account dialog with `None`
    fn set_dialog_to_display(&mut self, dialog: Option<DialogKey>);

    /// Target account for the edit and mnemonic dialogs
    fn set_account_to_edit(&mut self, id: Option<&str>);

    fn select_account(&mut self, id: &str) -> Result<(), Error>;

    fn add_account(&mut self, name: &str) -> Result<Account, Error>;

    fn rename_account(&mut self, id: &str, new_name: &str) -> Result<(), Error>;

    /// Mnemonic for account `id`, gated by the wallet password
    fn reveal_mnemonic(&self, id: &str, password: &str) -> Result<String, Error>;
}

/// A provider exposing both the accounts snapshot and its commands
pub trait AccountsProvider: AccountsCommands {
    fn snapshot(&self) -> AccountsSnapshot<'_>;
}

/// Read-only view of the app provider for one render pass
#[derive(Debug, Clone, Copy)]
pub struct AppSnapshot<'a> {
    pub is_admin_address: bool,
    pub client_details: Option<&'a ClientDetails>,
}

/// Intents the navigation panel can send to the app provider
pub trait AppCommands {
    fn show_send_modal(&mut self);
    fn show_receive_modal(&mut self);
}

/// Router collaborator
pub trait Navigator {
    fn current_path(&self) -> &str;
    fn navigate(&mut self, path: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_key_parse() {
        assert_eq!("Accounts".parse::<DialogKey>().unwrap(), DialogKey::Accounts);
        assert_eq!("Mnemonic".parse::<DialogKey>().unwrap(), DialogKey::Mnemonic);
        assert!("Import".parse::<DialogKey>().is_err());
    }

    #[test]
    fn test_snapshot_is_showing() {
        let snapshot = AccountsSnapshot {
            dialog_to_display: Some(DialogKey::Add),
            ..AccountsSnapshot::default()
        };
        assert!(snapshot.is_showing(DialogKey::Add));
        assert!(!snapshot.is_showing(DialogKey::Accounts));
        assert!(!AccountsSnapshot::default().is_showing(DialogKey::Add));
    }
}

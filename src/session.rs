//! Reference app provider: privilege flag, client details and the
//! send/receive dialogs opened from the navigation panel.

use crate::context::{AppCommands, AppSnapshot, ClientDetails};

/// App-level dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDialog {
    Send,
    Receive,
}

#[derive(Debug, Clone, Default)]
pub struct WalletSession {
    /// Privilege forced on by configuration
    force_admin: bool,
    admin_addresses: Vec<String>,
    client_details: ClientDetails,
    open_dialog: Option<AppDialog>,
}

impl WalletSession {
    pub fn new(force_admin: bool, admin_addresses: Vec<String>) -> Self {
        Self {
            force_admin,
            admin_addresses,
            ..Self::default()
        }
    }

    /// Point the session at the address of the active account
    pub fn set_client_address(&mut self, address: Option<String>) {
        if self.client_details.client_address != address {
            tracing::debug!("client address: {:?}", address);
            self.client_details.client_address = address;
        }
    }

    pub fn client_details(&self) -> &ClientDetails {
        &self.client_details
    }

    /// Privileged when forced, or when the client address is an admin address
    pub fn is_admin_address(&self) -> bool {
        self.force_admin
            || self
                .client_details
                .client_address
                .as_ref()
                .is_some_and(|address| self.admin_addresses.contains(address))
    }

    pub fn snapshot(&self) -> AppSnapshot<'_> {
        AppSnapshot {
            is_admin_address: self.is_admin_address(),
            client_details: Some(&self.client_details),
        }
    }

    pub fn open_dialog(&self) -> Option<AppDialog> {
        self.open_dialog
    }

    pub fn close_dialog(&mut self) {
        self.open_dialog = None;
    }
}

impl AppCommands for WalletSession {
    fn show_send_modal(&mut self) {
        self.open_dialog = Some(AppDialog::Send);
    }

    fn show_receive_modal(&mut self) {
        self.open_dialog = Some(AppDialog::Receive);
    }
}

//! Single-account panel
//!
//! Shows a synthetic "Account 1" built from the client address and owns the
//! only local UI flag of the shell: whether the how-to dialog is open.

use ratatui::prelude::*;

use crate::context::{Account, AppSnapshot};

use super::account_overview::render_account_overview;
use super::how_to::render_how_to;

/// Label of the synthetic account
pub const SINGLE_ACCOUNT_LABEL: &str = "Account 1";

#[derive(Debug, Clone, Default)]
pub struct SingleAccount {
    show_how_to: bool,
}

impl SingleAccount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account shown by the panel. A missing client address shows as `""`.
    pub fn account(app: &AppSnapshot) -> Account {
        let address = app
            .client_details
            .and_then(|details| details.client_address.clone())
            .unwrap_or_default();
        Account::new(SINGLE_ACCOUNT_LABEL, address)
    }

    pub fn is_how_to_visible(&self) -> bool {
        self.show_how_to
    }

    /// Overview row activated
    pub fn on_overview_click(&mut self) {
        self.show_how_to = true;
    }

    /// Close request from the how-to dialog
    pub fn close_how_to(&mut self) {
        self.show_how_to = false;
    }

    pub fn render(&self, f: &mut Frame, app: &AppSnapshot, area: Rect, focused: bool) {
        render_account_overview(f, &Self::account(app), area, focused);
    }

    /// Render the how-to dialog over `area` when it is open
    pub fn render_dialog(&self, f: &mut Frame, area: Rect, can_add: bool) {
        if self.show_how_to {
            render_how_to(f, area, can_add);
        }
    }
}

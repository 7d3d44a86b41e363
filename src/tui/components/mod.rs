//! Reusable UI Components
//!
//! This module contains the sidebar panels, the account dialogs and the
//! shared overlay and status widgets of the shell.

// Sidebar panels
pub mod account_overview;
pub mod accounts_panel;
pub mod navigation;
pub mod single_account;

// Dialogs
pub mod account_dialogs;
pub mod how_to;
pub mod modals;

// Shared widgets
pub mod status_bar;
pub mod text_field;

pub use accounts_panel::*;
pub use modals::*;
pub use navigation::*;
pub use single_account::*;
pub use status_bar::*;

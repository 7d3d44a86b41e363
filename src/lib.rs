//! Wallet shell
//!
//! Presentation layer of a wallet as a terminal application: a navigation
//! sidebar gated by a privilege flag, account switching with its management
//! dialogs, and a single-account view with a first-use explanation.
//!
//! UI components read immutable snapshots ([`context::AccountsSnapshot`],
//! [`context::AppSnapshot`]) and send intents through command traits
//! ([`context::AccountsCommands`], [`context::AppCommands`],
//! [`context::Navigator`]). [`AccountsStore`], [`WalletSession`] and
//! [`Router`] are the in-process providers behind those traits.

pub mod accounts;
pub mod config;
pub mod context;
pub mod error;
pub mod router;
pub mod session;
pub mod tui;

pub use accounts::AccountsStore;
pub use config::ShellConfig;
pub use context::{
    Account, AccountsCommands, AccountsProvider, AccountsSnapshot, AppCommands, AppSnapshot,
    ClientDetails, DialogKey, Navigator,
};
pub use error::Error;
pub use router::Router;
pub use session::WalletSession;

// Re-export TUI entry point
pub use tui::run_tui;

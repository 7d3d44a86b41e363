//! Application State Management
//!
//! `App` wires the providers (accounts store, wallet session, router) to the
//! UI components and routes every input event to whichever layer owns it:
//! help, app dialogs, account dialogs, then the focused sidebar panel.

use ratatui::layout::Rect;

use crate::accounts::AccountsStore;
use crate::config::ShellConfig;
use crate::context::{AccountsCommands, DialogKey, Navigator};
use crate::router::Router;
use crate::session::{AppDialog, WalletSession};
use crate::tui::components::account_dialogs::AccountDialogs;
use crate::tui::components::accounts_panel::{activate_overview, compose};
use crate::tui::components::modals::{create_help, ModalState};
use crate::tui::components::navigation::Navigation;
use crate::tui::components::single_account::{SingleAccount, SINGLE_ACCOUNT_LABEL};
use crate::tui::events::Event;
use crate::tui::utils::responsive::contains;

/// Sidebar panel holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Accounts,
    Navigation,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Accounts => Focus::Navigation,
            Focus::Navigation => Focus::Accounts,
        }
    }
}

/// Accounts component mounted in the sidebar
#[derive(Debug, Clone)]
pub enum AccountsView {
    Multi(AccountDialogs),
    Single(SingleAccount),
}

/// Screen areas of the last render, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellLayout {
    pub accounts: Rect,
    pub navigation: Rect,
}

/// UI state that is not owned by a provider
#[derive(Debug, Clone)]
pub struct AppState {
    pub focus: Focus,
    pub accounts_view: AccountsView,
    /// Help or app dialog overlay
    pub modal_state: Option<ModalState>,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub layout: ShellLayout,
    pub should_quit: bool,
}

/// Main application
pub struct App {
    pub state: AppState,
    pub config: ShellConfig,
    pub router: Router,
    pub session: WalletSession,
    pub accounts: AccountsStore,
    pub navigation: Navigation,
}

impl App {
    /// Create a new application instance
    pub fn new(config: ShellConfig, accounts: AccountsStore) -> Self {
        let mut app = Self {
            state: AppState {
                focus: Focus::Navigation,
                accounts_view: AccountsView::Single(SingleAccount::new()),
                modal_state: None,
                status_message: None,
                error_message: None,
                layout: ShellLayout::default(),
                should_quit: false,
            },
            router: Router::new(&config.initial_route),
            session: WalletSession::new(config.admin, config.admin_addresses.clone()),
            accounts,
            navigation: Navigation::new(),
            config,
        };
        app.sync_accounts_view();
        app.sync_session();
        app
    }

    /// Whether the single-account panel should be mounted.
    ///
    /// A wallet with one account uses it even in multi-account mode, until an
    /// account dialog is requested.
    fn wants_single_view(&self) -> bool {
        !self.config.multi_account
            || (self.accounts.accounts().len() == 1 && self.accounts.dialog_to_display().is_none())
    }

    /// Swap the mounted accounts panel when the mode changes
    fn sync_accounts_view(&mut self) {
        let single = self.wants_single_view();
        match (&self.state.accounts_view, single) {
            (AccountsView::Multi(_), true) => {
                tracing::debug!("mounting single-account panel");
                self.state.accounts_view = AccountsView::Single(SingleAccount::new());
            }
            (AccountsView::Single(_), false) => {
                tracing::debug!("mounting multi-account panel");
                let mut dialogs = AccountDialogs::new();
                dialogs.sync(&self.accounts.snapshot());
                self.state.accounts_view = AccountsView::Multi(dialogs);
            }
            _ => {}
        }
    }

    /// Privilege flag for this render pass
    pub fn is_privileged(&self) -> bool {
        self.session.is_admin_address()
    }

    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    /// Whether any overlay is on screen
    pub fn has_open_dialog(&self) -> bool {
        if self.state.modal_state.is_some() || self.session.open_dialog().is_some() {
            return true;
        }
        match &self.state.accounts_view {
            AccountsView::Multi(_) => self.accounts.dialog_to_display().is_some(),
            AccountsView::Single(panel) => panel.is_how_to_visible(),
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.error_message = None;
        self.state.status_message = Some(message.into());
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state.error_message = Some(message.into());
    }

    /// Clear error and status messages
    pub fn clear_messages(&mut self) {
        self.state.error_message = None;
        self.state.status_message = None;
    }

    /// Keep the session's client address on the selected account
    fn sync_session(&mut self) {
        let previous = self.session.client_details().client_address.clone();
        let selected = self.accounts.selected_account().cloned();
        let address = selected.as_ref().map(|account| account.address.clone());

        if previous != address {
            self.session.set_client_address(address);
            if previous.is_some() {
                if let Some(account) = selected {
                    self.set_status(format!("Active account: {}", account.id));
                }
            }
        }
    }

    /// Handle an input event. Returns true when the shell should exit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Quit => {
                self.state.should_quit = true;
                return true;
            }
            Event::Tick | Event::Resize(_, _) => return false,
            Event::Help => {
                self.show_help();
                return false;
            }
            _ => {}
        }

        self.sync_accounts_view();
        if !self.handle_overlay_event(&event) {
            self.handle_panel_event(event);
        }
        self.sync_accounts_view();
        self.state.should_quit
    }

    fn show_help(&mut self) {
        self.state.modal_state = Some(create_help());
    }

    /// Route an event to the topmost overlay. Returns false when none is open.
    fn handle_overlay_event(&mut self, event: &Event) -> bool {
        if let Some(modal) = &mut self.state.modal_state {
            match event {
                Event::Escape | Event::Enter | Event::Char('?') | Event::Char('q') => {
                    self.state.modal_state = None;
                }
                Event::Up => modal.scroll_up(),
                Event::Down => modal.scroll_down(),
                _ => {}
            }
            return true;
        }

        if self.session.open_dialog().is_some() {
            if matches!(event, Event::Escape | Event::Enter | Event::Char('q')) {
                self.session.close_dialog();
            }
            return true;
        }

        let handled = match &mut self.state.accounts_view {
            AccountsView::Single(panel) => {
                if !panel.is_how_to_visible() {
                    return false;
                }
                match event {
                    Event::Escape | Event::Enter | Event::Char('q') => panel.close_how_to(),
                    Event::Char('a') if self.config.multi_account => {
                        panel.close_how_to();
                        self.accounts.set_dialog_to_display(Some(DialogKey::Add));
                    }
                    _ => {}
                }
                true
            }
            AccountsView::Multi(dialogs) => dialogs.handle_event(event, &mut self.accounts),
        };
        if handled {
            self.sync_session();
        }
        handled
    }

    fn handle_panel_event(&mut self, event: Event) {
        let privileged = self.is_privileged();

        match event {
            Event::Char('q') => self.state.should_quit = true,
            Event::Char('?') => self.show_help(),
            Event::Tab | Event::BackTab => self.state.focus = self.state.focus.toggle(),
            Event::Char('b') => {
                if !self.router.back() {
                    self.set_error("No previous page");
                }
            }
            Event::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.state.focus = Focus::Navigation;
                if self
                    .navigation
                    .activate(index, privileged, &mut self.router, &mut self.session)
                    .is_none()
                {
                    self.set_error(format!("No navigation entry {}", c));
                }
            }
            Event::Up | Event::Down | Event::Enter => match self.state.focus {
                Focus::Navigation => match event {
                    Event::Up => self.navigation.move_up(privileged),
                    Event::Down => self.navigation.move_down(privileged),
                    _ => {
                        self.navigation
                            .activate_cursor(privileged, &mut self.router, &mut self.session);
                    }
                },
                Focus::Accounts => {
                    if event == Event::Enter {
                        self.activate_accounts_overview();
                    }
                }
            },
            Event::Click { column, row } => self.handle_click(column, row),
            Event::Escape => self.clear_messages(),
            _ => {}
        }
    }

    fn activate_accounts_overview(&mut self) {
        match &mut self.state.accounts_view {
            AccountsView::Single(panel) => panel.on_overview_click(),
            AccountsView::Multi(dialogs) => {
                if compose(&self.accounts.snapshot()).is_some() {
                    activate_overview(&mut self.accounts);
                    dialogs.sync(&self.accounts.snapshot());
                }
            }
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let layout = self.state.layout;
        let privileged = self.is_privileged();

        if contains(layout.accounts, column, row) {
            self.state.focus = Focus::Accounts;
            self.activate_accounts_overview();
        } else if let Some(index) = self
            .navigation
            .row_at(layout.navigation, column, row, privileged)
        {
            self.state.focus = Focus::Navigation;
            self.navigation
                .activate(index, privileged, &mut self.router, &mut self.session);
        }
    }

    /// Information modal for the open send/receive dialog
    pub fn app_dialog_modal(&self) -> Option<ModalState> {
        let dialog = self.session.open_dialog()?;
        let (name, address) = match &self.state.accounts_view {
            AccountsView::Multi(_) => self
                .accounts
                .selected_account()
                .map(|account| (account.id.clone(), account.address.clone()))
                .unwrap_or_default(),
            AccountsView::Single(_) => (
                SINGLE_ACCOUNT_LABEL.to_string(),
                SingleAccount::account(&self.session.snapshot()).address,
            ),
        };

        let modal = match dialog {
            AppDialog::Send => ModalState::information(
                "Send".to_string(),
                vec![
                    format!("From: {}", name),
                    format!("Address: {}", address),
                    String::new(),
                    "Transfers are signed by the wallet backend.".to_string(),
                ],
            ),
            AppDialog::Receive => ModalState::information(
                "Receive".to_string(),
                vec![
                    format!("Account: {}", name),
                    String::new(),
                    "Send funds to:".to_string(),
                    address,
                ],
            ),
        };
        Some(modal)
    }
}

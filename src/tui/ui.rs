//! UI Rendering Logic
//!
//! This module lays out the shell (sidebar, route page, status bar) and draws
//! the overlays on top in stacking order.

use ratatui::prelude::*;

use crate::tui::app::{AccountsView, App, Focus, ShellLayout};
use crate::tui::components::account_overview::OVERVIEW_HEIGHT;
use crate::tui::components::accounts_panel::{
    compose, render_accounts_dialogs, render_accounts_panel,
};
use crate::tui::components::modals::render_modal;
use crate::tui::components::navigation::render_navigation;
use crate::tui::components::single_account::SingleAccount;
use crate::tui::components::status_bar::render_status_bar;
use crate::tui::screens::pages::render_page;
use crate::tui::utils::responsive::{create_size_warning_popup, is_too_small, sidebar_width};

/// Main UI rendering function
pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    if is_too_small(size) {
        let (popup_area, clear_widget, warning_widget) = create_size_warning_popup(size);
        frame.render_widget(clear_widget, popup_area);
        frame.render_widget(warning_widget, popup_area);
        app.state.layout = ShellLayout::default();
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width(size)), Constraint::Min(0)])
        .split(rows[0]);

    app.state.layout = render_sidebar(frame, columns[0], app);

    let selected = match &app.state.accounts_view {
        AccountsView::Multi(_) => app.accounts.selected_account().cloned(),
        AccountsView::Single(_) => Some(SingleAccount::account(&app.session.snapshot())),
    };
    render_page(
        frame,
        app.current_path(),
        selected.as_ref(),
        app.is_privileged(),
        columns[1],
    );

    render_status_bar(frame, app, rows[1]);

    render_overlays(frame, app, size);
}

/// Render the accounts panel above the navigation panel and return their areas
fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) -> ShellLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(OVERVIEW_HEIGHT), Constraint::Min(0)])
        .split(area);

    let accounts_focused = app.state.focus == Focus::Accounts;
    let accounts_area = match &app.state.accounts_view {
        AccountsView::Multi(_) => {
            let snapshot = app.accounts.snapshot();
            render_accounts_panel(frame, &snapshot, chunks[0], accounts_focused);
            if compose(&snapshot).is_some() {
                chunks[0]
            } else {
                Rect::default()
            }
        }
        AccountsView::Single(panel) => {
            panel.render(frame, &app.session.snapshot(), chunks[0], accounts_focused);
            chunks[0]
        }
    };

    render_navigation(
        frame,
        &app.navigation,
        chunks[1],
        app.current_path(),
        app.is_privileged(),
        app.state.focus == Focus::Navigation,
    );

    ShellLayout {
        accounts: accounts_area,
        navigation: chunks[1],
    }
}

/// Draw open dialogs, lowest layer first
fn render_overlays(frame: &mut Frame, app: &App, area: Rect) {
    match &app.state.accounts_view {
        AccountsView::Multi(dialogs) => {
            render_accounts_dialogs(frame, dialogs, &app.accounts.snapshot(), area)
        }
        AccountsView::Single(panel) => panel.render_dialog(frame, area, app.config.multi_account),
    }

    if let Some(modal) = app.app_dialog_modal() {
        render_modal(frame, &modal, area);
    }

    if let Some(modal) = &app.state.modal_state {
        render_modal(frame, modal, area);
    }
}

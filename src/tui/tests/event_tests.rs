use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::accounts::AccountsStore;
use crate::config::ShellConfig;
use crate::context::{Account, DialogKey};
use crate::session::AppDialog;
use crate::tui::app::{App, Focus};
use crate::tui::events::{convert_key_event, convert_mouse_event};

const PASSWORD: &str = "Correct-Horse-42";

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn key_ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(code)
    }
}

/// Feed a key through the terminal conversion and into the app
fn press(app: &mut App, key_event: KeyEvent) -> bool {
    match convert_key_event(key_event) {
        Some(event) => app.handle_event(event),
        None => false,
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, key(KeyCode::Char(c)));
    }
}

fn app() -> App {
    let mut store = AccountsStore::with_password(PASSWORD).unwrap();
    store
        .insert_account(
            Account::new("Account 1", "n1first"),
            "abandon ability able".to_string(),
        )
        .unwrap();
    store
        .insert_account(
            Account::new("Savings", "n1second"),
            "zoo zone zero".to_string(),
        )
        .unwrap();
    App::new(ShellConfig::default(), store)
}

#[test]
fn event_ctrl_c_quits_from_dialog() {
    let mut app = app();
    app.state.focus = Focus::Accounts;
    press(&mut app, key(KeyCode::Enter));
    assert!(app.has_open_dialog());

    assert!(press(&mut app, key_ctrl(KeyCode::Char('c'))));
    assert!(app.state.should_quit);
}

#[test]
fn event_other_ctrl_keys_are_ignored() {
    let mut app = app();
    assert!(!press(&mut app, key_ctrl(KeyCode::Char('q'))));
    assert!(!app.state.should_quit);
}

#[test]
fn event_tab_toggles_focus() {
    let mut app = app();
    assert_eq!(app.state.focus, Focus::Navigation);
    press(&mut app, key(KeyCode::Tab));
    assert_eq!(app.state.focus, Focus::Accounts);
    press(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.state.focus, Focus::Navigation);
}

#[test]
fn event_arrow_keys_move_and_enter_navigates() {
    let mut app = app();
    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Enter));
    assert_eq!(app.current_path(), "/bond");

    // Wraps from the first row to the last visible one
    press(&mut app, key(KeyCode::Char('1')));
    press(&mut app, key(KeyCode::Up));
    press(&mut app, key(KeyCode::Enter));
    assert_eq!(app.current_path(), "/delegation");
}

#[test]
fn event_receive_opens_dialog_without_navigating() {
    let mut app = app();
    press(&mut app, key(KeyCode::Char('3')));
    assert_eq!(app.session.open_dialog(), Some(AppDialog::Receive));
    assert_eq!(app.current_path(), "/balance");

    // Dialog swallows navigation keys
    press(&mut app, key(KeyCode::Char('4')));
    assert_eq!(app.current_path(), "/balance");

    press(&mut app, key(KeyCode::Esc));
    assert_eq!(app.session.open_dialog(), None);
}

#[test]
fn event_add_account_flow() {
    let mut app = app();
    app.state.focus = Focus::Accounts;
    press(&mut app, key(KeyCode::Enter));
    press(&mut app, key(KeyCode::Char('a')));
    assert_eq!(app.accounts.dialog_to_display(), Some(DialogKey::Add));

    // 'q' is text while a dialog has focus
    type_text(&mut app, "Trading q");
    assert!(!app.state.should_quit);
    press(&mut app, key(KeyCode::Backspace));
    press(&mut app, key(KeyCode::Backspace));
    press(&mut app, key(KeyCode::Enter));

    // Back on the list with the cursor on the new account
    assert_eq!(app.accounts.dialog_to_display(), Some(DialogKey::Accounts));
    assert_eq!(app.accounts.accounts().len(), 3);
    assert_eq!(app.accounts.selected_account().unwrap().id, "Account 1");

    press(&mut app, key(KeyCode::Enter));
    assert_eq!(app.accounts.dialog_to_display(), None);
    let selected = app.accounts.selected_account().unwrap();
    assert_eq!(selected.id, "Trading");
    assert_eq!(
        app.session.client_details().client_address.as_deref(),
        Some(selected.address.as_str())
    );
}

#[test]
fn event_rename_account_flow() {
    let mut app = app();
    app.state.focus = Focus::Accounts;
    press(&mut app, key(KeyCode::Enter));
    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Char('e')));
    assert_eq!(app.accounts.dialog_to_display(), Some(DialogKey::Edit));

    for _ in 0.."Savings".len() {
        press(&mut app, key(KeyCode::Backspace));
    }
    type_text(&mut app, "Vault");
    press(&mut app, key(KeyCode::Enter));

    let ids: Vec<_> = app.accounts.accounts().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["Account 1", "Vault"]);
}

#[test]
fn event_mnemonic_requires_password() {
    let mut app = app();
    app.state.focus = Focus::Accounts;
    press(&mut app, key(KeyCode::Enter));
    press(&mut app, key(KeyCode::Char('m')));
    assert_eq!(app.accounts.dialog_to_display(), Some(DialogKey::Mnemonic));

    type_text(&mut app, "wrong-password");
    press(&mut app, key(KeyCode::Enter));
    assert_eq!(app.accounts.dialog_to_display(), Some(DialogKey::Mnemonic));

    press(&mut app, key(KeyCode::Esc));
    assert_eq!(app.accounts.dialog_to_display(), Some(DialogKey::Accounts));
    press(&mut app, key(KeyCode::Esc));
    assert_eq!(app.accounts.dialog_to_display(), None);
    assert!(!app.has_open_dialog());
}

#[test]
fn event_mouse_conversion_feeds_clicks() {
    let mut app = app();
    app.state.layout.navigation = ratatui::layout::Rect::new(0, 4, 30, 10);

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 4,
        row: 8,
        modifiers: KeyModifiers::NONE,
    };
    let event = convert_mouse_event(click).unwrap();
    app.handle_event(event);
    assert_eq!(app.current_path(), "/bond");
}

#[test]
fn event_back_returns_to_previous_route() {
    let mut app = app();
    press(&mut app, key(KeyCode::Char('5')));
    press(&mut app, key(KeyCode::Char('6')));
    assert_eq!(app.current_path(), "/delegation");

    press(&mut app, key(KeyCode::Char('b')));
    assert_eq!(app.current_path(), "/unbond");
    press(&mut app, key(KeyCode::Char('b')));
    assert_eq!(app.current_path(), "/balance");

    press(&mut app, key(KeyCode::Char('b')));
    assert_eq!(app.state.error_message.as_deref(), Some("No previous page"));
}

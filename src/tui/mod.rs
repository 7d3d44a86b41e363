//! Wallet Shell TUI Module
//!
//! Terminal front end for the wallet shell: sidebar with the accounts and
//! navigation panels, a page per route and the account dialogs.

pub mod app;
pub mod components;
pub mod events;
pub mod screens;
pub mod ui;
pub mod utils;

pub use app::{App, AppState};
pub use events::{Event, EventHandler};
pub use ui::render_ui;

use crate::Error;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Global flag to track if terminal cleanup is needed
static TERMINAL_NEEDS_CLEANUP: AtomicBool = AtomicBool::new(false);

/// Initialize the terminal for TUI mode
///
/// Sets up the terminal with alternate screen, mouse capture and raw mode.
/// Automatically tracks that cleanup will be needed.
pub fn init_terminal() -> Result<TuiTerminal, Error> {
    enable_raw_mode()?;
    TERMINAL_NEEDS_CLEANUP.store(true, Ordering::SeqCst);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Hide cursor for a cleaner interface
    terminal.hide_cursor()?;

    Ok(terminal)
}

/// Restore the terminal to normal mode
///
/// Disables raw mode, leaves alternate screen, and shows cursor.
/// Safe to call multiple times.
pub fn restore_terminal(terminal: &mut TuiTerminal) -> Result<(), Error> {
    if TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst) {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
    }
    Ok(())
}

/// Emergency terminal cleanup for panic situations
///
/// Performs basic terminal restoration without error handling to ensure
/// terminal state is restored even during panics.
fn emergency_terminal_cleanup() {
    if TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst) {
        // Ignore errors during emergency cleanup
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = execute!(io::stdout(), cursor::Show);
        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
    }
}

/// Setup panic handler for graceful terminal restoration
pub fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        emergency_terminal_cleanup();
        original_hook(panic_info);
    }));
}

/// Main TUI application entry point
///
/// Installs the panic hook, takes over the terminal, runs the event loop until
/// the user quits and restores the terminal on the way out, also on error.
pub async fn run_tui(mut app: App) -> Result<(), Error> {
    setup_panic_handler();

    let mut terminal = init_terminal().inspect_err(|_| emergency_terminal_cleanup())?;

    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut event_handler = EventHandler::new(tick_rate);

    if app.state.status_message.is_none() {
        app.set_status("Press ? for help, q to quit");
    }
    tracing::info!("shell started on {}", app.current_path());

    let app_result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Always attempt to restore terminal, even if app_result is an error
    if let Err(restore_error) = restore_terminal(&mut terminal) {
        if app_result.is_ok() {
            return Err(restore_error);
        }
        tracing::error!(error = %restore_error, "failed to restore terminal");
    }

    tracing::info!("shell stopped");
    app_result
}

/// Internal application loop
async fn run_app_loop(
    terminal: &mut TuiTerminal,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<(), Error> {
    // One frame per received event, ticks included
    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        let event = event_handler.next().await?;
        if matches!(event, Event::Tick) {
            continue;
        }

        tracing::trace!(event = ?event, "event");
        if app.handle_event(event) {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;

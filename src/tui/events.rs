//! Event Handling System
//!
//! This module converts keyboard and mouse input into application events and
//! feeds them to the main loop through an unbounded channel.

use crossterm::event::{
    self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::error::Error;

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Quit the application (Ctrl+C)
    Quit,
    /// Move focus to the next panel
    Tab,
    /// Move focus to the previous panel (Shift+Tab)
    BackTab,
    /// Enter/confirm action
    Enter,
    /// Escape/cancel action
    Escape,
    /// Arrow key navigation
    Up,
    Down,
    Left,
    Right,
    /// Character input
    Char(char),
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Help action (F1)
    Help,
    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },
    /// Terminal resized
    Resize(u16, u16),
    /// Periodic redraw tick
    Tick,
}

/// Event handler that manages the input channel
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    _terminal_task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler reading from the terminal
    pub fn new(tick_rate: Duration) -> Self {
        let (event_sender, receiver) = mpsc::unbounded_channel();

        let terminal_task = tokio::spawn(async move {
            let mut last_tick = Instant::now();
            loop {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    if let Ok(terminal_event) = event::read() {
                        if let Some(app_event) = convert_terminal_event(terminal_event) {
                            if event_sender.send(app_event).is_err() {
                                break; // Channel closed
                            }
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }

                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        });

        Self {
            receiver,
            _terminal_task: terminal_task,
        }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Result<Event, Error> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| Error::Other("Event channel closed".to_string()))
    }
}

/// Convert a terminal event to an application event
pub fn convert_terminal_event(terminal_event: event::Event) -> Option<Event> {
    match terminal_event {
        event::Event::Key(key_event) => convert_key_event(key_event),
        event::Event::Mouse(mouse_event) => convert_mouse_event(mouse_event),
        event::Event::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

/// Convert a key event to an application event
pub fn convert_key_event(key_event: KeyEvent) -> Option<Event> {
    // Windows reports releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') => Some(Event::Quit),
            _ => None,
        };
    }

    match key_event.code {
        KeyCode::Tab => Some(Event::Tab),
        KeyCode::BackTab => Some(Event::BackTab),
        KeyCode::Enter => Some(Event::Enter),
        KeyCode::Esc => Some(Event::Escape),
        KeyCode::Up => Some(Event::Up),
        KeyCode::Down => Some(Event::Down),
        KeyCode::Left => Some(Event::Left),
        KeyCode::Right => Some(Event::Right),
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Delete => Some(Event::Delete),
        KeyCode::F(1) => Some(Event::Help),
        // Shift is implied by the character itself
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::ALT) => {
            Some(Event::Char(c))
        }
        _ => None,
    }
}

/// Convert a mouse event to an application event
pub fn convert_mouse_event(mouse_event: MouseEvent) -> Option<Event> {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Event::Click {
            column: mouse_event.column,
            row: mouse_event.row,
        }),
        MouseEventKind::ScrollUp => Some(Event::Up),
        MouseEventKind::ScrollDown => Some(Event::Down),
        _ => None,
    }
}

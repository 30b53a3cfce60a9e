//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::state::is_supported_char;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character into the buffer
    Insert(char),
    /// Evaluate the expression
    Evaluate,
    /// Delete the last character
    Backspace,
    /// Clear the buffer
    Clear,
    /// Switch between radians and degrees
    ToggleAngle,
    /// Switch between full and compact layout
    ToggleLayout,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l' | 'u') => KeyAction::Clear,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if is_supported_char(c) => KeyAction::Insert(c),
            KeyCode::Char('c' | 'C') => KeyAction::Clear,
            KeyCode::Char('r' | 'R') => KeyAction::ToggleAngle,
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Evaluate,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Esc => KeyAction::Clear,
            KeyCode::Tab => KeyAction::ToggleLayout,
            _ => KeyAction::None,
        }
    }
}

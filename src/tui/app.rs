//! TUI application shell around the pure calculator state.

use std::mem;

use crate::core::state::{CalcEvent, CalcState};

use super::input::KeyAction;
use super::keypad::ButtonAction;

/// Calculator application.
///
/// All calculator semantics live in [`CalcState`]; this type only routes
/// key and button input to events and tracks the quit flag.
#[derive(Debug, Default)]
pub struct CalculatorApp {
    state: CalcState,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current calculator state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a calculator event to the state
    pub fn handle(&mut self, event: CalcEvent) {
        let state = mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    /// Handles a keypad button press
    pub fn press(&mut self, action: ButtonAction) {
        self.handle(action.event());
    }

    /// Handles a keyboard action
    pub fn apply_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Insert(c) => self.handle(CalcEvent::Char(c)),
            KeyAction::Evaluate => self.handle(CalcEvent::Evaluate),
            KeyAction::Backspace => self.handle(CalcEvent::Backspace),
            KeyAction::Clear => self.handle(CalcEvent::Clear),
            KeyAction::ToggleAngle => self.handle(CalcEvent::ToggleAngleMode),
            KeyAction::ToggleLayout => self.handle(CalcEvent::ToggleLayout),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}

//! Terminal user interface built on ratatui and crossterm.

pub mod app;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, screen_areas, ScreenAreas};

//! Scientific calculator with a terminal UI.
//!
//! The crate is split into a UI-independent core and an optional terminal
//! front end:
//!
//! - [`core`] holds the expression language (tokenizer, recursive-descent
//!   parser, evaluator) and the calculator state machine: expression buffer,
//!   angle mode, memory register, and history. Everything in `core` is pure
//!   and deterministic, so the full calculator contract is unit-testable
//!   without a display surface.
//! - [`tui`] (behind the default `tui` feature) renders the display line,
//!   keypad panels, and history list with ratatui, and maps crossterm key
//!   and mouse events onto core events.
//!
//! # Example
//!
//! ```rust
//! use sci_calc::prelude::*;
//!
//! let eval = Evaluator::new();
//! assert_eq!(eval.evaluate_str("42 * (3 + 7)").unwrap(), 420.0);
//!
//! // Degree-mode trigonometry
//! let eval = Evaluator::with_angle_mode(AngleMode::Degrees);
//! assert!((eval.evaluate_str("sin(90)").unwrap() - 1.0).abs() < 1e-12);
//!
//! // The calculator controller is a pure state machine
//! let state = CalcState::new()
//!     .apply(CalcEvent::Char('1'))
//!     .apply(CalcEvent::Char('+'))
//!     .apply(CalcEvent::Char('2'))
//!     .apply(CalcEvent::Evaluate);
//! assert_eq!(state.display(), "3");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::operations::{Constant, MathFunction, Operation};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::state::{format_number, CalcEvent, CalcState};
    pub use crate::core::{AngleMode, CalcError, CalcResult, LayoutMode};

    #[cfg(feature = "tui")]
    pub use crate::tui::{ButtonAction, CalculatorApp, InputHandler, KeyAction, Keypad};
}

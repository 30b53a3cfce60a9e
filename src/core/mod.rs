//! UI-independent calculator core: expression language and controller state.

pub mod evaluator;
pub mod history;
pub mod operations;
pub mod parser;
pub mod state;

pub use operations::{Constant, MathFunction, Operation};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division or modulo by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Result overflowed the representable range
    #[error("overflow: result exceeds representable range")]
    Overflow,
    /// Invalid expression syntax
    #[error("invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("empty expression")]
    EmptyExpression,
    /// Function argument outside its domain
    #[error("domain error: {0}")]
    DomainError(String),
    /// Result is not a finite number
    #[error("invalid result: {0}")]
    InvalidResult(String),
}

/// Interpretation of trigonometric function arguments.
///
/// Only trig evaluation is affected; everything else is mode-independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    /// Arguments are radians (the native interpretation)
    #[default]
    Radians,
    /// Arguments are degrees, converted before evaluation
    Degrees,
}

impl AngleMode {
    /// Returns the opposite mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    /// Short label shown on the mode toggle button
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Radians => "Rad",
            Self::Degrees => "Deg",
        }
    }
}

/// Presentation layout: which panels the front end shows.
///
/// Purely a display switch; calculator semantics are identical in both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Scientific panel and history visible
    #[default]
    Full,
    /// Number pad only
    Compact,
}

impl LayoutMode {
    /// Returns the opposite layout
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Full => Self::Compact,
            Self::Compact => Self::Full,
        }
    }
}

//! Arithmetic operators, scientific functions, and constants.

use crate::core::{AngleMode, CalcError, CalcResult};

/// Type-safe binary operator enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Modulo (%)
    Modulo,
    /// Power (^)
    Power,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
            Self::Power => '^',
        }
    }

    /// Returns the precedence level (higher binds tighter)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Modulo => 2,
            Self::Power => 3,
        }
    }

    /// Returns true if this operation is left-associative
    #[must_use]
    pub const fn is_left_associative(self) -> bool {
        !matches!(self, Self::Power)
    }

    /// Applies the operation to two operands
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Self::Modulo => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a % b
            }
            Self::Power => a.powf(b),
        };
        check_finite(result)
    }
}

/// Scientific functions available in expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    /// Sine, angle-mode sensitive
    Sin,
    /// Cosine, angle-mode sensitive
    Cos,
    /// Tangent, angle-mode sensitive
    Tan,
    /// Natural logarithm
    Ln,
    /// Exponential (e^x)
    Exp,
    /// Square root
    Sqrt,
}

impl MathFunction {
    /// All supported functions, for keypads and lookup tables
    pub const ALL: [Self; 6] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
        Self::Exp,
        Self::Sqrt,
    ];

    /// The function name as written in expressions
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
        }
    }

    /// The text a function key appends to the buffer (`"sin("` etc.)
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sin => "sin(",
            Self::Cos => "cos(",
            Self::Tan => "tan(",
            Self::Ln => "ln(",
            Self::Exp => "exp(",
            Self::Sqrt => "sqrt(",
        }
    }

    /// Looks a function up by its expression name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Returns true if the function interprets its argument as an angle
    #[must_use]
    pub const fn is_trig(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Applies the function under the given angle mode
    pub fn apply(self, x: f64, mode: AngleMode) -> CalcResult<f64> {
        let arg = if self.is_trig() && mode == AngleMode::Degrees {
            x.to_radians()
        } else {
            x
        };
        let result = match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Ln => {
                if arg <= 0.0 {
                    return Err(CalcError::DomainError(format!("ln({arg}) is undefined")));
                }
                arg.ln()
            }
            Self::Exp => arg.exp(),
            Self::Sqrt => {
                if arg < 0.0 {
                    return Err(CalcError::DomainError(format!(
                        "sqrt({arg}) of negative number"
                    )));
                }
                arg.sqrt()
            }
        };
        check_finite(result)
    }
}

/// Named constants available in expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// The circle constant π
    Pi,
    /// Euler's number e
    E,
}

impl Constant {
    /// The symbol a constant key appends to the buffer
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    /// The numeric value of the constant
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Looks a constant up by its expression name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" | "π" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }
}

/// Rejects NaN and infinite results
fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}

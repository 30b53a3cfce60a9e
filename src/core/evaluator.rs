//! AST evaluator parameterized by angle mode.

use crate::core::parser::{AstNode, Parser};
use crate::core::{AngleMode, CalcResult, Operation};

/// Evaluator for parsed expressions.
///
/// Evaluation is pure: the same AST and angle mode always produce the same
/// result, and the evaluator holds no mutable state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    angle_mode: AngleMode,
}

impl Evaluator {
    /// Creates a new evaluator in radian mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the given angle mode
    #[must_use]
    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Self { angle_mode }
    }

    /// Returns the active angle mode
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Constant(c) => Ok(c.value()),
            AstNode::Negate(inner) => {
                let value = self.evaluate(inner)?;
                Ok(-value)
            }
            AstNode::FunctionCall { func, arg } => {
                let value = self.evaluate(arg)?;
                func.apply(value, self.angle_mode)
            }
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                op.apply(left_val, right_val)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

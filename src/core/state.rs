//! Calculator controller: a pure state machine over discrete UI events.
//!
//! Every user action is a [`CalcEvent`]; [`CalcState::apply`] consumes the
//! current state and returns the next one. The display surface only ever
//! reads the resulting state, so the full contract is testable headless.

use crate::core::evaluator::Evaluator;
use crate::core::history::History;
use crate::core::operations::{Constant, MathFunction};
use crate::core::{AngleMode, LayoutMode};

/// Text shown on the display line after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// The input alphabet the buffer accepts directly from key presses.
///
/// Function names and constants enter the buffer only through their
/// dedicated events; stray characters are ignored.
#[must_use]
pub fn is_supported_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')')
}

/// Formats a result value for the display line and buffer seeding.
///
/// Integral values render without a fractional part; everything else keeps
/// at most ten fractional digits with trailing zeros trimmed.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Discrete calculator events, one per button or key action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcEvent {
    /// Append a character from the supported alphabet
    Char(char),
    /// Append a function token (`sin(` etc.)
    Function(MathFunction),
    /// Append a constant symbol (`π`, `e`)
    Constant(Constant),
    /// Append the last result (the `Ans` key)
    Ans,
    /// Evaluate the buffer
    Evaluate,
    /// Clear the buffer and display
    Clear,
    /// Clear the current entry (same surface effect as `Clear`)
    ClearEntry,
    /// Remove the last character from the buffer
    Backspace,
    /// Prepend or remove a leading negation sign
    ToggleSign,
    /// Switch between radians and degrees
    ToggleAngleMode,
    /// Switch between full and compact layout
    ToggleLayout,
    /// Zero the memory register
    MemoryClear,
    /// Append the memory register value to the buffer
    MemoryRecall,
    /// Evaluate the buffer and add it to the memory register
    MemoryAdd,
    /// Evaluate the buffer and subtract it from the memory register
    MemorySubtract,
}

/// Complete calculator state.
///
/// The memory register and history survive buffer clears; only their
/// dedicated events touch them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcState {
    buffer: String,
    display: String,
    angle_mode: AngleMode,
    layout: LayoutMode,
    memory: f64,
    last_result: f64,
    history: History,
}

impl CalcState {
    /// Creates a fresh calculator state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-progress expression buffer
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The text currently shown on the display line
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The active angle mode
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// The active layout mode
    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// The memory register value
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// The most recent successfully evaluated result
    #[must_use]
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// The calculation history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Applies one event and returns the next state
    #[must_use]
    pub fn apply(mut self, event: CalcEvent) -> Self {
        match event {
            CalcEvent::Char(c) => {
                if is_supported_char(c) {
                    self.buffer.push(c);
                    self.display.clone_from(&self.buffer);
                }
                self
            }
            CalcEvent::Function(func) => self.append(func.token()),
            CalcEvent::Constant(constant) => self.append(constant.symbol()),
            CalcEvent::Ans => {
                let text = format_number(self.last_result);
                self.append(&text)
            }
            CalcEvent::Evaluate => self.evaluate(),
            CalcEvent::Clear | CalcEvent::ClearEntry => {
                self.buffer.clear();
                self.display.clear();
                self
            }
            CalcEvent::Backspace => {
                self.buffer.pop();
                self.display.clone_from(&self.buffer);
                self
            }
            CalcEvent::ToggleSign => {
                if !self.buffer.is_empty() {
                    if let Some(rest) = self.buffer.strip_prefix('-') {
                        self.buffer = rest.to_string();
                    } else {
                        self.buffer.insert(0, '-');
                    }
                    self.display.clone_from(&self.buffer);
                }
                self
            }
            CalcEvent::ToggleAngleMode => {
                self.angle_mode = self.angle_mode.toggled();
                self
            }
            CalcEvent::ToggleLayout => {
                self.layout = self.layout.toggled();
                self
            }
            CalcEvent::MemoryClear => {
                self.memory = 0.0;
                self.display = "Memory cleared".into();
                self
            }
            CalcEvent::MemoryRecall => {
                let text = format_number(self.memory);
                self.append(&text)
            }
            CalcEvent::MemoryAdd => self.memory_accumulate(1.0),
            CalcEvent::MemorySubtract => self.memory_accumulate(-1.0),
        }
    }

    fn append(mut self, text: &str) -> Self {
        self.buffer.push_str(text);
        self.display.clone_from(&self.buffer);
        self
    }

    fn evaluate(mut self) -> Self {
        if self.buffer.is_empty() {
            return self;
        }

        let evaluator = Evaluator::with_angle_mode(self.angle_mode);
        match evaluator.evaluate_str(&self.buffer) {
            Ok(value) => {
                self.history.record(&self.buffer, value);
                self.last_result = value;
                // Seed the buffer with the result so calculations chain
                self.buffer = format_number(value);
                self.display.clone_from(&self.buffer);
            }
            Err(_) => {
                self.display = ERROR_DISPLAY.into();
                self.buffer.clear();
            }
        }
        self
    }

    fn memory_accumulate(mut self, sign: f64) -> Self {
        let value = if self.buffer.is_empty() {
            Ok(0.0)
        } else {
            Evaluator::with_angle_mode(self.angle_mode).evaluate_str(&self.buffer)
        };
        match value {
            Ok(v) => {
                self.memory += sign * v;
                self.display = format!("M: {}", format_number(self.memory));
                self.buffer.clear();
            }
            Err(_) => {
                self.display = ERROR_DISPLAY.into();
                self.buffer.clear();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(state: CalcState, input: &str) -> CalcState {
        input
            .chars()
            .fold(state, |s, c| s.apply(CalcEvent::Char(c)))
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.14), "3.14");
        assert_eq!(format_number(1.50), "1.5");
    }

    #[test]
    fn test_format_number_large_integer() {
        assert_eq!(format_number(1e14), "100000000000000");
    }

    // ===== Alphabet tests =====

    #[test]
    fn test_supported_chars() {
        for c in "0123456789.+-*/%^()".chars() {
            assert!(is_supported_char(c), "'{c}' should be supported");
        }
    }

    #[test]
    fn test_unsupported_chars() {
        for c in "abcXYZ@#$! =".chars() {
            assert!(!is_supported_char(c), "'{c}' should be rejected");
        }
    }

    // ===== Buffer operation tests =====

    #[test]
    fn test_char_appends_and_echoes() {
        let state = type_str(CalcState::new(), "1+2");
        assert_eq!(state.buffer(), "1+2");
        assert_eq!(state.display(), "1+2");
    }

    #[test]
    fn test_char_outside_alphabet_ignored() {
        let state = CalcState::new().apply(CalcEvent::Char('x'));
        assert!(state.buffer().is_empty());
        assert!(state.display().is_empty());
    }

    #[test]
    fn test_function_appends_token() {
        let state = CalcState::new().apply(CalcEvent::Function(MathFunction::Sin));
        assert_eq!(state.buffer(), "sin(");
    }

    #[test]
    fn test_constant_appends_symbol() {
        let state = CalcState::new().apply(CalcEvent::Constant(Constant::Pi));
        assert_eq!(state.buffer(), "π");
    }

    #[test]
    fn test_clear_empties_buffer_and_display() {
        let state = type_str(CalcState::new(), "123").apply(CalcEvent::Clear);
        assert!(state.buffer().is_empty());
        assert!(state.display().is_empty());
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let state = type_str(CalcState::new(), "123").apply(CalcEvent::Backspace);
        assert_eq!(state.buffer(), "12");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let state = CalcState::new().apply(CalcEvent::Backspace);
        assert!(state.buffer().is_empty());
    }

    #[test]
    fn test_toggle_sign_prepends_and_removes() {
        let state = type_str(CalcState::new(), "42");
        let negated = state.apply(CalcEvent::ToggleSign);
        assert_eq!(negated.buffer(), "-42");
        let restored = negated.apply(CalcEvent::ToggleSign);
        assert_eq!(restored.buffer(), "42");
    }

    #[test]
    fn test_toggle_sign_involution() {
        let state = type_str(CalcState::new(), "1+2");
        let twice = state
            .clone()
            .apply(CalcEvent::ToggleSign)
            .apply(CalcEvent::ToggleSign);
        assert_eq!(twice.buffer(), state.buffer());
    }

    #[test]
    fn test_toggle_sign_empty_is_noop() {
        let state = CalcState::new().apply(CalcEvent::ToggleSign);
        assert!(state.buffer().is_empty());
    }

    // ===== Evaluation tests =====

    #[test]
    fn test_evaluate_shows_result_and_chains() {
        let state = type_str(CalcState::new(), "6*7").apply(CalcEvent::Evaluate);
        assert_eq!(state.display(), "42");
        assert_eq!(state.buffer(), "42");
        assert_eq!(state.last_result(), 42.0);
    }

    #[test]
    fn test_evaluate_empty_is_noop() {
        let state = CalcState::new().apply(CalcEvent::Evaluate);
        assert!(state.display().is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_evaluate_failure_shows_error_and_resets() {
        let state = type_str(CalcState::new(), "1/0").apply(CalcEvent::Evaluate);
        assert_eq!(state.display(), ERROR_DISPLAY);
        assert!(state.buffer().is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_evaluate_malformed_shows_error_and_resets() {
        let state = type_str(CalcState::new(), "2++").apply(CalcEvent::Evaluate);
        assert_eq!(state.display(), ERROR_DISPLAY);
        assert!(state.buffer().is_empty());
    }

    #[test]
    fn test_evaluate_records_history_literally() {
        let state = type_str(CalcState::new(), "2+2").apply(CalcEvent::Evaluate);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().last().unwrap().display(), "2+2 = 4");
    }

    #[test]
    fn test_history_grows_per_successful_evaluation() {
        let mut state = CalcState::new();
        for i in 1..=5 {
            state = type_str(state.apply(CalcEvent::Clear), &format!("{i}+{i}"))
                .apply(CalcEvent::Evaluate);
        }
        assert_eq!(state.history().len(), 5);
    }

    #[test]
    fn test_chained_calculation() {
        // 2+3 = 5, then *2 = 10 using the seeded buffer
        let state = type_str(CalcState::new(), "2+3").apply(CalcEvent::Evaluate);
        let state = type_str(state, "*2").apply(CalcEvent::Evaluate);
        assert_eq!(state.display(), "10");
    }

    #[test]
    fn test_pi_evaluates_to_std_constant() {
        let state = CalcState::new()
            .apply(CalcEvent::Constant(Constant::Pi))
            .apply(CalcEvent::Evaluate);
        assert_eq!(state.last_result(), std::f64::consts::PI);
    }

    // ===== Angle mode tests =====

    #[test]
    fn test_angle_mode_changes_trig_result() {
        let build = |state: CalcState| {
            type_str(
                state.apply(CalcEvent::Function(MathFunction::Sin)),
                "90)",
            )
            .apply(CalcEvent::Evaluate)
        };

        let rad = build(CalcState::new());
        assert!((rad.last_result() - 0.8939966636).abs() < 1e-9);

        let deg = build(CalcState::new().apply(CalcEvent::ToggleAngleMode));
        assert!((deg.last_result() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_toggle_angle_mode() {
        let state = CalcState::new();
        assert_eq!(state.angle_mode(), AngleMode::Radians);
        let state = state.apply(CalcEvent::ToggleAngleMode);
        assert_eq!(state.angle_mode(), AngleMode::Degrees);
    }

    // ===== Layout tests =====

    #[test]
    fn test_toggle_layout_is_presentation_only() {
        let state = type_str(CalcState::new(), "1+1").apply(CalcEvent::ToggleLayout);
        assert_eq!(state.layout(), LayoutMode::Compact);
        assert_eq!(state.buffer(), "1+1");
        let state = state.apply(CalcEvent::Evaluate);
        assert_eq!(state.display(), "2");
    }

    // ===== Ans tests =====

    #[test]
    fn test_ans_appends_last_result() {
        let state = type_str(CalcState::new(), "6*7")
            .apply(CalcEvent::Evaluate)
            .apply(CalcEvent::Clear)
            .apply(CalcEvent::Ans);
        assert_eq!(state.buffer(), "42");
    }

    #[test]
    fn test_ans_before_any_evaluation_is_zero() {
        let state = CalcState::new().apply(CalcEvent::Ans);
        assert_eq!(state.buffer(), "0");
    }

    // ===== Memory register tests =====

    #[test]
    fn test_memory_add_accumulates_and_clears_buffer() {
        let state = type_str(CalcState::new(), "2+3").apply(CalcEvent::MemoryAdd);
        assert_eq!(state.memory(), 5.0);
        assert!(state.buffer().is_empty());
        assert_eq!(state.display(), "M: 5");
    }

    #[test]
    fn test_memory_subtract() {
        let state = type_str(CalcState::new(), "10")
            .apply(CalcEvent::MemoryAdd)
            .apply(CalcEvent::Char('4'))
            .apply(CalcEvent::MemorySubtract);
        assert_eq!(state.memory(), 6.0);
    }

    #[test]
    fn test_memory_add_empty_buffer_counts_as_zero() {
        let state = CalcState::new().apply(CalcEvent::MemoryAdd);
        assert_eq!(state.memory(), 0.0);
        assert_eq!(state.display(), "M: 0");
    }

    #[test]
    fn test_memory_add_failure_follows_error_contract() {
        let state = type_str(CalcState::new(), "1/0").apply(CalcEvent::MemoryAdd);
        assert_eq!(state.display(), ERROR_DISPLAY);
        assert!(state.buffer().is_empty());
        assert_eq!(state.memory(), 0.0);
    }

    #[test]
    fn test_memory_recall_appends_value() {
        let state = type_str(CalcState::new(), "7")
            .apply(CalcEvent::MemoryAdd)
            .apply(CalcEvent::Char('1'))
            .apply(CalcEvent::MemoryRecall);
        assert_eq!(state.buffer(), "17");
    }

    #[test]
    fn test_memory_clear() {
        let state = type_str(CalcState::new(), "9")
            .apply(CalcEvent::MemoryAdd)
            .apply(CalcEvent::MemoryClear);
        assert_eq!(state.memory(), 0.0);
        assert_eq!(state.display(), "Memory cleared");
    }

    #[test]
    fn test_memory_persists_across_buffer_clears() {
        let state = type_str(CalcState::new(), "5")
            .apply(CalcEvent::MemoryAdd)
            .apply(CalcEvent::Char('1'))
            .apply(CalcEvent::Clear);
        assert_eq!(state.memory(), 5.0);
    }

    // ===== Full scenario =====

    #[test]
    fn test_scientific_workflow() {
        // sqrt(9) * 2, via the function key
        let state = CalcState::new()
            .apply(CalcEvent::Function(MathFunction::Sqrt))
            .apply(CalcEvent::Char('9'))
            .apply(CalcEvent::Char(')'))
            .apply(CalcEvent::Char('*'))
            .apply(CalcEvent::Char('2'))
            .apply(CalcEvent::Evaluate);
        assert_eq!(state.display(), "6");
        assert_eq!(state.history().last().unwrap().display(), "sqrt(9)*2 = 6");
    }
}

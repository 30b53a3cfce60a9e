//! Clickable keypads for the calculator TUI.
//!
//! Two grids are provided: the basic digit/operator pad that is always
//! visible, and the scientific pad (functions, constants, memory keys)
//! shown only in the full layout.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::operations::{Constant, MathFunction};
use crate::core::state::CalcEvent;
use crate::core::AngleMode;

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point
    Decimal,
    /// Insert an operator character
    Operator(char),
    /// Open parenthesis
    OpenParen,
    /// Close parenthesis
    CloseParen,
    /// Negate the buffer (the ± key)
    ToggleSign,
    /// Evaluate the expression
    Equals,
    /// Clear the input
    Clear,
    /// Clear the current entry
    ClearEntry,
    /// Delete the last character
    Backspace,
    /// Switch between radians and degrees
    ToggleAngle,
    /// Zero the memory register
    MemoryClear,
    /// Insert the memory register value
    MemoryRecall,
    /// Add the current expression to memory
    MemoryAdd,
    /// Subtract the current expression from memory
    MemorySubtract,
    /// Insert a function token
    Function(MathFunction),
    /// Insert a constant symbol
    Constant(Constant),
    /// Insert the last result
    Ans,
}

impl ButtonAction {
    /// Maps this action to the calculator event it triggers
    #[must_use]
    pub fn event(self) -> CalcEvent {
        match self {
            Self::Digit(d) => CalcEvent::Char(char::from(b'0' + d)),
            Self::Decimal => CalcEvent::Char('.'),
            Self::Operator(op) => CalcEvent::Char(op),
            Self::OpenParen => CalcEvent::Char('('),
            Self::CloseParen => CalcEvent::Char(')'),
            Self::ToggleSign => CalcEvent::ToggleSign,
            Self::Equals => CalcEvent::Evaluate,
            Self::Clear => CalcEvent::Clear,
            Self::ClearEntry => CalcEvent::ClearEntry,
            Self::Backspace => CalcEvent::Backspace,
            Self::ToggleAngle => CalcEvent::ToggleAngleMode,
            Self::MemoryClear => CalcEvent::MemoryClear,
            Self::MemoryRecall => CalcEvent::MemoryRecall,
            Self::MemoryAdd => CalcEvent::MemoryAdd,
            Self::MemorySubtract => CalcEvent::MemorySubtract,
            Self::Function(f) => CalcEvent::Function(f),
            Self::Constant(c) => CalcEvent::Constant(c),
            Self::Ans => CalcEvent::Ans,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text on the button
    pub label: &'static str,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl KeypadButton {
    /// Creates a button with the given label and action
    #[must_use]
    pub fn new(label: &'static str, action: ButtonAction) -> Self {
        Self {
            label,
            pressed: false,
            action,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::new(
            DIGIT_LABELS[usize::from(d.min(9))],
            ButtonAction::Digit(d.min(9)),
        )
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: char) -> Self {
        let label = match op {
            '+' => "+",
            '-' => "-",
            '*' => "*",
            '/' => "/",
            '%' => "%",
            _ => "^",
        };
        Self::new(label, ButtonAction::Operator(op))
    }

    /// Creates a function button labeled with the function name
    #[must_use]
    pub fn function(func: MathFunction) -> Self {
        let label = if func == MathFunction::Sqrt {
            "√"
        } else {
            func.name()
        };
        Self::new(label, ButtonAction::Function(func))
    }

    /// Creates a constant button
    #[must_use]
    pub fn constant(constant: Constant) -> Self {
        Self::new(constant.symbol(), ButtonAction::Constant(constant))
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// A rectangular grid of keypad buttons.
///
/// ```text
/// Basic               Scientific
/// [7] [8] [9] [/]     [MC] [MR] [M+] [M-]
/// [4] [5] [6] [*]     [CE] [C]  [⌫]  [Rad]
/// [1] [2] [3] [-]     [sin][cos][tan][√]
/// [0] [.] [±] [+]     [ln] [exp][%]  [Ans]
/// [(] [)] [=] [^]     [π]  [e]  [(]  [)]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
    title: &'static str,
}

impl Keypad {
    /// Creates the basic digit/operator keypad
    #[must_use]
    pub fn basic() -> Self {
        let buttons = vec![
            // Row 1: 7 8 9 /
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator('/'),
            // Row 2: 4 5 6 *
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator('*'),
            // Row 3: 1 2 3 -
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator('-'),
            // Row 4: 0 . ± +
            KeypadButton::digit(0),
            KeypadButton::new(".", ButtonAction::Decimal),
            KeypadButton::new("±", ButtonAction::ToggleSign),
            KeypadButton::operator('+'),
            // Row 5: ( ) = ^
            KeypadButton::new("(", ButtonAction::OpenParen),
            KeypadButton::new(")", ButtonAction::CloseParen),
            KeypadButton::new("=", ButtonAction::Equals),
            KeypadButton::operator('^'),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
            title: " Keypad ",
        }
    }

    /// Creates the scientific keypad.
    ///
    /// The angle-toggle button shows the mode that is currently active.
    #[must_use]
    pub fn scientific(angle_mode: AngleMode) -> Self {
        let buttons = vec![
            // Row 1: memory keys
            KeypadButton::new("MC", ButtonAction::MemoryClear),
            KeypadButton::new("MR", ButtonAction::MemoryRecall),
            KeypadButton::new("M+", ButtonAction::MemoryAdd),
            KeypadButton::new("M-", ButtonAction::MemorySubtract),
            // Row 2: editing and angle mode
            KeypadButton::new("CE", ButtonAction::ClearEntry),
            KeypadButton::new("C", ButtonAction::Clear),
            KeypadButton::new("⌫", ButtonAction::Backspace),
            KeypadButton::new(angle_mode.label(), ButtonAction::ToggleAngle),
            // Row 3: trig
            KeypadButton::function(MathFunction::Sin),
            KeypadButton::function(MathFunction::Cos),
            KeypadButton::function(MathFunction::Tan),
            KeypadButton::function(MathFunction::Sqrt),
            // Row 4: log/exp, modulo, Ans
            KeypadButton::function(MathFunction::Ln),
            KeypadButton::function(MathFunction::Exp),
            KeypadButton::operator('%'),
            KeypadButton::new("Ans", ButtonAction::Ans),
            // Row 5: constants and parens
            KeypadButton::constant(Constant::Pi),
            KeypadButton::constant(Constant::E),
            KeypadButton::new("(", ButtonAction::OpenParen),
            KeypadButton::new(")", ButtonAction::CloseParen),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
            title: " Scientific ",
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.keypad.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) => Style::default().fg(Color::White),
                    ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
                    ButtonAction::Equals => Style::default().fg(Color::Green),
                    ButtonAction::Clear | ButtonAction::ClearEntry => {
                        Style::default().fg(Color::Red)
                    }
                    ButtonAction::Function(_) | ButtonAction::Constant(_) => {
                        Style::default().fg(Color::Magenta)
                    }
                    _ => Style::default().fg(Color::Cyan),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadButton tests =====

    #[test]
    fn test_digit_button_creation() {
        for d in 0..=9 {
            let btn = KeypadButton::digit(d);
            assert_eq!(btn.label, DIGIT_LABELS[d as usize]);
            assert!(!btn.pressed);
            assert_eq!(btn.action, ButtonAction::Digit(d));
        }
    }

    #[test]
    fn test_operator_button_creation() {
        for op in ['+', '-', '*', '/', '%', '^'] {
            let btn = KeypadButton::operator(op);
            assert_eq!(btn.label.chars().next(), Some(op));
            assert_eq!(btn.action, ButtonAction::Operator(op));
        }
    }

    #[test]
    fn test_function_button_labels() {
        assert_eq!(KeypadButton::function(MathFunction::Sin).label, "sin");
        assert_eq!(KeypadButton::function(MathFunction::Sqrt).label, "√");
    }

    #[test]
    fn test_constant_button_labels() {
        assert_eq!(KeypadButton::constant(Constant::Pi).label, "π");
        assert_eq!(KeypadButton::constant(Constant::E).label, "e");
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::digit(5);
        assert!(!btn.pressed);
        btn.set_pressed(true);
        assert!(btn.pressed);
        btn.set_pressed(false);
        assert!(!btn.pressed);
    }

    // ===== ButtonAction event mapping tests =====

    #[test]
    fn test_digit_action_event() {
        for d in 0..=9u8 {
            let event = ButtonAction::Digit(d).event();
            assert_eq!(event, CalcEvent::Char(char::from(b'0' + d)));
        }
    }

    #[test]
    fn test_operator_action_event() {
        assert_eq!(
            ButtonAction::Operator('+').event(),
            CalcEvent::Char('+')
        );
        assert_eq!(ButtonAction::Decimal.event(), CalcEvent::Char('.'));
        assert_eq!(ButtonAction::OpenParen.event(), CalcEvent::Char('('));
        assert_eq!(ButtonAction::CloseParen.event(), CalcEvent::Char(')'));
    }

    #[test]
    fn test_control_action_events() {
        assert_eq!(ButtonAction::Equals.event(), CalcEvent::Evaluate);
        assert_eq!(ButtonAction::Clear.event(), CalcEvent::Clear);
        assert_eq!(ButtonAction::ClearEntry.event(), CalcEvent::ClearEntry);
        assert_eq!(ButtonAction::Backspace.event(), CalcEvent::Backspace);
        assert_eq!(ButtonAction::ToggleSign.event(), CalcEvent::ToggleSign);
        assert_eq!(ButtonAction::ToggleAngle.event(), CalcEvent::ToggleAngleMode);
    }

    #[test]
    fn test_memory_action_events() {
        assert_eq!(ButtonAction::MemoryClear.event(), CalcEvent::MemoryClear);
        assert_eq!(ButtonAction::MemoryRecall.event(), CalcEvent::MemoryRecall);
        assert_eq!(ButtonAction::MemoryAdd.event(), CalcEvent::MemoryAdd);
        assert_eq!(
            ButtonAction::MemorySubtract.event(),
            CalcEvent::MemorySubtract
        );
    }

    #[test]
    fn test_function_and_constant_action_events() {
        assert_eq!(
            ButtonAction::Function(MathFunction::Cos).event(),
            CalcEvent::Function(MathFunction::Cos)
        );
        assert_eq!(
            ButtonAction::Constant(Constant::Pi).event(),
            CalcEvent::Constant(Constant::Pi)
        );
        assert_eq!(ButtonAction::Ans.event(), CalcEvent::Ans);
    }

    // ===== Basic keypad layout tests =====

    #[test]
    fn test_basic_keypad_shape() {
        let keypad = Keypad::basic();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_basic_keypad_rows() {
        let keypad = Keypad::basic();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().label, "7");
        assert_eq!(keypad.get_button_at(0, 3).unwrap().label, "/");
        assert_eq!(keypad.get_button_at(3, 0).unwrap().label, "0");
        assert_eq!(keypad.get_button_at(3, 2).unwrap().label, "±");
        assert_eq!(keypad.get_button_at(4, 2).unwrap().label, "=");
        assert_eq!(keypad.get_button_at(4, 3).unwrap().label, "^");
    }

    #[test]
    fn test_basic_keypad_has_all_digits() {
        let keypad = Keypad::basic();
        for d in 0..=9 {
            assert!(
                keypad.find_button_by_label(DIGIT_LABELS[d]).is_some(),
                "Missing button for digit {d}"
            );
        }
    }

    // ===== Scientific keypad layout tests =====

    #[test]
    fn test_scientific_keypad_shape() {
        let keypad = Keypad::scientific(AngleMode::Radians);
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_scientific_keypad_memory_row() {
        let keypad = Keypad::scientific(AngleMode::Radians);
        assert_eq!(keypad.get_button_at(0, 0).unwrap().label, "MC");
        assert_eq!(keypad.get_button_at(0, 1).unwrap().label, "MR");
        assert_eq!(keypad.get_button_at(0, 2).unwrap().label, "M+");
        assert_eq!(keypad.get_button_at(0, 3).unwrap().label, "M-");
    }

    #[test]
    fn test_scientific_keypad_angle_label_tracks_mode() {
        let rad = Keypad::scientific(AngleMode::Radians);
        assert_eq!(rad.get_button_at(1, 3).unwrap().label, "Rad");
        assert_eq!(
            rad.get_button_at(1, 3).unwrap().action,
            ButtonAction::ToggleAngle
        );

        let deg = Keypad::scientific(AngleMode::Degrees);
        assert_eq!(deg.get_button_at(1, 3).unwrap().label, "Deg");
    }

    #[test]
    fn test_scientific_keypad_functions() {
        let keypad = Keypad::scientific(AngleMode::Radians);
        for label in ["sin", "cos", "tan", "ln", "exp", "√", "π", "e", "Ans"] {
            assert!(
                keypad.find_button_by_label(label).is_some(),
                "Missing button '{label}'"
            );
        }
    }

    // ===== Press/release tests =====

    #[test]
    fn test_keypad_press_button() {
        let mut keypad = Keypad::basic();
        keypad.press_button(0);
        assert!(keypad.get_button(0).unwrap().pressed);
        assert!(!keypad.get_button(1).unwrap().pressed);
    }

    #[test]
    fn test_keypad_release_all() {
        let mut keypad = Keypad::basic();
        keypad.press_button(0);
        keypad.press_button(5);
        keypad.release_all();
        for btn in keypad.buttons() {
            assert!(!btn.pressed);
        }
    }

    #[test]
    fn test_keypad_get_button_out_of_bounds() {
        let keypad = Keypad::basic();
        assert!(keypad.get_button(100).is_none());
        assert!(keypad.get_button_at(10, 10).is_none());
    }

    #[test]
    fn test_keypad_buttons_with_positions() {
        let keypad = Keypad::basic();
        let positions: Vec<_> = keypad.buttons_with_positions().collect();
        assert_eq!(positions.len(), 20);
        assert_eq!(positions[0].0, (0, 0));
        assert_eq!(positions[19].0, (4, 3));
    }

    // ===== Hit test tests =====

    #[test]
    fn test_keypad_hit_test_inside() {
        let keypad = Keypad::basic();
        let area = Rect::new(0, 0, 22, 12);
        assert!(keypad.hit_test(area, 10, 5).is_some());
    }

    #[test]
    fn test_keypad_hit_test_outside() {
        let keypad = Keypad::basic();
        let area = Rect::new(10, 10, 22, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 100, 100).is_none());
    }

    #[test]
    fn test_keypad_hit_test_border() {
        let keypad = Keypad::basic();
        let area = Rect::new(0, 0, 22, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
    }

    #[test]
    fn test_keypad_hit_test_first_button() {
        let keypad = Keypad::basic();
        let area = Rect::new(0, 0, 22, 12);
        // Just inside the border lands on button 0 ('7')
        let idx = keypad.hit_test(area, 1, 1).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label, "7");
    }

    // ===== Widget tests =====

    #[test]
    fn test_keypad_widget_render_basic() {
        let keypad = Keypad::basic();
        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad).render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[+]"));
    }

    #[test]
    fn test_keypad_widget_render_scientific() {
        let keypad = Keypad::scientific(AngleMode::Degrees);
        let area = Rect::new(0, 0, 26, 12);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad).render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Scientific"));
        assert!(content.contains("[MC]"));
        assert!(content.contains("[Deg]"));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::basic();
        let area = Rect::new(0, 0, 5, 5); // Too small
        let mut buf = Buffer::empty(area);

        // Should not panic, just render border
        KeypadWidget::new(&keypad).render(area, &mut buf);
    }

    // ===== Property-style checks =====

    #[test]
    fn prop_every_button_maps_to_an_event() {
        for keypad in [
            Keypad::basic(),
            Keypad::scientific(AngleMode::Radians),
            Keypad::scientific(AngleMode::Degrees),
        ] {
            for btn in keypad.buttons() {
                // Must not panic for any button
                let _ = btn.action.event();
            }
        }
    }

    #[test]
    fn prop_press_release_idempotent() {
        let mut keypad = Keypad::basic();
        keypad.press_button(5);
        keypad.press_button(5);
        assert!(keypad.get_button(5).unwrap().pressed);

        keypad.release_all();
        keypad.release_all();
        for btn in keypad.buttons() {
            assert!(!btn.pressed);
        }
    }
}

//! TUI rendering.
//!
//! Layout math is exposed through [`screen_areas`] so the event loop can
//! hit-test mouse clicks against the exact rectangles used for drawing.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use crate::core::state::{format_number, ERROR_DISPLAY};
use crate::core::LayoutMode;

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};

/// Main window title
pub const APP_TITLE: &str = " Scientific Calculator ";

/// Key hints shown in the status line
pub const STATUS_HINTS: &str = "Enter = | Tab layout | r rad/deg | Esc clear | Ctrl+C quit";

/// The screen rectangles for the current layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Display line area
    pub display: Rect,
    /// Basic keypad area
    pub basic_keypad: Rect,
    /// Scientific keypad area (full layout only)
    pub scientific_keypad: Option<Rect>,
    /// History panel area (full layout only)
    pub history: Option<Rect>,
    /// Status line area
    pub status: Rect,
}

/// Computes the screen areas for the given terminal area and layout mode.
///
/// The compact layout shows only the display, the basic keypad, and the
/// status line; the full layout adds the scientific keypad and history.
#[must_use]
pub fn screen_areas(area: Rect, layout: LayoutMode) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(12),   // Keypads and history
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let body = chunks[1];
    match layout {
        LayoutMode::Full => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(22), // Basic keypad
                    Constraint::Length(26), // Scientific keypad
                    Constraint::Min(20),    // History
                ])
                .split(body);
            ScreenAreas {
                display: chunks[0],
                basic_keypad: columns[0],
                scientific_keypad: Some(columns[1]),
                history: Some(columns[2]),
                status: chunks[2],
            }
        }
        LayoutMode::Compact => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(22), Constraint::Min(0)])
                .split(body);
            ScreenAreas {
                display: chunks[0],
                basic_keypad: columns[0],
                scientific_keypad: None,
                history: None,
                status: chunks[2],
            }
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let text = state.display();

        let style = if text == ERROR_DISPLAY {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(Span::styled(text, style)).block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        paragraph.render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let history = self.app.state().history();
        let visible = usize::from(area.height.saturating_sub(2));

        let items: Vec<ListItem> = history
            .iter_rev()
            .take(visible)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.clone(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(
                        entry.result.to_string(),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" History ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );

        list.render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", state.angle_mode().label()),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            Span::styled(
                format!(" M {} ", format_number(state.memory())),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("| {STATUS_HINTS}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = self.app.state().layout();
        let areas = screen_areas(area, layout);

        self.render_display(areas.display, buf);

        KeypadWidget::new(&Keypad::basic()).render(areas.basic_keypad, buf);

        if let Some(sci_area) = areas.scientific_keypad {
            let keypad = Keypad::scientific(self.app.state().angle_mode());
            KeypadWidget::new(&keypad).render(sci_area, buf);
        }

        if let Some(history_area) = areas.history {
            self.render_history(history_area, buf);
        }

        self.render_status(areas.status, buf);
    }
}

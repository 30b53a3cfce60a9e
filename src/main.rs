//! Scientific calculator TUI binary.

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sci_calc::tui::{render, screen_areas, CalculatorApp, InputHandler, Keypad};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Routes a mouse click to the keypad button under the cursor
fn handle_click(app: &mut CalculatorApp, area: ratatui::layout::Rect, x: u16, y: u16) {
    let areas = screen_areas(area, app.state().layout());

    let basic = Keypad::basic();
    if let Some(idx) = basic.hit_test(areas.basic_keypad, x, y) {
        if let Some(btn) = basic.get_button(idx) {
            app.press(btn.action);
        }
        return;
    }

    if let Some(sci_area) = areas.scientific_keypad {
        let scientific = Keypad::scientific(app.state().angle_mode());
        if let Some(idx) = scientific.hit_test(sci_area, x, y) {
            if let Some(btn) = scientific.get_button(idx) {
                app.press(btn.action);
            }
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.apply_key(input_handler.handle_key(key)),
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let area = terminal.size()?;
                    let area = ratatui::layout::Rect::new(0, 0, area.width, area.height);
                    handle_click(&mut app, area, mouse.column, mouse.row);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

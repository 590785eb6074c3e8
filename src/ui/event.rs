//! Terminal event handling.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::engine::{BinaryOp, Token};
use crate::ui::app::{App, InputMode};

/// Poll for and handle one terminal event.
/// Returns true if the app should quit.
pub fn handle_events(app: &mut App, tick_rate: Duration) -> Result<bool> {
    if event::poll(tick_rate)?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events (not release) - important for Windows
        if key.kind != KeyEventKind::Press {
            return Ok(app.should_quit());
        }

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match app.input_mode() {
            InputMode::Grid => handle_grid_mode(app, key),
            InputMode::Edit => handle_edit_mode(app, key),
        }
    }

    Ok(app.should_quit())
}

fn handle_grid_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('e') | KeyCode::Char('i') => app.enter_edit_mode(),
        KeyCode::Up => app.move_cursor(-1, 0),
        KeyCode::Down => app.move_cursor(1, 0),
        KeyCode::Left => app.move_cursor(0, -1),
        KeyCode::Right => app.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_selected(),
        // 's' presses the sqrt button, everything else maps through its
        // own button label.
        KeyCode::Char('s') => app.press(Token::Sqrt),
        KeyCode::Char(ch) => {
            if let Some(token) = token_for_char(ch) {
                app.press(token);
            }
        }
        _ => {}
    }
}

fn handle_edit_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.leave_edit_mode(),
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => app.edit_push(ch),
        _ => {}
    }
}

/// Map a typed character to the button it presses, if any.
fn token_for_char(ch: char) -> Option<Token> {
    match ch {
        '0'..='9' => Some(Token::Digit(ch as u8 - b'0')),
        '.' => Some(Token::Point),
        '+' => Some(Token::Op(BinaryOp::Add)),
        '-' => Some(Token::Op(BinaryOp::Sub)),
        '*' => Some(Token::Op(BinaryOp::Mul)),
        '/' => Some(Token::Op(BinaryOp::Div)),
        '=' => Some(Token::Equals),
        _ => None,
    }
}

//! Shell state: the engine plus grid cursor and input mode.
//!
//! The shell never computes anything itself; every state transition goes
//! through the engine, either as a button token or as a filtered edit of
//! the display text.

use tracing::debug;

use crate::engine::{BinaryOp, Engine, Token};

/// The button grid, same shape as the physical layout on screen.
pub const BUTTON_ROWS: [&[Token]; 4] = [
    &[
        Token::Digit(1),
        Token::Digit(2),
        Token::Digit(3),
        Token::Op(BinaryOp::Add),
        Token::Op(BinaryOp::Mul),
    ],
    &[
        Token::Digit(4),
        Token::Digit(5),
        Token::Digit(6),
        Token::Op(BinaryOp::Sub),
        Token::Op(BinaryOp::Div),
    ],
    &[Token::Digit(7), Token::Digit(8), Token::Digit(9), Token::Sqrt],
    &[Token::Digit(0), Token::Point, Token::Equals],
];

/// Horizontal weight of a button within its row; sqrt, zero and equals
/// are double width.
pub fn button_weight(token: Token) -> u16 {
    match token {
        Token::Sqrt | Token::Equals | Token::Digit(0) => 2,
        _ => 1,
    }
}

/// Which input surface currently receives keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate and press grid buttons.
    Grid,
    /// Keys edit the display text directly, filtered to numeric input.
    Edit,
}

/// The interactive application state.
pub struct App {
    engine: Engine,
    mode: InputMode,
    cursor: (usize, usize),
    should_quit: bool,
}

impl App {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            mode: InputMode::Grid,
            cursor: (0, 0),
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    /// Grid cursor as (row, column) into [`BUTTON_ROWS`].
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to free-text editing of the display.
    ///
    /// An error message is not editable numeric text, so entering edit
    /// mode over one clears the display first.
    pub fn enter_edit_mode(&mut self) {
        if self.engine.last_error().is_some() {
            self.engine.overwrite_display("");
        }
        self.mode = InputMode::Edit;
    }

    pub fn leave_edit_mode(&mut self) {
        self.mode = InputMode::Grid;
    }

    /// Move the grid cursor, clamped to the grid shape.
    pub fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        let (row, col) = self.cursor;
        let row = row
            .saturating_add_signed(row_delta)
            .min(BUTTON_ROWS.len() - 1);
        let col = col
            .saturating_add_signed(col_delta)
            .min(BUTTON_ROWS[row].len() - 1);
        self.cursor = (row, col);
    }

    /// The token under the grid cursor.
    pub fn selected_token(&self) -> Token {
        let (row, col) = self.cursor;
        BUTTON_ROWS[row][col]
    }

    /// Press the button under the grid cursor.
    pub fn press_selected(&mut self) {
        self.press(self.selected_token());
    }

    /// Forward one token to the engine.
    pub fn press(&mut self, token: Token) {
        debug!(token = %token, "button pressed");
        self.engine.press(token);
    }

    /// Append one character through the filtered edit path.
    pub fn edit_push(&mut self, ch: char) {
        let candidate = format!("{}{}", self.engine.display(), ch);
        self.engine.overwrite_display(&candidate);
    }

    /// Delete the last character through the filtered edit path.
    pub fn edit_backspace(&mut self) {
        let mut text = self.engine.display().to_string();
        if text.pop().is_some() {
            self.engine.overwrite_display(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_every_token_label() {
        let labels: Vec<&str> = BUTTON_ROWS
            .iter()
            .flat_map(|row| row.iter().map(Token::label))
            .collect();
        for expected in [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "sqrt", "=",
        ] {
            assert!(labels.contains(&expected), "missing button {expected}");
        }
        assert_eq!(labels.len(), 17);
    }

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut app = App::new(Engine::new());
        app.move_cursor(-1, -1);
        assert_eq!(app.cursor(), (0, 0));
        app.move_cursor(0, 10);
        assert_eq!(app.cursor(), (0, 4));
        // Moving down into a shorter row pulls the column in.
        app.move_cursor(3, 0);
        assert_eq!(app.cursor(), (3, 2));
        assert_eq!(app.selected_token(), Token::Equals);
    }

    #[test]
    fn test_press_selected_feeds_engine() {
        let mut app = App::new(Engine::new());
        app.move_cursor(0, 2);
        app.press_selected();
        assert_eq!(app.engine().display(), "3");
    }

    #[test]
    fn test_edit_push_is_filtered() {
        let mut app = App::new(Engine::new());
        app.enter_edit_mode();
        app.edit_push('1');
        app.edit_push('.');
        app.edit_push('.');
        app.edit_push('5');
        // Starts from "0", the second point is rejected.
        assert_eq!(app.engine().display(), "01.5");
    }

    #[test]
    fn test_edit_backspace() {
        let mut app = App::new(Engine::new());
        app.enter_edit_mode();
        app.edit_push('5');
        assert_eq!(app.engine().display(), "05");
        app.edit_backspace();
        app.edit_backspace();
        app.edit_backspace();
        assert_eq!(app.engine().display(), "");
    }

    #[test]
    fn test_edit_mode_clears_error_display() {
        let mut app = App::new(Engine::new());
        for label in ["6", "/", "0", "="] {
            app.press(Token::from_label(label).unwrap());
        }
        app.enter_edit_mode();
        assert_eq!(app.engine().display(), "");
        app.edit_push('7');
        assert_eq!(app.engine().display(), "7");
    }

    #[test]
    fn test_edit_clears_awaiting_operand() {
        // An edit replaces the operand in flight: 5 + then editing the
        // display to 12 and pressing equals folds 5 + 12.
        let mut app = App::new(Engine::new());
        for label in ["5", "+"] {
            app.press(Token::from_label(label).unwrap());
        }
        app.enter_edit_mode();
        app.edit_backspace();
        app.edit_push('1');
        app.edit_push('2');
        app.leave_edit_mode();
        app.press(Token::Equals);
        assert_eq!(app.engine().display(), "17");
    }
}

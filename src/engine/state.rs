//! The calculator state machine.
//!
//! One `Engine` value holds the display text, the accumulated operand, the
//! pending operator and the awaiting-operand flag. Every button press runs
//! through [`Engine::press`], a total function over [`Token`]: it never
//! panics and never performs I/O, and errors surface only as replacement
//! display text.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use super::error::CalcError;
use super::format::{format_value, truncate_display};
use super::token::{BinaryOp, Token};

/// Default maximum length of manually entered display text.
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 10;

lazy_static! {
    /// The shape every non-error display value has: digits, at most one
    /// decimal point, optional trailing digits. Also the filter for the
    /// free-text edit path, where the empty string is allowed.
    static ref NUMERIC_DISPLAY: Regex = Regex::new(r"^[0-9]*\.?[0-9]*$").unwrap();
}

/// The calculator engine.
///
/// Created once per session with a display of `"0"`; the presentation
/// shell owns the mutable value and feeds it one token at a time.
#[derive(Clone, Debug)]
pub struct Engine {
    display: String,
    operand: f64,
    operator: Option<BinaryOp>,
    awaiting_operand: bool,
    max_display_len: usize,
    last_error: Option<CalcError>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// A fresh session: display "0", no operand, no pending operator.
    pub fn new() -> Self {
        Self::with_max_display_len(DEFAULT_MAX_DISPLAY_LEN)
    }

    /// A fresh session with a configured maximum display length.
    pub fn with_max_display_len(max_display_len: usize) -> Self {
        Self {
            display: "0".to_string(),
            operand: 0.0,
            operator: None,
            awaiting_operand: false,
            max_display_len,
            last_error: None,
        }
    }

    /// The text currently shown, either a decimal literal or a fixed
    /// error message.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The error currently shown, if the display holds an error message.
    pub fn last_error(&self) -> Option<CalcError> {
        self.last_error
    }

    /// Handle one button press.
    pub fn press(&mut self, token: Token) {
        match token {
            Token::Digit(d) => self.enter_char(char::from(b'0' + d.min(9))),
            Token::Point => self.enter_char('.'),
            Token::Op(op) => {
                self.fold_pending();
                self.operator = Some(op);
                self.awaiting_operand = true;
                debug!(operator = op.label(), operand = self.operand, "operator pressed");
            }
            Token::Sqrt => {
                match self.display.parse::<f64>() {
                    Err(_) => self.set_error(CalcError::InvalidInput),
                    Ok(value) if value < 0.0 => self.set_error(CalcError::NegativeSqrt),
                    Ok(value) => {
                        let root = format_value(value.sqrt());
                        self.display = truncate_display(&root, self.max_display_len);
                        self.last_error = None;
                        debug!(display = %self.display, "square root");
                    }
                }
                // Square root never folds a pending operation; it is a
                // self-contained transform of the displayed value.
                self.operator = None;
                self.awaiting_operand = true;
            }
            Token::Equals => {
                self.fold_pending();
                self.operator = None;
                self.awaiting_operand = true;
            }
        }
    }

    /// Direct overwrite of the display, the free-text edit path.
    ///
    /// Accepts only text matching `[0-9]*\.?[0-9]*` (the empty string
    /// included) and clears the awaiting-operand flag without running any
    /// token rules. Returns whether the edit was accepted.
    pub fn overwrite_display(&mut self, text: &str) -> bool {
        if !NUMERIC_DISPLAY.is_match(text) {
            trace!(text, "rejected display edit");
            return false;
        }
        self.display = text.to_string();
        self.awaiting_operand = false;
        self.last_error = None;
        true
    }

    /// A digit or decimal point press.
    fn enter_char(&mut self, ch: char) {
        if self.awaiting_operand {
            self.display = if ch == '.' { "0.".to_string() } else { ch.to_string() };
            self.awaiting_operand = false;
            self.last_error = None;
            return;
        }
        if ch == '.' && self.display.contains('.') {
            trace!("second decimal point ignored");
            return;
        }
        if self.display.len() >= self.max_display_len {
            // Over-length input is silently dropped, never truncated.
            trace!(len = self.display.len(), "over-length input dropped");
            return;
        }
        if self.display == "0" && ch != '.' {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    /// The fold step: resolve the pending operation against the display.
    ///
    /// An unparseable display (an error message, or an emptied text field)
    /// makes this a no-op. Division by zero replaces the display with its
    /// error message and returns without touching the operand; the caller
    /// still installs its own operator afterwards, matching the original
    /// behavior of this asymmetric error path.
    fn fold_pending(&mut self) {
        let Ok(input) = self.display.parse::<f64>() else {
            trace!(display = %self.display, "fold skipped, display not numeric");
            return;
        };
        let Some(op) = self.operator else {
            // First operand of a new chain.
            self.operand = input;
            return;
        };
        let result = match op {
            BinaryOp::Add => self.operand + input,
            BinaryOp::Sub => self.operand - input,
            BinaryOp::Mul => self.operand * input,
            BinaryOp::Div => {
                if input == 0.0 {
                    self.set_error(CalcError::DivideByZero);
                    return;
                }
                self.operand / input
            }
        };
        debug!(
            lhs = self.operand,
            op = op.label(),
            rhs = input,
            result,
            "folded pending operation"
        );
        self.operand = result;
        self.display = format_value(result);
        self.last_error = None;
    }

    fn set_error(&mut self, error: CalcError) {
        debug!(%error, "calculation error");
        self.display = error.to_string();
        self.last_error = Some(error);
    }
}

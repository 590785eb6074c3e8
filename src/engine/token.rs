//! Button-press tokens.
//!
//! Every input the engine understands is one of these tagged variants;
//! there is no string matching inside the state machine and no silent
//! catch-all branch.

use std::fmt;

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// The button label for this operator.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// A single discrete user input unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A digit 0-9.
    Digit(u8),
    /// The decimal point.
    Point,
    /// A binary operator press.
    Op(BinaryOp),
    /// The square root button.
    Sqrt,
    /// The equals button.
    Equals,
}

impl Token {
    /// Map an external button label to a token.
    ///
    /// Returns `None` for labels outside the fixed set
    /// `{"0".."9", ".", "+", "-", "*", "/", "sqrt", "="}`; callers treat
    /// that as an explicit no-op.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "0" => Some(Self::Digit(0)),
            "1" => Some(Self::Digit(1)),
            "2" => Some(Self::Digit(2)),
            "3" => Some(Self::Digit(3)),
            "4" => Some(Self::Digit(4)),
            "5" => Some(Self::Digit(5)),
            "6" => Some(Self::Digit(6)),
            "7" => Some(Self::Digit(7)),
            "8" => Some(Self::Digit(8)),
            "9" => Some(Self::Digit(9)),
            "." => Some(Self::Point),
            "+" => Some(Self::Op(BinaryOp::Add)),
            "-" => Some(Self::Op(BinaryOp::Sub)),
            "*" => Some(Self::Op(BinaryOp::Mul)),
            "/" => Some(Self::Op(BinaryOp::Div)),
            "sqrt" => Some(Self::Sqrt),
            "=" => Some(Self::Equals),
            _ => None,
        }
    }

    /// The button label for this token, the inverse of [`Token::from_label`].
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(0) => "0",
            Self::Digit(1) => "1",
            Self::Digit(2) => "2",
            Self::Digit(3) => "3",
            Self::Digit(4) => "4",
            Self::Digit(5) => "5",
            Self::Digit(6) => "6",
            Self::Digit(7) => "7",
            Self::Digit(8) => "8",
            // Digit holds 0-9 only; anything else cannot be constructed
            // through from_label or the button grid.
            Self::Digit(_) => "9",
            Self::Point => ".",
            Self::Op(op) => op.label(),
            Self::Sqrt => "sqrt",
            Self::Equals => "=",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

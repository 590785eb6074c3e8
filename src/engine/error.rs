//! Calculation errors surfaced through the display.
//!
//! The engine never returns these from `press`; each one renders into the
//! display string exactly as its `Display` output.

use thiserror::Error;

/// An error state shown in place of a numeric display value.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The right-hand operand of a division was zero.
    #[error("Error cannot divide by 0")]
    DivideByZero,
    /// Square root was requested for a negative value.
    #[error("Error cannot sqrt - #")]
    NegativeSqrt,
    /// The display did not parse as a number before square root.
    #[error("Error Input Value")]
    InvalidInput,
}

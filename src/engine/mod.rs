//! The calculator engine.
//!
//! This module provides the arithmetic input/state machine:
//! - Token and operator variants for every button on the grid
//! - The `Engine` state machine interpreting one token at a time
//! - The fixed error messages shown in place of a numeric display

mod error;
mod format;
mod state;
mod token;

pub use error::CalcError;
pub use format::{format_value, truncate_display};
pub use state::{DEFAULT_MAX_DISPLAY_LEN, Engine};
pub use token::{BinaryOp, Token};

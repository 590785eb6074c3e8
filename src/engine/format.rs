//! Numeric display formatting.
//!
//! Computed results use the default `f64` decimal rendering with no fixed
//! precision or rounding; only square root output is shortened, by plain
//! character truncation.

/// Render a value the way the display shows computed results.
///
/// This is the standard `f64` to-string conversion: `8.0` renders as "8",
/// `1.0 / 3.0` as "0.3333333333333333". Non-finite values render as "NaN",
/// "inf" or "-inf" and are handled like any other unparseable display text
/// by later tokens.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Truncate a rendered number to at most `max_len` characters.
///
/// Character truncation, not numeric rounding: "1.4142135623730951"
/// becomes "1.41421356" at a limit of 10.
pub fn truncate_display(rendered: &str, max_len: usize) -> String {
    rendered.chars().take(max_len).collect()
}

//! Command line argument surface.

use clap::Parser;
use std::path::PathBuf;

/// A single-screen terminal calculator with a button grid.
#[derive(Debug, Parser)]
#[command(name = "calcpad", version, about)]
pub struct Cli {
    /// Evaluate a whitespace-separated token sequence (e.g. "5 + 3 =")
    /// and print the resulting display instead of starting the UI.
    #[arg(short, long, value_name = "TOKENS")]
    pub eval: Option<String>,

    /// Path to an alternate config file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured maximum display length.
    #[arg(long, value_name = "N")]
    pub max_display_length: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_flag() {
        let cli = Cli::parse_from(["calcpad", "--eval", "5 + 3 ="]);
        assert_eq!(cli.eval.as_deref(), Some("5 + 3 ="));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_max_display_length_override() {
        let cli = Cli::parse_from(["calcpad", "--max-display-length", "12"]);
        assert_eq!(cli.max_display_length, Some(12));
    }
}

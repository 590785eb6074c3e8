mod cli;
mod config;
mod engine;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::Cli;
use crate::config::Config;
use crate::engine::{Engine, Token};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(max) = cli.max_display_length {
        config.max_display_length = max;
    }

    let engine = Engine::with_max_display_len(config.max_display_length);

    if let Some(tokens) = cli.eval.as_deref() {
        println!("{}", eval_tokens(engine, tokens));
        return Ok(());
    }

    ui::run(engine, &config)
}

/// Feed a whitespace-separated token sequence through the engine and
/// return the final display. Unknown labels are skipped.
fn eval_tokens(mut engine: Engine, tokens: &str) -> String {
    for label in tokens.split_whitespace() {
        match Token::from_label(label) {
            Some(token) => engine.press(token),
            None => warn!(label, "unknown token skipped"),
        }
    }
    engine.display().to_string()
}

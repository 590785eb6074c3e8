//! The presentation shell.
//!
//! A thin terminal front end: it forwards key presses to the engine as
//! tokens (or filtered display edits) and re-renders the display after
//! every event. All calculator logic lives in [`crate::engine`].

pub mod app;
pub mod draw;
pub mod event;
pub mod theme;

pub use app::{App, InputMode};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::time::Duration;

use crate::config::Config;
use crate::engine::Engine;

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive calculator until the user quits.
pub fn run(engine: Engine, config: &Config) -> Result<()> {
    let mut session = TerminalSession::new()?;
    let mut app = App::new(engine);
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    loop {
        session.terminal.draw(|frame| draw::draw(frame, &app))?;

        if event::handle_events(&mut app, tick_rate)? {
            return Ok(());
        }
    }
}

//! Style constants for the shell.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const ERROR: Color = Color::LightRed;
pub const MUTED: Color = Color::DarkGray;

pub fn display() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn display_error() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

pub fn button() -> Style {
    Style::default()
}

pub fn button_selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn hint() -> Style {
    Style::default().fg(MUTED)
}

//! Screen rendering: the display field on top, the button grid below.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::app::{App, BUTTON_ROWS, InputMode, button_weight};
use crate::ui::theme;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),  // Display
            Constraint::Length(12), // Button grid
            Constraint::Length(1),  // Key hints
            Constraint::Min(0),
        ])
        .split(frame.area());

    draw_display(frame, app, chunks[0]);
    draw_grid(frame, app, chunks[1]);
    draw_hints(frame, app, chunks[2]);
}

fn draw_display(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode() == InputMode::Edit;

    let style = if app.engine().last_error().is_some() {
        theme::display_error()
    } else {
        theme::display()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(if editing { " calcpad (edit) " } else { " calcpad " });

    let paragraph = Paragraph::new(app.engine().display())
        .style(style)
        // Left-aligned while editing so the cursor sits after the text.
        .alignment(if editing { Alignment::Left } else { Alignment::Right })
        .block(block);
    frame.render_widget(paragraph, area);

    if editing {
        let len = app.engine().display().chars().count() as u16;
        let x = (area.x + 1 + len).min(area.x + area.width.saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_grid(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(area);

    let (cursor_row, cursor_col) = app.cursor();
    for (row_idx, row) in BUTTON_ROWS.iter().enumerate() {
        let widths: Vec<Constraint> = row
            .iter()
            .map(|token| Constraint::Fill(button_weight(*token)))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(rows[row_idx]);

        for (col_idx, token) in row.iter().enumerate() {
            let selected = app.input_mode() == InputMode::Grid
                && (row_idx, col_idx) == (cursor_row, cursor_col);
            let style = if selected {
                theme::button_selected()
            } else {
                theme::button()
            };
            let button = Paragraph::new(token.label())
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(button, cells[col_idx]);
        }
    }
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hint = match app.input_mode() {
        InputMode::Grid => "arrows move | enter press | e edit | q quit",
        InputMode::Edit => "type digits | backspace delete | esc done",
    };
    frame.render_widget(Paragraph::new(hint).style(theme::hint()), area);
}

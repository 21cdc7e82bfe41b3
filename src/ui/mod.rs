pub mod content;
pub mod widgets;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

const RESULT_CARD_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, app: &App) {
    // Width available for text is total width - 2 (for borders)
    let available_width = frame.area().width.saturating_sub(2).max(1) as usize;

    let input_lines = if app.input_buffer.is_empty() {
        1
    } else {
        app.input_buffer.chars().count().div_ceil(available_width)
    };

    // Clamp lines: Min 1, Max a quarter of the screen
    let max_lines = (frame.area().height as usize / 4).max(1);
    let actual_lines = input_lines.clamp(1, max_lines);

    #[allow(clippy::cast_possible_truncation)]
    let input_height = (actual_lines + 2) as u16;

    let result_height = if app.result.is_some() {
        RESULT_CARD_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(4),             // Hero
            Constraint::Length(input_height),  // Title form (dynamic height)
            Constraint::Length(1),             // Form status line
            Constraint::Length(result_height), // Result card
            Constraint::Min(0),                // Tips
            Constraint::Length(1),             // Bottom keymap bar
        ])
        .split(frame.area());

    widgets::render_header(frame, chunks[0]);
    widgets::render_hero(frame, chunks[1]);
    widgets::render_title_form(frame, app, chunks[2]);
    widgets::render_form_status(frame, app, chunks[3]);
    if let Some(result) = &app.result {
        widgets::render_result_card(frame, result, chunks[4]);
    }
    widgets::render_tips(frame, chunks[5]);
    widgets::render_bottom_bar(frame, app, chunks[6]);

    if let Some(toast) = app.latest_toast() {
        widgets::render_toast(frame, toast, frame.area());
    }

    if app.show_help {
        widgets::render_help_window(frame, frame.area());
    }
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::content::{self, TIPS};
use crate::app::App;
use crate::length::{char_count, LengthRating, IDEAL_MAX, IDEAL_MIN};
use crate::models::{TitleResult, Toast};

const fn rating_color(rating: LengthRating) -> Color {
    match rating {
        LengthRating::Empty => Color::DarkGray,
        LengthRating::Short => Color::Yellow,
        LengthRating::Ideal => Color::Green,
        LengthRating::Long => Color::Red,
    }
}

fn length_span(text: &str) -> Span<'static> {
    let count = char_count(text);
    let rating = LengthRating::of(count);
    let label = if rating == LengthRating::Empty {
        format!("{count} chars")
    } else {
        format!("{count} chars ({})", rating.label())
    };
    Span::styled(label, Style::default().fg(rating_color(rating)))
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;

    Rect {
        x: area.x + x,
        y: area.y + y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

pub fn render_header(frame: &mut Frame, area: Rect) {
    let brand = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(content::HEADER_TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(content::BRAND, brand),
        ]),
        Line::from(vec![
            Span::styled(content::HEADER_TAGLINE, Style::default().fg(Color::DarkGray)),
            Span::styled(content::BRAND, Style::default().fg(Color::Magenta)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

pub fn render_hero(frame: &mut Frame, area: Rect) {
    let hero = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                content::BRAND,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::styled(content::HERO_BADGE, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(
                content::HERO_HEADING_LEAD,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                content::HERO_HEADING_HIGHLIGHT,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                content::HERO_HEADING_TAIL,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            content::HERO_DESCRIPTION,
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(hero, area);
}

pub fn render_title_form(frame: &mut Frame, app: &App, area: Rect) {
    let (input_text, input_style) = if app.input_buffer.is_empty() {
        (content::INPUT_PLACEHOLDER, Style::default().fg(Color::Gray))
    } else {
        (
            app.input_buffer.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    let (title, border_color) = if app.is_loading {
        (" News title (optimizing...) ", Color::DarkGray)
    } else {
        (" News title ", Color::Cyan)
    };

    let input = Paragraph::new(input_text)
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from(length_span(&app.input_buffer)).right_aligned())
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(input, area);
}

pub fn render_form_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.is_loading {
        Line::from(Span::styled(
            "Optimizing title... (Esc to cancel)",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(": Generate SEO title  |  ideal {IDEAL_MIN}-{IDEAL_MAX} characters"),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

pub fn render_result_card(frame: &mut Frame, result: &TitleResult, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Optimized title  ", label),
            length_span(&result.rephrased),
        ]),
        Line::from(Span::styled(
            result.rephrased.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Original  ", label),
            length_span(&result.original),
        ]),
        Line::from(Span::styled(
            result.original.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Result ")
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(card, area);
}

pub fn render_tips(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (tip, column) in TIPS.iter().zip(columns.iter()) {
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                tip.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tip.description,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });

        frame.render_widget(tile, *column);
    }
}

pub fn render_toast(frame: &mut Frame, toast: &Toast, area: Rect) {
    let message_len = u16::try_from(toast.message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len.saturating_add(4).clamp(24, 60);
    // Long reasons wrap onto up to four lines
    let lines = message_len.div_ceil(width - 2).clamp(1, 4);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: lines + 2,
    }
    .intersection(area);

    let widget = Paragraph::new(toast.message.as_str())
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, toast_area);
    frame.render_widget(widget, toast_area);
}

pub fn render_help_window(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            "SonBarsa - Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("General:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Ctrl+H        - Show/hide this help"),
        Line::from("  Ctrl+Q        - Quit application"),
        Line::from("  Ctrl+C twice  - Quit application"),
        Line::from(""),
        Line::from(Span::styled("Title:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Enter         - Generate SEO title"),
        Line::from("  Esc           - Cancel a running request"),
        Line::from("  Ctrl+U        - Clear the input"),
        Line::from("  Typing        - Edit the title"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl+H or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    let popup_area = centered_popup(area, 50, 16);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help_paragraph, popup_area);
}

pub fn render_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.exit_pending {
        (
            "Press Ctrl+C again to exit, Esc to cancel",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Enter: Generate | Ctrl+U: Clear | Ctrl+H: Help | Ctrl+C: Quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    let bar = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style);

    frame.render_widget(bar, area);
}

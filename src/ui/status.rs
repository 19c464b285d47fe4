use crate::models::Mode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn help_line(mode: Mode) -> Line<'static> {
    let mut spans = match mode {
        Mode::List => vec![
            key_span("Type"),
            Span::from(" Search  "),
            key_span("Arrows"),
            Span::from(" Select  "),
            key_span("Enter"),
            Span::from(" Listen  "),
        ],
        Mode::Flashcard => vec![
            key_span("Space"),
            Span::from(" Flip  "),
            key_span("s"),
            Span::from(" Listen  "),
        ],
        Mode::Quiz => vec![
            key_span("1-4"),
            Span::from(" Answer  "),
            key_span("Arrows+Enter"),
            Span::from(" Choose  "),
        ],
    };
    spans.extend([
        key_span("Tab"),
        Span::from(" Mode  "),
        key_span("Esc/Ctrl+C"),
        Span::from(" Quit"),
    ]);
    Line::from(spans)
}

/// Shows the pending status message, or key help when there is none.
pub fn draw_status(f: &mut Frame, area: Rect, mode: Mode, status: Option<&str>) {
    let line = match status {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => help_line(mode),
    };

    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

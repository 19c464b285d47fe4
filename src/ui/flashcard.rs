use crate::flashcard::FlashcardState;
use crate::models::Dataset;
use crate::ui::layout::calculate_flashcard_chunks;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_flashcard(f: &mut Frame, area: Rect, dataset: &Dataset, card: &FlashcardState) {
    let layout = calculate_flashcard_chunks(area);

    let progress = Paragraph::new(card.progress_label(dataset.len()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(progress, layout.progress_area);

    let Some(entry) = card.current(dataset) else {
        return;
    };

    let mut text = Text::default();
    let title = if card.flipped {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            entry.term.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(Span::styled(
            entry.phonetic.as_str(),
            Style::default().fg(Color::Gray),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(entry.translation.as_str()));
        text.push_line(Line::from(""));
        text.push_line(Line::from(vec![
            Span::from("🔊 "),
            Span::styled(
                "s",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Listen"),
        ]));
        "Back"
    } else {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            format!("🖼  {}", entry.image_ref),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "(Space to flip)",
            Style::default().fg(Color::DarkGray),
        )));
        "Front"
    };

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, layout.card_area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("←/p", key_style),
        Span::from(" Previous  "),
        Span::styled("Space", key_style),
        Span::from(" Flip  "),
        Span::styled("→/n", key_style),
        Span::from(" Next"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(controls, layout.controls_area);
}

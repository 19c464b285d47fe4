use crate::models::Dataset;
use crate::quiz::{OptionMark, QuizState};
use crate::ui::layout::{calculate_quiz_chunks, option_cells};
use crate::utils::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, area: Rect, dataset: &Dataset, quiz: &QuizState) {
    let layout = calculate_quiz_chunks(area);
    let question = &quiz.question;

    let mut prompt = Text::default();
    prompt.push_line(Line::from(""));
    if let Some(entry) = dataset.get(question.correct) {
        prompt.push_line(Line::from(Span::styled(
            format!("🖼  {}", entry.image_ref),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    prompt.push_line(Line::from(""));
    prompt.push_line(Line::from(Span::styled(
        "Ctrl+O to view the picture",
        Style::default().fg(Color::DarkGray),
    )));
    let prompt = Paragraph::new(prompt)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("What is this sign?"),
        );
    f.render_widget(prompt, layout.prompt_area);

    for (position, cell) in option_cells(layout.options_area).into_iter().enumerate() {
        let Some(entry) = dataset.get(question.options[position]) else {
            continue;
        };
        let mark = quiz.mark(position);
        let highlighted = !quiz.is_answered() && position == quiz.highlighted;

        let style = match mark {
            OptionMark::Correct => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            OptionMark::Wrong => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            OptionMark::Disabled => Style::default().fg(Color::DarkGray),
            OptionMark::Open if highlighted => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            OptionMark::Open => Style::default(),
        };

        let suffix = match mark {
            OptionMark::Correct => " ✓",
            OptionMark::Wrong => " ✗",
            _ => "",
        };
        let label = truncate_to_width(
            &format!("{}. {}{}", position + 1, entry.term, suffix),
            cell.width.saturating_sub(2) as usize,
        );

        let option = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(option, cell);
    }

    let score = Paragraph::new(quiz.score_label())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(score, layout.score_area);
}

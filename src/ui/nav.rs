use crate::models::Mode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Mode tabs; exactly the active one is highlighted. Quiz is dimmed when the
/// dataset cannot support it.
pub fn draw_nav(f: &mut Frame, area: Rect, active: Mode, quiz_available: bool) {
    let titles: Vec<Line> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let label = format!("F{} {}", i + 1, mode.title());
            if *mode == Mode::Quiz && !quiz_available {
                Line::styled(label, Style::default().fg(Color::DarkGray))
            } else {
                Line::from(label)
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.position())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Picture Vocab"),
        );
    f.render_widget(tabs, area);
}

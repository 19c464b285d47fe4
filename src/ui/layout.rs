use crate::quiz::OPTION_COUNT;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width a list card needs before another column fits
pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 6;

pub struct AppLayout {
    pub nav_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

pub struct ListLayout {
    pub search_area: Rect,
    pub grid_area: Rect,
}

pub struct FlashcardLayout {
    pub progress_area: Rect,
    pub card_area: Rect,
    pub controls_area: Rect,
}

pub struct QuizLayout {
    pub prompt_area: Rect,
    pub options_area: Rect,
    pub score_area: Rect,
}

pub fn calculate_app_chunks(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    AppLayout {
        nav_area: chunks[0],
        body_area: chunks[1],
        status_area: chunks[2],
    }
}

pub fn calculate_list_chunks(area: Rect) -> ListLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    ListLayout {
        search_area: chunks[0],
        grid_area: chunks[1],
    }
}

pub fn calculate_flashcard_chunks(area: Rect) -> FlashcardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    FlashcardLayout {
        progress_area: chunks[0],
        card_area: chunks[1],
        controls_area: chunks[2],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    QuizLayout {
        prompt_area: chunks[0],
        options_area: chunks[1],
        score_area: chunks[2],
    }
}

/// Splits the options area into a 2x2 grid, in reading order.
pub fn option_cells(area: Rect) -> [Rect; OPTION_COUNT] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let split_row = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(row)
    };
    let top = split_row(rows[0]);
    let bottom = split_row(rows[1]);

    [top[0], top[1], bottom[0], bottom[1]]
}

pub fn grid_columns(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

pub fn grid_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

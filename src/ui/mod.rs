pub mod layout;
mod flashcard;
mod list;
mod nav;
mod quiz;
mod status;

pub use flashcard::draw_flashcard;
pub use layout::{calculate_app_chunks, calculate_list_chunks, calculate_quiz_chunks};
pub use list::draw_list;
pub use nav::draw_nav;
pub use quiz::draw_quiz;
pub use status::draw_status;

use crate::app::App;
use crate::models::ModeState;
use ratatui::Frame;

/// Redraws the whole screen: nav bar, the active mode's view, status line.
/// Without a dataset the body stays empty.
pub fn draw(f: &mut Frame, app: &mut App) {
    let layout = calculate_app_chunks(f.area());
    let mode = app.mode();

    draw_nav(f, layout.nav_area, mode, app.quiz_available());

    let (dataset, view) = app.view_parts();
    if let Some(dataset) = dataset {
        match view {
            ModeState::List(list) => draw_list(f, layout.body_area, dataset, list),
            ModeState::Flashcard(card) => draw_flashcard(f, layout.body_area, dataset, card),
            ModeState::Quiz(quiz) => draw_quiz(f, layout.body_area, dataset, quiz),
        }
    }

    draw_status(f, layout.status_area, mode, app.state.status.as_deref());
}

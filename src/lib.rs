pub mod app;
pub mod audio;
pub mod config;
pub mod dataset;
pub mod error;
pub mod flashcard;
pub mod list;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use app::App;
pub use audio::{Silent, Speak, Speaker};
pub use config::Config;
pub use dataset::{load_first, loaders_from_config, parse_dataset, FileLoader, HttpLoader, VocabLoader};
pub use error::{DatasetError, QuizError, SpeechError, VocabError};
pub use models::{AppState, Dataset, Mode, ModeState, VocabEntry};
pub use ui::draw;

use crate::audio::Speak;
use crate::config::Config;
use crate::error::DatasetError;
use crate::flashcard::FlashcardState;
use crate::list::ListState;
use crate::models::{AppState, Dataset, Mode, ModeState};
use crate::quiz::{MIN_QUIZ_ENTRIES, OPTION_COUNT, QuizState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Instant;

pub const CORRECT_CUE: &str = "Correct";
pub const WRONG_CUE: &str = "Wrong";

/// Mode controller: owns the dataset and the application state and routes
/// input to whichever mode is active.
pub struct App {
    dataset: Option<Dataset>,
    pub state: AppState,
    pub config: Config,
    speaker: Box<dyn Speak>,
    rng: StdRng,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        dataset: Result<Dataset, DatasetError>,
        config: Config,
        speaker: Box<dyn Speak>,
    ) -> Self {
        Self::with_rng(dataset, config, speaker, StdRng::from_entropy())
    }

    pub fn with_rng(
        dataset: Result<Dataset, DatasetError>,
        config: Config,
        speaker: Box<dyn Speak>,
        rng: StdRng,
    ) -> Self {
        let mut app = Self {
            dataset: None,
            state: AppState::default(),
            config,
            speaker,
            rng,
            should_quit: false,
        };

        match dataset {
            Ok(dataset) => {
                app.dataset = Some(dataset);
                app.set_mode(Mode::List);
            }
            Err(e) => {
                app.state.status = Some(format!("Could not load vocabulary: {}", e));
            }
        }

        app
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Split borrow for drawing: renderers read the dataset and may record
    /// layout details into the mode state.
    pub fn view_parts(&mut self) -> (Option<&Dataset>, &mut ModeState) {
        (self.dataset.as_ref(), &mut self.state.view)
    }

    pub fn quiz_available(&self) -> bool {
        self.dataset
            .as_ref()
            .is_some_and(|d| d.len() >= MIN_QUIZ_ENTRIES)
    }

    /// Switches mode and rebuilds that mode's state from scratch. Refuses
    /// Quiz when the dataset is too small to draw distinct options.
    pub fn set_mode(&mut self, mode: Mode) {
        let Some(dataset) = &self.dataset else {
            return;
        };

        let view = match mode {
            Mode::List => ModeState::List(ListState::default()),
            Mode::Flashcard => ModeState::Flashcard(FlashcardState::default()),
            Mode::Quiz => match QuizState::start(&mut self.rng, dataset.len()) {
                Ok(quiz) => ModeState::Quiz(quiz),
                Err(e) => {
                    tracing::warn!(error = %e, "quiz unavailable");
                    self.state.status = Some(e.to_string());
                    return;
                }
            },
        };

        tracing::info!(mode = mode.title(), "mode changed");
        self.state.view = view;
        self.state.status = None;
    }

    /// Steps through the modes with `step`, passing over Quiz while the
    /// dataset is too small for it.
    fn cycle_mode(&mut self, step: fn(Mode) -> Mode) {
        let mut mode = step(self.mode());
        if mode == Mode::Quiz && !self.quiz_available() {
            mode = step(mode);
        }
        self.set_mode(mode);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('o') => self.open_focused_image(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => return self.set_mode(Mode::List),
            KeyCode::F(2) => return self.set_mode(Mode::Flashcard),
            KeyCode::F(3) => return self.set_mode(Mode::Quiz),
            KeyCode::Tab => return self.cycle_mode(Mode::next),
            KeyCode::BackTab => return self.cycle_mode(Mode::previous),
            _ => {}
        }

        if self.dataset.is_none() {
            if key.code == KeyCode::Esc {
                self.should_quit = true;
            }
            return;
        }

        match self.mode() {
            Mode::List => self.handle_list_key(key),
            Mode::Flashcard => self.handle_flashcard_key(key),
            Mode::Quiz => self.handle_quiz_key(key, now),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let (Some(dataset), ModeState::List(list)) = (&self.dataset, &mut self.state.view) else {
            return;
        };
        let visible = list.visible(dataset).len();

        match key.code {
            KeyCode::Esc => {
                if !list.clear_filter() {
                    self.should_quit = true;
                }
            }
            KeyCode::Left => list.move_selection(-1, visible),
            KeyCode::Right => list.move_selection(1, visible),
            KeyCode::Up => list.move_row(false, visible),
            KeyCode::Down => list.move_row(true, visible),
            KeyCode::Backspace => {
                list.backspace();
            }
            KeyCode::Enter => {
                if let Some(entry) = list.selected_entry(dataset) {
                    self.speaker.speak(&entry.term);
                }
            }
            KeyCode::Char(c) => list.push_char(c),
            _ => {}
        }
    }

    fn handle_flashcard_key(&mut self, key: KeyEvent) {
        let (Some(dataset), ModeState::Flashcard(card)) = (&self.dataset, &mut self.state.view)
        else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Right | KeyCode::Char('n') => {
                card.next(dataset.len());
            }
            KeyCode::Left | KeyCode::Char('p') => {
                card.previous();
            }
            KeyCode::Char(' ') | KeyCode::Enter => card.flip(),
            KeyCode::Char('s') => {
                // the speaker control lives on the back face
                if card.flipped
                    && let Some(entry) = card.current(dataset)
                {
                    self.speaker.speak(&entry.term);
                }
            }
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent, now: Instant) {
        let ModeState::Quiz(quiz) = &mut self.state.view else {
            return;
        };

        let position = match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Left | KeyCode::Up => {
                quiz.move_highlight(-1);
                return;
            }
            KeyCode::Right | KeyCode::Down => {
                quiz.move_highlight(1);
                return;
            }
            KeyCode::Enter => quiz.highlighted,
            KeyCode::Char(c @ '1'..='4') => c as usize - '1' as usize,
            _ => return,
        };
        debug_assert!(position < OPTION_COUNT);

        if let Some(correct) = quiz.answer(position, now, self.config.quiz_delay) {
            tracing::info!(
                correct,
                score = quiz.score,
                attempts = quiz.attempts,
                "quiz answered"
            );
            self.speaker
                .speak(if correct { CORRECT_CUE } else { WRONG_CUE });
        }
    }

    /// Runs timed work: replaces an answered quiz question once its delay
    /// has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let (Some(dataset), ModeState::Quiz(quiz)) = (&self.dataset, &mut self.state.view) else {
            return;
        };

        if let Err(e) = quiz.advance_if_due(&mut self.rng, dataset.len(), now) {
            tracing::error!(error = %e, "could not generate next question");
            self.state.status = Some(e.to_string());
        }
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state.view {
            ModeState::Quiz(quiz) => quiz.next_question_at,
            _ => None,
        }
    }

    /// Image reference of the entry currently in focus, if any.
    pub fn focused_image(&self) -> Option<&str> {
        let dataset = self.dataset.as_ref()?;
        let entry = match &self.state.view {
            ModeState::List(list) => list.selected_entry(dataset)?,
            ModeState::Flashcard(card) => card.current(dataset)?,
            ModeState::Quiz(quiz) => dataset.get(quiz.question.correct)?,
        };
        Some(entry.image_ref.as_str())
    }

    fn open_focused_image(&mut self) {
        let Some(viewer) = self.config.image_viewer.clone() else {
            self.state.status = Some("Set VOCAB_IMAGE_VIEWER to open images".to_string());
            return;
        };
        let Some(image) = self.focused_image().map(str::to_string) else {
            return;
        };

        if let Err(e) = spawn_viewer(&viewer, &image) {
            tracing::warn!(viewer = %viewer, image = %image, error = %e, "could not open image");
            self.state.status = Some(format!("Could not open {}: {}", image, e));
        }
    }
}

/// Starts `viewer` on `image` and reaps the child on a background thread
/// once the viewer exits.
fn spawn_viewer(viewer: &str, image: &str) -> std::io::Result<thread::JoinHandle<()>> {
    let mut child = Command::new(viewer)
        .arg(image)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    thread::Builder::new()
        .name("picture-vocab::viewer".to_string())
        .spawn(move || {
            if let Err(e) = child.wait() {
                tracing::warn!(error = %e, "image viewer wait failed");
            }
        })
}

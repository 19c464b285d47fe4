use crate::error::DatasetError;
use crate::flashcard::FlashcardState;
use crate::list::ListState;
use crate::quiz::QuizState;

/// One vocabulary item: a picture, the word, how it sounds, what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub term: String,
    pub phonetic: String,
    pub translation: String,
    pub image_ref: String,
}

impl VocabEntry {
    pub fn new(
        term: impl Into<String>,
        phonetic: impl Into<String>,
        translation: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            phonetic: phonetic.into(),
            translation: translation.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// Ordered, non-empty, immutable sequence of entries.
#[derive(Debug, Clone)]
pub struct Dataset {
    entries: Vec<VocabEntry>,
}

impl Dataset {
    pub fn new(entries: Vec<VocabEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VocabEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabEntry> {
        self.entries.iter()
    }
}

impl std::ops::Index<usize> for Dataset {
    type Output = VocabEntry;

    fn index(&self, index: usize) -> &VocabEntry {
        &self.entries[index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Flashcard,
    Quiz,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::List, Mode::Flashcard, Mode::Quiz];

    pub fn title(self) -> &'static str {
        match self {
            Mode::List => "List",
            Mode::Flashcard => "Flashcards",
            Mode::Quiz => "Quiz",
        }
    }

    pub fn position(self) -> usize {
        match self {
            Mode::List => 0,
            Mode::Flashcard => 1,
            Mode::Quiz => 2,
        }
    }

    pub fn next(self) -> Mode {
        Mode::ALL[(self.position() + 1) % Mode::ALL.len()]
    }

    pub fn previous(self) -> Mode {
        Mode::ALL[(self.position() + Mode::ALL.len() - 1) % Mode::ALL.len()]
    }
}

/// Per-mode ephemeral state. Entering a mode builds a fresh variant, so
/// nothing leaks from one visit to the next.
#[derive(Debug)]
pub enum ModeState {
    List(ListState),
    Flashcard(FlashcardState),
    Quiz(QuizState),
}

impl ModeState {
    pub fn mode(&self) -> Mode {
        match self {
            ModeState::List(_) => Mode::List,
            ModeState::Flashcard(_) => Mode::Flashcard,
            ModeState::Quiz(_) => Mode::Quiz,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub view: ModeState,
    /// One-line message for the status bar
    pub status: Option<String>,
}

impl AppState {
    pub fn mode(&self) -> Mode {
        self.view.mode()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ModeState::List(ListState::default()),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(matches!(Dataset::new(Vec::new()), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_dataset_preserves_order() {
        let dataset = Dataset::new(vec![
            VocabEntry::new("Stop", "/stɒp/", "停", "img/stop.png"),
            VocabEntry::new("Yield", "/jiːld/", "让", "img/yield.png"),
            VocabEntry::new("Stop", "/stɒp/", "停", "img/stop.png"),
        ])
        .unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset[1].term, "Yield");
        assert_eq!(dataset[2], dataset[0]);
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(Mode::List.next(), Mode::Flashcard);
        assert_eq!(Mode::Quiz.next(), Mode::List);
        assert_eq!(Mode::List.previous(), Mode::Quiz);
        assert_eq!(Mode::Flashcard.previous(), Mode::List);
    }

    #[test]
    fn test_default_state_is_list() {
        let state = AppState::default();
        assert_eq!(state.mode(), Mode::List);
        assert!(state.status.is_none());
    }
}

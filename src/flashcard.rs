use crate::models::{Dataset, VocabEntry};

/// Position in the deck and which face is up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardState {
    pub index: usize,
    pub flipped: bool,
}

impl FlashcardState {
    /// Advances one card. Saturates at the last card; returns whether it moved.
    pub fn next(&mut self, total: usize) -> bool {
        if self.index < total.saturating_sub(1) {
            self.index += 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Goes back one card. Saturates at the first card.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn current<'a>(&self, dataset: &'a Dataset) -> Option<&'a VocabEntry> {
        dataset.get(self.index)
    }

    pub fn progress_label(&self, total: usize) -> String {
        format!("Card {} / {}", self.index + 1, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_saturates() {
        let mut state = FlashcardState::default();
        assert!(!state.previous());
        assert_eq!(state.index, 0);

        for _ in 0..4 {
            assert!(state.next(5));
        }
        assert_eq!(state.index, 4);

        assert!(!state.next(5));
        assert_eq!(state.index, 4);
    }

    #[test]
    fn test_single_card_deck() {
        let mut state = FlashcardState::default();
        assert!(!state.next(1));
        assert!(!state.previous());
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_flip_twice_returns_to_front() {
        let mut state = FlashcardState::default();
        state.flip();
        assert!(state.flipped);
        state.flip();
        assert!(!state.flipped);
    }

    #[test]
    fn test_changing_card_shows_front() {
        let mut state = FlashcardState::default();
        state.flip();
        state.next(3);
        assert!(!state.flipped);

        state.flip();
        state.previous();
        assert!(!state.flipped);
    }

    #[test]
    fn test_blocked_move_keeps_face() {
        let mut state = FlashcardState::default();
        state.flip();
        state.previous();
        assert!(state.flipped);
    }

    #[test]
    fn test_progress_label() {
        let state = FlashcardState {
            index: 2,
            flipped: false,
        };
        assert_eq!(state.progress_label(5), "Card 3 / 5");
    }
}

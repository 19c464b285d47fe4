use crate::error::QuizError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

pub const OPTION_COUNT: usize = 4;
pub const MIN_QUIZ_ENTRIES: usize = OPTION_COUNT;

/// One multiple-choice question. `options` holds dataset indices in display
/// order; exactly one of them equals `correct`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub correct: usize,
    pub options: [usize; OPTION_COUNT],
}

impl QuizQuestion {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, total: usize) -> Result<Self, QuizError> {
        if total < MIN_QUIZ_ENTRIES {
            return Err(QuizError::NotEnoughEntries {
                required: MIN_QUIZ_ENTRIES,
                found: total,
            });
        }

        let correct = rng.gen_range(0..total);

        let mut distractors = Vec::with_capacity(OPTION_COUNT - 1);
        while distractors.len() < OPTION_COUNT - 1 {
            let candidate = rng.gen_range(0..total);
            if candidate != correct && !distractors.contains(&candidate) {
                distractors.push(candidate);
            }
        }

        let mut options = [correct, distractors[0], distractors[1], distractors[2]];
        options.shuffle(rng);

        Ok(Self { correct, options })
    }

    /// Display slot holding the right answer.
    pub fn correct_position(&self) -> usize {
        self.options
            .iter()
            .position(|&i| i == self.correct)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// Still selectable
    Open,
    Correct,
    Wrong,
    /// Answered, neither chosen nor correct
    Disabled,
}

#[derive(Debug)]
pub struct QuizState {
    pub question: QuizQuestion,
    pub score: u32,
    pub attempts: u32,
    pub highlighted: usize,
    /// Slot picked for the current question
    pub chosen: Option<usize>,
    pub next_question_at: Option<Instant>,
}

impl QuizState {
    /// Fresh quiz with a zeroed score.
    pub fn start<R: Rng + ?Sized>(rng: &mut R, total: usize) -> Result<Self, QuizError> {
        Ok(Self {
            question: QuizQuestion::generate(rng, total)?,
            score: 0,
            attempts: 0,
            highlighted: 0,
            chosen: None,
            next_question_at: None,
        })
    }

    pub fn is_answered(&self) -> bool {
        self.chosen.is_some()
    }

    /// Records an answer for the slot at `position` and schedules the next
    /// question. Returns `Some(correct)` for the first answer and `None`
    /// for every later call or an out-of-range slot.
    pub fn answer(&mut self, position: usize, now: Instant, delay: Duration) -> Option<bool> {
        if self.is_answered() || position >= OPTION_COUNT {
            return None;
        }

        let correct = self.question.options[position] == self.question.correct;
        self.chosen = Some(position);
        self.highlighted = position;
        self.attempts += 1;
        if correct {
            self.score += 1;
        }
        self.next_question_at = Some(now + delay);
        Some(correct)
    }

    pub fn mark(&self, position: usize) -> OptionMark {
        let Some(chosen) = self.chosen else {
            return OptionMark::Open;
        };

        let is_correct_slot = position == self.question.correct_position();
        if is_correct_slot {
            OptionMark::Correct
        } else if position == chosen {
            OptionMark::Wrong
        } else {
            OptionMark::Disabled
        }
    }

    /// Replaces the question once its delay has passed. Score and attempts
    /// carry over. Returns whether a new question was generated.
    pub fn advance_if_due<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        total: usize,
        now: Instant,
    ) -> Result<bool, QuizError> {
        match self.next_question_at {
            Some(at) if now >= at => {
                self.question = QuizQuestion::generate(rng, total)?;
                self.chosen = None;
                self.highlighted = 0;
                self.next_question_at = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Moves the highlight, wrapping around the option grid.
    pub fn move_highlight(&mut self, delta: isize) {
        if self.is_answered() {
            return;
        }
        let len = OPTION_COUNT as isize;
        self.highlighted = (self.highlighted as isize + delta).rem_euclid(len) as usize;
    }

    pub fn score_label(&self) -> String {
        format!("Score: {} / {}", self.score, self.attempts)
    }
}

//! Guess records.

use crate::{Code, Feedback};

/// A guess together with the feedback it received.
///
/// Records are appended to a per-player history in chronological order.
/// Whether a record is a winning one is derived from its feedback, so it can
/// never disagree with the stored result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    guess: Code,
    result: Feedback,
}

impl GuessRecord {
    /// Creates a record.
    #[must_use]
    pub const fn new(guess: Code, result: Feedback) -> Self {
        Self { guess, result }
    }

    /// Returns the guessed code.
    #[must_use]
    pub const fn guess(&self) -> Code {
        self.guess
    }

    /// Returns the feedback the guess received.
    #[must_use]
    pub const fn result(&self) -> Feedback {
        self.result
    }

    /// Returns `true` if the guess hit the target (`A == 4`).
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.result.is_solved()
    }

    /// Returns a copy of this record with its feedback replaced.
    #[must_use]
    pub const fn with_result(self, result: Feedback) -> Self {
        Self {
            guess: self.guess,
            result,
        }
    }

    /// Returns `true` if `target` would have produced the recorded feedback.
    #[must_use]
    pub fn admits(&self, target: &Code) -> bool {
        Feedback::calculate(&self.guess, target) == self.result
    }
}

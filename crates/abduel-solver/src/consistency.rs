//! Feedback consistency checks.
//!
//! Two questions are answered here:
//!
//! - Could a human-supplied feedback value be true, given everything the
//!   computer has already deduced? If not, the human made a mistake somewhere.
//! - Could a drafted guess be the target, given the feedback the player has
//!   received so far? This powers the player-facing hint.

use abduel_core::{Code, Feedback, GuessRecord};

use crate::CandidateSet;

/// Outcome of checking feedback against a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Consistency {
    /// Some candidates survive the feedback.
    Consistent {
        /// Number of candidates that would remain.
        remaining: usize,
    },
    /// No candidate could have produced the feedback.
    Contradiction,
}

impl Consistency {
    /// Checks `feedback` for `guess` against `candidates`.
    #[must_use]
    pub fn check(guess: &Code, feedback: Feedback, candidates: &CandidateSet) -> Self {
        let remaining = candidates
            .iter()
            .filter(|candidate| Feedback::calculate(guess, candidate) == feedback)
            .count();
        if remaining == 0 {
            Self::Contradiction
        } else {
            Self::Consistent { remaining }
        }
    }
}

/// Returns `true` if `candidate` could still be the target given `history`.
///
/// The candidate set is recomputed from the full universe, so the answer does
/// not depend on any state other than `history`.
///
/// # Examples
///
/// ```
/// use abduel_core::{Feedback, GuessRecord};
/// use abduel_solver::is_guess_consistent_with_history;
///
/// let history = [GuessRecord::new("1234".parse()?, Feedback::new(1, 0)?)];
/// assert!(is_guess_consistent_with_history(&"1567".parse()?, &history));
/// assert!(!is_guess_consistent_with_history(&"5678".parse()?, &history));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn is_guess_consistent_with_history(candidate: &Code, history: &[GuessRecord]) -> bool {
    CandidateSet::recompute_from_history(history).contains(candidate)
}

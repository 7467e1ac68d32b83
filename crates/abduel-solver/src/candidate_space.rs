use abduel_core::{Code, Feedback, GuessRecord};

use crate::{CandidateSet, Consistency};

/// The computer's working knowledge about the opponent's secret.
///
/// `CandidateSpace` is the only place the candidate set is replaced. During
/// normal play it is narrowed one feedback at a time; when a past feedback is
/// corrected it is rebuilt from the full universe, so both paths produce the
/// same set for the same history.
///
/// # Examples
///
/// ```
/// use abduel_core::{Code, Feedback, GuessRecord};
/// use abduel_solver::CandidateSpace;
///
/// let guess: Code = "1234".parse()?;
/// let feedback = Feedback::new(0, 0)?;
///
/// let mut space = CandidateSpace::new();
/// assert!(space.check(&guess, feedback).is_consistent());
/// space.narrow(&guess, feedback);
///
/// let mut replayed = CandidateSpace::new();
/// replayed.replay(&[GuessRecord::new(guess, feedback)]);
/// assert_eq!(space.candidates(), replayed.candidates());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateSpace {
    candidates: CandidateSet,
}

impl CandidateSpace {
    /// Creates a space holding every legal code.
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: CandidateSet::all(),
        }
    }

    /// Returns the current candidate set.
    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Returns the number of codes that remain possible.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if no code is consistent with the recorded feedback.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Checks whether `feedback` for `guess` fits the current candidates,
    /// without changing them.
    #[must_use]
    pub fn check(&self, guess: &Code, feedback: Feedback) -> Consistency {
        Consistency::check(guess, feedback, &self.candidates)
    }

    /// Removes every candidate that would not answer `guess` with `feedback`.
    pub fn narrow(&mut self, guess: &Code, feedback: Feedback) {
        self.candidates.retain_feedback(guess, feedback);
    }

    /// Replaces the candidates with a fresh replay of `history`.
    pub fn replay(&mut self, history: &[GuessRecord]) {
        self.candidates = CandidateSet::recompute_from_history(history);
    }

    /// Restores the full universe.
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::all();
    }
}

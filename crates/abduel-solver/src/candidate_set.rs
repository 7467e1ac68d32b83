use std::slice;

use abduel_core::{Code, Feedback, GuessRecord};

/// A set of codes that may still be the hidden target.
///
/// Members are kept in ascending order, so two sets built from the same
/// history compare equal regardless of how they were produced.
///
/// # Examples
///
/// ```
/// use abduel_core::{Code, Feedback, GuessRecord};
/// use abduel_solver::CandidateSet;
///
/// let history = [
///     GuessRecord::new("0123".parse()?, Feedback::new(0, 1)?),
///     GuessRecord::new("4567".parse()?, Feedback::new(2, 0)?),
/// ];
///
/// let replayed = CandidateSet::recompute_from_history(&history);
/// let folded = history.iter().fold(CandidateSet::all(), |set, record| {
///     set.filter_by_feedback(&record.guess(), record.result())
/// });
/// assert_eq!(replayed, folded);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::all()
    }
}

impl CandidateSet {
    /// Returns the full universe of [`Code::COUNT`] legal codes.
    #[must_use]
    pub fn all() -> Self {
        Self {
            codes: Code::all().collect(),
        }
    }

    /// Returns a set with no members.
    #[must_use]
    pub const fn empty() -> Self {
        Self { codes: Vec::new() }
    }

    /// Returns the members for which scoring `guess` yields `feedback`.
    ///
    /// The result is always a subset of `self`. An empty result means the
    /// feedback contradicts what was observed before.
    #[must_use]
    pub fn filter_by_feedback(&self, guess: &Code, feedback: Feedback) -> Self {
        let mut filtered = self.clone();
        filtered.retain_feedback(guess, feedback);
        filtered
    }

    /// In-place variant of [`CandidateSet::filter_by_feedback`].
    pub fn retain_feedback(&mut self, guess: &Code, feedback: Feedback) {
        self.codes
            .retain(|candidate| Feedback::calculate(guess, candidate) == feedback);
    }

    /// Rebuilds a set from the full universe by applying `history` in order.
    #[must_use]
    pub fn recompute_from_history(history: &[GuessRecord]) -> Self {
        let mut set = Self::all();
        for record in history {
            set.retain_feedback(&record.guess(), record.result());
        }
        set
    }

    /// Returns `true` if `code` is a member.
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if no code remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the members in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, Code> {
        self.codes.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

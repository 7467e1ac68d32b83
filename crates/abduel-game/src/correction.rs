use abduel_core::{Code, DraftFeedback, Feedback, FeedbackError, FeedbackField, GuessRecord};

/// Feedback the computer refused because it contradicts earlier answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complaint {
    /// The computer's guess.
    pub guess: Code,
    /// The feedback that was rejected.
    pub feedback: Feedback,
}

/// An in-progress edit of one entry in the computer's history.
///
/// Created pre-filled with the stored result, so submitting it unchanged is a
/// plain replay from that round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionEditor {
    index: usize,
    guess: Code,
    draft: DraftFeedback,
}

impl CorrectionEditor {
    pub(crate) fn new(index: usize, record: &GuessRecord) -> Self {
        Self {
            index,
            guess: record.guess(),
            draft: DraftFeedback::from(record.result()),
        }
    }

    /// Returns the zero-based index of the entry being edited.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the guess whose feedback is being edited.
    #[must_use]
    pub const fn guess(&self) -> Code {
        self.guess
    }

    /// Returns the staged feedback values.
    #[must_use]
    pub const fn draft(&self) -> &DraftFeedback {
        &self.draft
    }

    pub(crate) fn set(&mut self, field: FeedbackField, value: u8) -> Result<(), FeedbackError> {
        self.draft.set(field, value)
    }
}

//! Localizable messages.
//!
//! The game never produces natural-language text. Every user-facing event is
//! a [`Message`], which the front end turns into text by looking up
//! [`Message::key`] in its translation table and substituting
//! [`Message::params`] into `{name}` placeholders.

use abduel_core::{Code, CodeError, Digit, Feedback, FeedbackError};

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MessageKind {
    /// Neutral progress information.
    Info,
    /// A favorable outcome for the human.
    Success,
    /// Something the human should look at before continuing.
    Warning,
    /// An action was rejected.
    Error,
}

/// A user-facing event, identified by a stable key plus named parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A new game has started.
    GameStarted,
    /// The human's guess was scored.
    GuessResult {
        /// The human's guess.
        guess: Code,
        /// Its score against the computer's secret.
        feedback: Feedback,
    },
    /// The human found the secret; the computer gets one last guess.
    FinalTurn {
        /// Number of guesses the human needed.
        rounds: u32,
    },
    /// The human won.
    HumanWins {
        /// Number of guesses the human needed.
        rounds: u32,
    },
    /// The computer won.
    ComputerWins {
        /// Number of guesses the computer needed.
        rounds: u32,
    },
    /// Both sides found the secret.
    Draw {
        /// Number of rounds played.
        rounds: u32,
    },
    /// The drafted guess fits every answer the human has received.
    HintConsistent {
        /// The checked guess.
        guess: Code,
        /// Hints left afterwards.
        remaining: u32,
    },
    /// The drafted guess contradicts an answer the human has received.
    HintInconsistent {
        /// The checked guess.
        guess: Code,
        /// Hints left afterwards.
        remaining: u32,
    },
    /// The hint budget is used up.
    NoHintsRemaining,
    /// A guess does not have exactly four characters.
    GuessWrongLength {
        /// Number of characters entered.
        len: usize,
    },
    /// A guess contains a non-digit character.
    GuessNotADigit {
        /// The offending character.
        ch: char,
    },
    /// A guess repeats a digit.
    GuessDuplicateDigit {
        /// The repeated digit.
        digit: Digit,
    },
    /// A guess still has empty slots.
    GuessIncomplete,
    /// The human already made this guess.
    GuessAlreadyTried {
        /// The repeated guess.
        guess: Code,
    },
    /// A feedback value is larger than 4.
    FeedbackOutOfRange {
        /// The rejected value.
        value: u8,
    },
    /// `A + B` is larger than 4.
    FeedbackSumTooLarge {
        /// The `A` count.
        a: u8,
        /// The `B` count.
        b: u8,
    },
    /// Feedback text could not be read.
    FeedbackMalformed,
    /// The feedback for the computer's guess contradicts earlier answers.
    Complaint {
        /// The computer's guess.
        guess: Code,
        /// The rejected feedback.
        feedback: Feedback,
    },
    /// No code is consistent with the recorded answers.
    NoPossibleNumbers,
    /// No game is in progress.
    NotStarted,
    /// The game has been decided.
    GameOver,
    /// The computer is waiting for feedback.
    NotHumanTurn,
    /// The human should be guessing.
    NotComputerTurn,
    /// There is nothing to correct.
    CorrectionUnavailable,
    /// The round to correct does not exist.
    RoundOutOfRange {
        /// The requested one-based round.
        round: usize,
        /// Number of recorded rounds.
        rounds: usize,
    },
}

impl Message {
    /// Returns the translation key of this message.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::GameStarted => "game.started",
            Self::GuessResult { .. } => "turn.guess_result",
            Self::FinalTurn { .. } => "turn.final_turn",
            Self::HumanWins { .. } => "result.human_wins",
            Self::ComputerWins { .. } => "result.computer_wins",
            Self::Draw { .. } => "result.draw",
            Self::HintConsistent { .. } => "hint.consistent",
            Self::HintInconsistent { .. } => "hint.inconsistent",
            Self::NoHintsRemaining => "hint.none_remaining",
            Self::GuessWrongLength { .. } => "guess.wrong_length",
            Self::GuessNotADigit { .. } => "guess.not_a_digit",
            Self::GuessDuplicateDigit { .. } => "guess.duplicate_digit",
            Self::GuessIncomplete => "guess.incomplete",
            Self::GuessAlreadyTried { .. } => "guess.already_tried",
            Self::FeedbackOutOfRange { .. } => "feedback.out_of_range",
            Self::FeedbackSumTooLarge { .. } => "feedback.sum_too_large",
            Self::FeedbackMalformed => "feedback.malformed",
            Self::Complaint { .. } => "complaint.inconsistent",
            Self::NoPossibleNumbers => "complaint.no_possible_numbers",
            Self::NotStarted => "state.not_started",
            Self::GameOver => "state.game_over",
            Self::NotHumanTurn => "state.not_human_turn",
            Self::NotComputerTurn => "state.not_computer_turn",
            Self::CorrectionUnavailable => "correction.unavailable",
            Self::RoundOutOfRange { .. } => "correction.round_out_of_range",
        }
    }

    /// Returns the named parameters of this message.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::GuessResult { guess, feedback } | Self::Complaint { guess, feedback } => vec![
                ("guess", guess.to_string()),
                ("a", feedback.a().to_string()),
                ("b", feedback.b().to_string()),
            ],
            Self::FinalTurn { rounds }
            | Self::HumanWins { rounds }
            | Self::ComputerWins { rounds }
            | Self::Draw { rounds } => vec![("rounds", rounds.to_string())],
            Self::HintConsistent { guess, remaining }
            | Self::HintInconsistent { guess, remaining } => vec![
                ("guess", guess.to_string()),
                ("remaining", remaining.to_string()),
            ],
            Self::GuessWrongLength { len } => vec![("len", len.to_string())],
            Self::GuessNotADigit { ch } => vec![("ch", ch.to_string())],
            Self::GuessDuplicateDigit { digit } => vec![("digit", digit.to_string())],
            Self::GuessAlreadyTried { guess } => vec![("guess", guess.to_string())],
            Self::FeedbackOutOfRange { value } => vec![("value", value.to_string())],
            Self::FeedbackSumTooLarge { a, b } => {
                vec![("a", a.to_string()), ("b", b.to_string())]
            }
            Self::RoundOutOfRange { round, rounds } => vec![
                ("round", round.to_string()),
                ("rounds", rounds.to_string()),
            ],
            Self::GameStarted
            | Self::NoHintsRemaining
            | Self::GuessIncomplete
            | Self::FeedbackMalformed
            | Self::NoPossibleNumbers
            | Self::NotStarted
            | Self::GameOver
            | Self::NotHumanTurn
            | Self::NotComputerTurn
            | Self::CorrectionUnavailable => vec![],
        }
    }

    /// Returns how this message should be presented.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::GameStarted
            | Self::GuessResult { .. }
            | Self::FinalTurn { .. }
            | Self::Draw { .. }
            | Self::HintConsistent { .. } => MessageKind::Info,
            Self::HumanWins { .. } => MessageKind::Success,
            Self::ComputerWins { .. }
            | Self::HintInconsistent { .. }
            | Self::Complaint { .. }
            | Self::NoPossibleNumbers => MessageKind::Warning,
            Self::NoHintsRemaining
            | Self::GuessWrongLength { .. }
            | Self::GuessNotADigit { .. }
            | Self::GuessDuplicateDigit { .. }
            | Self::GuessIncomplete
            | Self::GuessAlreadyTried { .. }
            | Self::FeedbackOutOfRange { .. }
            | Self::FeedbackSumTooLarge { .. }
            | Self::FeedbackMalformed
            | Self::NotStarted
            | Self::GameOver
            | Self::NotHumanTurn
            | Self::NotComputerTurn
            | Self::CorrectionUnavailable
            | Self::RoundOutOfRange { .. } => MessageKind::Error,
        }
    }
}

impl From<CodeError> for Message {
    fn from(error: CodeError) -> Self {
        match error {
            CodeError::WrongLength { len } => Self::GuessWrongLength { len },
            CodeError::NotADigit { ch } => Self::GuessNotADigit { ch },
            CodeError::DuplicateDigit { digit } => Self::GuessDuplicateDigit { digit },
            CodeError::Incomplete => Self::GuessIncomplete,
        }
    }
}

impl From<FeedbackError> for Message {
    fn from(error: FeedbackError) -> Self {
        match error {
            FeedbackError::OutOfRange { value } => Self::FeedbackOutOfRange { value },
            FeedbackError::SumTooLarge { a, b } => Self::FeedbackSumTooLarge { a, b },
            FeedbackError::Malformed => Self::FeedbackMalformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_match_placeholders() {
        let message = Message::GuessResult {
            guess: "1234".parse().unwrap(),
            feedback: Feedback::new(1, 2).unwrap(),
        };
        assert_eq!(message.key(), "turn.guess_result");
        assert_eq!(
            message.params(),
            vec![
                ("guess", "1234".to_owned()),
                ("a", "1".to_owned()),
                ("b", "2".to_owned()),
            ]
        );
        assert!(message.kind().is_info());
    }

    #[test]
    fn test_format_errors_map_to_messages() {
        assert_eq!(
            Message::from(CodeError::DuplicateDigit { digit: Digit::D7 }),
            Message::GuessDuplicateDigit { digit: Digit::D7 }
        );
        assert_eq!(
            Message::from(FeedbackError::SumTooLarge { a: 3, b: 2 }).params(),
            vec![("a", "3".to_owned()), ("b", "2".to_owned())]
        );
        assert!(Message::GuessIncomplete.kind().is_error());
        assert!(Message::NoPossibleNumbers.kind().is_warning());
    }
}

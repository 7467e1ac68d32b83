use abduel_core::{Code, CodeError, FeedbackError};

use crate::Message;

/// Errors returned by [`Game`](crate::Game) actions.
///
/// A failed action never changes the game state. Input format errors are also
/// surfaced as the game's current message; the remaining variants describe
/// actions that are not allowed in the current phase.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// No game has been started yet.
    #[display("no game in progress")]
    NotStarted,
    /// The game has already been decided.
    #[display("the game is over")]
    GameOver,
    /// The action needs the human's turn.
    #[display("it is not the human's turn")]
    NotHumanTurn,
    /// The action needs the computer's turn.
    #[display("it is not the computer's turn")]
    NotComputerTurn,
    /// The guess is not a legal code.
    #[display("invalid guess: {_0}")]
    #[from]
    InvalidGuess(CodeError),
    /// The guess has already been made in this game.
    #[display("{guess} has already been guessed")]
    GuessAlreadyTried {
        /// The repeated guess.
        guess: Code,
    },
    /// The feedback is not a legal `A`/`B` pair.
    #[display("invalid feedback: {_0}")]
    #[from]
    InvalidFeedback(FeedbackError),
    /// The computer has no guess awaiting feedback.
    #[display("the computer has no guess awaiting feedback")]
    NoPendingGuess,
    /// The hint budget is used up.
    #[display("no hints remaining")]
    HintsExhausted,
    /// History can only be corrected after a complaint or when no candidate remains.
    #[display("there is nothing to correct")]
    CorrectionUnavailable,
    /// No correction is being edited.
    #[display("no correction in progress")]
    NoCorrectionInProgress,
    /// The round to correct does not exist.
    #[display("round {index} is out of range (history has {len} entries)")]
    CorrectionIndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// Length of the computer's history.
        len: usize,
    },
}

impl GameError {
    /// Returns the localizable message describing this error.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Self::NotStarted => Message::NotStarted,
            Self::GameOver => Message::GameOver,
            Self::NotHumanTurn => Message::NotHumanTurn,
            Self::NotComputerTurn | Self::NoPendingGuess => Message::NotComputerTurn,
            Self::InvalidGuess(error) => Message::from(*error),
            Self::GuessAlreadyTried { guess } => Message::GuessAlreadyTried { guess: *guess },
            Self::InvalidFeedback(error) => Message::from(*error),
            Self::HintsExhausted => Message::NoHintsRemaining,
            Self::CorrectionUnavailable | Self::NoCorrectionInProgress => {
                Message::CorrectionUnavailable
            }
            Self::CorrectionIndexOutOfRange { index, len } => Message::RoundOutOfRange {
                round: index.saturating_add(1),
                rounds: *len,
            },
        }
    }
}

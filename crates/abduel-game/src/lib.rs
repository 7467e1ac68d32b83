//! Game session management for 1A2B.
//!
//! This crate drives a match between a human and the computer: turn order,
//! attempt counting, win and draw resolution, hints, and correction of
//! feedback the human gave earlier.
//!
//! # Overview
//!
//! - [`Game`]: the state machine, owning both histories and the computer's
//!   candidate space
//! - [`Phase`]: where the game stands
//! - [`Message`]: localizable description of the latest event
//! - [`MatchRecorder`]: receives a [`MatchRecord`] when a game ends
//! - [`GameConfig`]: per-game settings such as the hint budget
//!
//! # Examples
//!
//! ```
//! use abduel_game::{FeedbackOutcome, Game, GameConfig, MatchRecord, Phase, Winner};
//! use abduel_generator::{CodeGenerator, GameSeed};
//!
//! let generator = CodeGenerator::with_seed(GameSeed::from_phrase("lib"));
//! let mut game = Game::with_recorder(Vec::<MatchRecord>::new(), generator, GameConfig::default());
//! game.start_new_game_with_secret("2048".parse()?);
//!
//! game.update_draft_guess("2048")?;
//! assert!(game.submit_guess()?.is_solved());
//!
//! // The human was first, so the computer is owed one more guess.
//! assert_eq!(game.phase(), Phase::ComputerTurn);
//! assert!(game.is_final_turn());
//!
//! assert_eq!(game.submit_feedback()?, FeedbackOutcome::Finished(Winner::Human));
//! assert_eq!(game.recorder()[0].winner, Winner::Human);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    config::{DEFAULT_HINT_BUDGET, GameConfig},
    correction::{Complaint, CorrectionEditor},
    error::GameError,
    game::{FeedbackOutcome, Game},
    hint::HintBudget,
    message::{Message, MessageKind},
    phase::{Phase, Player},
    record::{MatchRecord, MatchRecorder, NoopRecorder, Winner},
};

mod config;
mod correction;
mod error;
mod game;
mod hint;
mod message;
mod phase;
mod record;

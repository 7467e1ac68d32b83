//! Deduction engine for the 1A2B game.
//!
//! The computer player treats the human's secret as unknown and keeps the set
//! of every code that is still consistent with the feedback it has received.
//! This crate provides that set and the checks built on it.
//!
//! - [`CandidateSet`]: an immutable-style set of codes with feedback filtering
//!   and full recomputation from a history
//! - [`CandidateSpace`]: the owner of the computer's current candidate set,
//!   which narrows it as feedback arrives and replays it after corrections
//! - [`consistency`]: checks for contradictory feedback and the player-facing
//!   hint check against the player's own history
//!
//! # Examples
//!
//! ```
//! use abduel_core::{Code, Feedback};
//! use abduel_solver::CandidateSet;
//!
//! let guess: Code = "1234".parse()?;
//! let remaining = CandidateSet::all().filter_by_feedback(&guess, Feedback::new(1, 0)?);
//!
//! assert!(remaining.contains(&"1567".parse()?));
//! assert!(!remaining.contains(&"5678".parse()?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod candidate_set;
pub mod candidate_space;
pub mod consistency;

pub use self::{
    candidate_set::CandidateSet,
    candidate_space::CandidateSpace,
    consistency::{Consistency, is_guess_consistent_with_history},
};

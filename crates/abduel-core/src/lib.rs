//! Core data structures for the 1A2B digit-guessing game.
//!
//! This crate provides the value types shared by the solver, the generator, and
//! the game state machine.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of decimal digits 0-9
//! - [`code`]: A four-digit number with pairwise distinct digits, used both as a
//!   secret and as a guess
//! - [`feedback`]: The `A`/`B` score of a guess against a target, and the
//!   function that computes it
//! - [`record`]: A guess together with the feedback it received
//! - [`draft`]: Partially entered input (digit slots and feedback values) that is
//!   validated only when converted to the canonical types
//!
//! # Examples
//!
//! ```
//! use abduel_core::{Code, Feedback};
//!
//! let guess: Code = "1324".parse()?;
//! let target: Code = "1234".parse()?;
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!((feedback.a(), feedback.b()), (2, 2));
//! assert_eq!(feedback.to_string(), "2A2B");
//! # Ok::<(), abduel_core::CodeError>(())
//! ```

pub mod code;
pub mod digit;
pub mod draft;
pub mod feedback;
pub mod record;

pub use self::{
    code::{CODE_LENGTH, Code, CodeError},
    digit::Digit,
    draft::{DraftCode, DraftFeedback, FeedbackField, Slot},
    feedback::{Feedback, FeedbackError},
    record::GuessRecord,
};

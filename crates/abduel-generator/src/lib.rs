//! Secret and guess generation for the 1A2B game.
//!
//! All randomness flows from a [`GameSeed`], so a game can be replayed exactly
//! by reusing its seed. The secret stream and the guess stream are derived
//! from the seed independently: drawing a new secret never shifts which
//! candidate the computer picks.
//!
//! # Examples
//!
//! ```
//! use abduel_generator::{CodeGenerator, GameSeed};
//! use abduel_solver::CandidateSet;
//!
//! let seed = GameSeed::from_phrase("demo");
//! let mut generator = CodeGenerator::with_seed(seed);
//!
//! let secret = generator.generate_secret();
//! let guess = generator.pick_guess(&CandidateSet::all());
//! assert!(guess.is_deduced());
//!
//! // The same seed reproduces the same sequence.
//! let mut again = CodeGenerator::with_seed(seed);
//! assert_eq!(again.generate_secret(), secret);
//! ```

pub use self::{
    generator::{CodeGenerator, PickedGuess},
    seed::{GameSeed, SeedParseError},
};

mod generator;
mod seed;

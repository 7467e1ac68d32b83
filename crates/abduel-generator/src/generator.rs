use abduel_core::{Code, Digit};
use abduel_solver::CandidateSet;
use rand::{
    SeedableRng as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use rand_pcg::Pcg64;

use crate::GameSeed;

const SECRET_STREAM: &str = "secret";
const GUESS_STREAM: &str = "guess";

/// A guess chosen by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PickedGuess {
    /// Drawn from a non-empty candidate set, so it may be the target.
    Deduced(Code),
    /// Drawn at random because no candidate was left; not a deduction.
    Fallback(Code),
}

impl PickedGuess {
    /// Returns the guessed code.
    #[must_use]
    pub const fn code(&self) -> Code {
        match self {
            Self::Deduced(code) | Self::Fallback(code) => *code,
        }
    }
}

/// Produces secrets and computer guesses from a seeded generator.
///
/// The type is deterministic for a given [`GameSeed`]: two generators created
/// with the same seed yield the same secrets and the same picks for the same
/// candidate sets.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    seed: GameSeed,
    secret_rng: Pcg64,
    guess_rng: Pcg64,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator {
    /// Creates a generator with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(GameSeed::random())
    }

    /// Creates a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self {
            seed,
            secret_rng: Pcg64::from_seed(*seed.derive(SECRET_STREAM).as_bytes()),
            guess_rng: Pcg64::from_seed(*seed.derive(GUESS_STREAM).as_bytes()),
        }
    }

    /// Returns the seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> GameSeed {
        self.seed
    }

    /// Draws a secret uniformly from all legal codes.
    ///
    /// Digits are taken without replacement from a shuffled `0..=9`, which
    /// makes every one of the [`Code::COUNT`] codes equally likely.
    pub fn generate_secret(&mut self) -> Code {
        Self::draw_code(&mut self.secret_rng)
    }

    /// Picks the computer's next guess uniformly from `candidates`.
    ///
    /// When `candidates` is empty a fresh random code is returned as
    /// [`PickedGuess::Fallback`], so a syntactically legal guess is always
    /// available even after contradictory feedback.
    pub fn pick_guess(&mut self, candidates: &CandidateSet) -> PickedGuess {
        match candidates.as_slice().choose(&mut self.guess_rng) {
            Some(code) => PickedGuess::Deduced(*code),
            None => PickedGuess::Fallback(Self::draw_code(&mut self.guess_rng)),
        }
    }

    fn draw_code(rng: &mut Pcg64) -> Code {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        let [d0, d1, d2, d3, ..] = digits;
        Code::new([d0, d1, d2, d3]).expect("shuffled digits are distinct")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use abduel_core::Feedback;
    use proptest::prelude::*;

    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed = GameSeed::from_phrase("repeatable");
        let mut a = CodeGenerator::with_seed(seed);
        let mut b = CodeGenerator::with_seed(seed);
        let candidates = CandidateSet::all();
        for _ in 0..20 {
            assert_eq!(a.generate_secret(), b.generate_secret());
            assert_eq!(a.pick_guess(&candidates), b.pick_guess(&candidates));
        }
        assert_eq!(a.seed(), seed);
    }

    #[test]
    fn test_secret_stream_independent_of_guess_stream() {
        let seed = GameSeed::from_phrase("streams");
        let mut a = CodeGenerator::with_seed(seed);
        let mut b = CodeGenerator::with_seed(seed);
        let candidates = CandidateSet::all();

        let _ = a.pick_guess(&candidates);
        let _ = a.pick_guess(&candidates);
        assert_eq!(a.generate_secret(), b.generate_secret());
    }

    #[test]
    fn test_secrets_cover_many_codes() {
        let mut generator = CodeGenerator::with_seed(GameSeed::from_phrase("coverage"));
        let secrets: HashSet<_> = (0..500).map(|_| generator.generate_secret()).collect();
        // 500 uniform draws from 5040 codes are overwhelmingly likely to be mostly distinct.
        assert!(secrets.len() > 400);

        let leading_zero = secrets
            .iter()
            .any(|secret| secret.digits()[0] == Digit::D0);
        assert!(leading_zero);
    }

    #[test]
    fn test_pick_from_single_candidate() {
        let target = code("3816");
        let candidates = CandidateSet::all().filter_by_feedback(&target, Feedback::SOLVED);
        let mut generator = CodeGenerator::with_seed(GameSeed::from_phrase("single"));
        assert_eq!(
            generator.pick_guess(&candidates),
            PickedGuess::Deduced(target)
        );
    }

    #[test]
    fn test_pick_from_empty_falls_back() {
        let mut generator = CodeGenerator::with_seed(GameSeed::from_phrase("empty"));
        let picked = generator.pick_guess(&CandidateSet::empty());
        assert!(picked.is_fallback());
        assert_eq!(picked.code().to_string().len(), 4);
    }

    proptest! {
        #[test]
        fn test_pick_is_member(bytes in proptest::array::uniform32(any::<u8>()), guess in 0u16..10_000) {
            let Some(guess) = Code::from_number(guess) else {
                return Ok(());
            };
            let candidates = CandidateSet::all().filter_by_feedback(&guess, Feedback::new(1, 1).unwrap());
            let mut generator = CodeGenerator::with_seed(GameSeed::from_bytes(bytes));
            let picked = generator.pick_guess(&candidates);
            prop_assert!(picked.is_deduced());
            prop_assert!(candidates.contains(&picked.code()));
        }
    }
}

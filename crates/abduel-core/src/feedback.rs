//! Feedback calculation for guesses.
//!
//! A guess is scored against a target with two counts:
//!
//! - `A`: digits correct in both value and position
//! - `B`: digits present in the target but at a different position

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{CODE_LENGTH, Code, Digit};

/// Largest value either count may take.
const MAX_COUNT: u8 = 4;

/// Errors returned when a feedback pair is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FeedbackError {
    /// A single count is larger than 4.
    #[display("feedback value {value} is out of range 0-4")]
    OutOfRange {
        /// The rejected value.
        value: u8,
    },
    /// `A + B` is larger than 4.
    #[display("{a}A{b}B exceeds 4 digits in total")]
    SumTooLarge {
        /// The `A` count.
        a: u8,
        /// The `B` count.
        b: u8,
    },
    /// The text is not of the form `xAyB`.
    #[display("feedback must look like 1A2B")]
    Malformed,
}

/// The result of scoring a guess against a target.
///
/// Both counts are in `0..=4` and their sum never exceeds 4. A feedback value
/// either comes from [`Feedback::calculate`] or from a human speaking for a
/// target the program cannot see, in which case it is validated by
/// [`Feedback::new`] but may still be impossible (for example `3A1B`).
///
/// # Examples
///
/// ```
/// use abduel_core::{Code, Feedback};
///
/// let guess: Code = "1234".parse()?;
/// let target: Code = "4321".parse()?;
/// assert_eq!(Feedback::calculate(&guess, &target), Feedback::new(0, 4)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    a: u8,
    b: u8,
}

impl Feedback {
    /// The feedback for a guess that equals the target.
    pub const SOLVED: Self = Self { a: 4, b: 0 };

    /// Creates a feedback pair after range checks.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::OutOfRange`] if either count exceeds 4 and
    /// [`FeedbackError::SumTooLarge`] if `a + b` exceeds 4.
    pub fn new(a: u8, b: u8) -> Result<Self, FeedbackError> {
        for value in [a, b] {
            if value > MAX_COUNT {
                return Err(FeedbackError::OutOfRange { value });
            }
        }
        if a + b > MAX_COUNT {
            return Err(FeedbackError::SumTooLarge { a, b });
        }
        Ok(Self { a, b })
    }

    /// Scores `guess` against `target`.
    ///
    /// `A == 4` holds exactly when the two codes are equal.
    #[must_use]
    pub fn calculate(guess: &Code, target: &Code) -> Self {
        Self::score_digits(guess.digits(), target.digits())
    }

    /// Scores two arbitrary digit arrays, tolerating repeated digits.
    ///
    /// Exact matches are counted first. `B` is then the per-digit multiset
    /// intersection of the remaining positions, so a repeated digit is never
    /// counted twice.
    ///
    /// ```
    /// use abduel_core::{Digit, Feedback};
    ///
    /// let guess = [Digit::D1, Digit::D1, Digit::D2, Digit::D3];
    /// let target = [Digit::D4, Digit::D1, Digit::D1, Digit::D5];
    /// let feedback = Feedback::score_digits(&guess, &target);
    /// assert_eq!((feedback.a(), feedback.b()), (1, 1));
    /// ```
    #[must_use]
    pub fn score_digits(guess: &[Digit; CODE_LENGTH], target: &[Digit; CODE_LENGTH]) -> Self {
        let mut a = 0;
        let mut guess_remaining = [0u8; 10];
        let mut target_remaining = [0u8; 10];

        for (g, t) in guess.iter().zip(target) {
            if g == t {
                a += 1;
            } else {
                guess_remaining[g.index()] += 1;
                target_remaining[t.index()] += 1;
            }
        }

        let b = guess_remaining
            .iter()
            .zip(&target_remaining)
            .map(|(g, t)| *g.min(t))
            .sum();

        Self { a, b }
    }

    /// Returns the count of digits correct in value and position.
    #[must_use]
    pub const fn a(&self) -> u8 {
        self.a
    }

    /// Returns the count of digits correct in value but not position.
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Returns `true` if the guess matched the target exactly.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.a == MAX_COUNT
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.a, self.b)
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parses `xAyB` (case-insensitive), for example `1A2B` or `0a4b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        let (a, rest) = s.split_once('A').ok_or(FeedbackError::Malformed)?;
        let b = rest.strip_suffix('B').ok_or(FeedbackError::Malformed)?;
        let a = a.parse().map_err(|_| FeedbackError::Malformed)?;
        let b = b.parse().map_err(|_| FeedbackError::Malformed)?;
        Self::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn feedback(a: u8, b: u8) -> Feedback {
        Feedback::new(a, b).unwrap()
    }

    fn any_code() -> impl Strategy<Value = Code> {
        proptest::sample::select(Code::all().collect::<Vec<_>>())
    }

    #[test]
    fn test_known_scores() {
        assert_eq!(
            Feedback::calculate(&code("1234"), &code("1234")),
            feedback(4, 0)
        );
        assert_eq!(
            Feedback::calculate(&code("1234"), &code("5678")),
            feedback(0, 0)
        );
        assert_eq!(
            Feedback::calculate(&code("1234"), &code("4321")),
            feedback(0, 4)
        );
        assert_eq!(
            Feedback::calculate(&code("1234"), &code("1324")),
            feedback(2, 2)
        );
        assert_eq!(
            Feedback::calculate(&code("1234"), &code("1567")),
            feedback(1, 0)
        );
        assert_eq!(
            Feedback::calculate(&code("0123"), &code("3210")),
            feedback(0, 4)
        );
    }

    #[test]
    fn test_score_digits_counts_duplicates_once() {
        let guess = [Digit::D1, Digit::D1, Digit::D1, Digit::D1];
        let target = [Digit::D1, Digit::D2, Digit::D3, Digit::D4];
        assert_eq!(Feedback::score_digits(&guess, &target), feedback(1, 0));

        let guess = [Digit::D2, Digit::D2, Digit::D5, Digit::D5];
        let target = [Digit::D5, Digit::D5, Digit::D2, Digit::D2];
        assert_eq!(Feedback::score_digits(&guess, &target), feedback(0, 4));
    }

    #[test]
    fn test_new_validates_range() {
        assert!(Feedback::new(0, 0).is_ok());
        assert!(Feedback::new(4, 0).is_ok());
        assert!(Feedback::new(3, 1).is_ok());
        assert_eq!(
            Feedback::new(5, 0),
            Err(FeedbackError::OutOfRange { value: 5 })
        );
        assert_eq!(
            Feedback::new(0, 9),
            Err(FeedbackError::OutOfRange { value: 9 })
        );
        assert_eq!(
            Feedback::new(3, 2),
            Err(FeedbackError::SumTooLarge { a: 3, b: 2 })
        );
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(feedback(1, 2).to_string(), "1A2B");
        assert_eq!("1A2B".parse::<Feedback>(), Ok(feedback(1, 2)));
        assert_eq!(" 0a4b ".parse::<Feedback>(), Ok(feedback(0, 4)));
        assert_eq!("1A".parse::<Feedback>(), Err(FeedbackError::Malformed));
        assert_eq!("AB".parse::<Feedback>(), Err(FeedbackError::Malformed));
        assert_eq!(
            "3A3B".parse::<Feedback>(),
            Err(FeedbackError::SumTooLarge { a: 3, b: 3 })
        );
    }

    #[test]
    fn test_is_solved() {
        assert!(Feedback::SOLVED.is_solved());
        assert!(!feedback(3, 0).is_solved());
    }

    proptest! {
        #[test]
        fn test_solved_iff_equal(guess in any_code(), target in any_code()) {
            let feedback = Feedback::calculate(&guess, &target);
            prop_assert_eq!(feedback.is_solved(), guess == target);
        }

        #[test]
        fn test_counts_within_bounds(guess in any_code(), target in any_code()) {
            let feedback = Feedback::calculate(&guess, &target);
            prop_assert!(feedback.a() + feedback.b() <= 4);
            prop_assert!(Feedback::new(feedback.a(), feedback.b()).is_ok());
        }

        #[test]
        fn test_self_feedback_is_solved(code in any_code()) {
            prop_assert_eq!(Feedback::calculate(&code, &code), Feedback::SOLVED);
        }

        #[test]
        fn test_raw_digits_stay_within_bounds(
            guess in proptest::array::uniform4(0u8..10),
            target in proptest::array::uniform4(0u8..10),
        ) {
            let guess = guess.map(Digit::from_value);
            let target = target.map(Digit::from_value);
            let feedback = Feedback::score_digits(&guess, &target);
            prop_assert!(feedback.a() + feedback.b() <= 4);
        }
    }
}

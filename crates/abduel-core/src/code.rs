//! Four-digit codes with pairwise distinct digits.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Digit;

/// Number of digits in a code.
pub const CODE_LENGTH: usize = 4;

/// Errors returned when text or digits do not form a legal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CodeError {
    /// The input does not contain exactly four characters.
    #[display("expected 4 digits, got {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contains a character that is not a decimal digit.
    #[display("{ch:?} is not a digit")]
    NotADigit {
        /// The offending character.
        ch: char,
    },
    /// The same digit appears more than once.
    #[display("digit {digit} appears more than once")]
    DuplicateDigit {
        /// The repeated digit.
        digit: Digit,
    },
    /// A draft still has empty slots.
    #[display("not all 4 digits have been entered")]
    Incomplete,
}

/// A four-digit number whose digits are pairwise distinct.
///
/// This is the representation of both a secret and a guess. The invariant is
/// enforced at construction, so every `Code` value is legal. There are exactly
/// [`Code::COUNT`] distinct codes (10 × 9 × 8 × 7).
///
/// # Examples
///
/// ```
/// use abduel_core::{Code, CodeError, Digit};
///
/// let code: Code = "0472".parse()?;
/// assert_eq!(code.digits()[0], Digit::D0);
/// assert_eq!(code.to_string(), "0472");
///
/// assert!("1123".parse::<Code>().is_err());
/// assert!("123".parse::<Code>().is_err());
/// # Ok::<(), CodeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    digits: [Digit; CODE_LENGTH],
}

impl Code {
    /// Number of legal codes.
    pub const COUNT: usize = 5040;

    /// Creates a code from four digits.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::DuplicateDigit`] if any digit is repeated.
    pub fn new(digits: [Digit; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut seen = [false; 10];
        for digit in digits {
            if seen[digit.index()] {
                return Err(CodeError::DuplicateDigit { digit });
            }
            seen[digit.index()] = true;
        }
        Ok(Self { digits })
    }

    /// Returns the digits of this code, most significant first.
    #[must_use]
    pub const fn digits(&self) -> &[Digit; CODE_LENGTH] {
        &self.digits
    }

    /// Returns `true` if `digit` occurs anywhere in this code.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }

    /// Iterates over every legal code in ascending numeric order.
    ///
    /// Codes with a leading zero (such as `0123`) are included.
    ///
    /// ```
    /// use abduel_core::Code;
    ///
    /// assert_eq!(Code::all().count(), Code::COUNT);
    /// assert_eq!(Code::all().next().map(|c| c.to_string()).as_deref(), Some("0123"));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..10_000u16).filter_map(Self::from_number)
    }

    /// Builds a code from a number in `0..10000`, padding with leading zeros.
    ///
    /// Returns `None` when the number has repeated digits or is out of range.
    #[must_use]
    pub fn from_number(number: u16) -> Option<Self> {
        if number >= 10_000 {
            return None;
        }
        let mut digits = [Digit::D0; CODE_LENGTH];
        let mut rest = number;
        for slot in digits.iter_mut().rev() {
            // `rest % 10` is always below 10.
            *slot = Digit::try_from_value(u8::try_from(rest % 10).ok()?)?;
            rest /= 10;
        }
        Self::new(digits).ok()
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::WrongLength { len });
        }
        let mut digits = [Digit::D0; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(s.chars()) {
            *slot = Digit::from_char(ch).ok_or(CodeError::NotADigit { ch })?;
        }
        Self::new(digits)
    }
}

impl TryFrom<[Digit; CODE_LENGTH]> for Code {
    type Error = CodeError;

    fn try_from(digits: [Digit; CODE_LENGTH]) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            Display::fmt(&digit, f)?;
        }
        Ok(())
    }
}

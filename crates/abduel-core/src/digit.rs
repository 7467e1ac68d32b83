//! Decimal digit representation.

use std::fmt::{self, Display};

/// A decimal digit in the range 0-9.
///
/// This enum provides type-safe representation of the digits a code is made of,
/// preventing invalid values at compile time.
///
/// # Examples
///
/// ```
/// use abduel_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// assert_eq!(Digit::from_char('7'), Some(Digit::D7));
/// assert_eq!(Digit::from_char('x'), None);
///
/// for digit in Digit::ALL {
///     println!("{digit}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 0 to 9, in ascending order.
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use abduel_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(0), Digit::D0);
    /// assert_eq!(Digit::from_value(9), Digit::D9);
    /// ```
    ///
    /// ```should_panic
    /// use abduel_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` when it is not in 0-9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::D0),
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Parses an ASCII decimal digit character.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let value = ch.to_digit(10)?;
        u8::try_from(value).ok().and_then(Self::try_from_value)
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the ASCII character for this digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }

    /// Returns the digit as an index into 10-element tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Digit::from_value(0), Digit::D0);
        assert_eq!(Digit::from_value(9), Digit::D9);
        assert_eq!(Digit::D0.value(), 0);
        assert_eq!(Digit::D9.value(), 9);

        assert_eq!(Digit::ALL.len(), 10);
        assert_eq!(Digit::ALL[0], Digit::D0);
        assert_eq!(Digit::ALL[9], Digit::D9);

        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(Digit::from_char(digit.to_char()), Some(digit));
            assert_eq!(digit.index(), usize::from(digit.value()));
        }

        assert_eq!(format!("{}", Digit::D0), "0");
        assert_eq!(format!("{}", Digit::D7), "7");

        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_from_char_rejects_non_digits() {
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char(' '), None);
        assert_eq!(Digit::from_char('٣'), None);
        assert_eq!(Digit::try_from_value(10), None);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_from_value_ten_panics() {
        let _ = Digit::from_value(10);
    }
}

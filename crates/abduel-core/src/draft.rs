//! Partially entered input.
//!
//! Input widgets fill digit slots one at a time and may leave gaps. A
//! [`DraftCode`] models that directly as four optional slots; it becomes a
//! [`Code`] only through [`DraftCode::to_code`], which is the single place the
//! code format is validated.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{CODE_LENGTH, Code, CodeError, Digit, Feedback, FeedbackError};

/// A position within a [`DraftCode`], counted from the left.
///
/// # Examples
///
/// ```
/// use abduel_core::Slot;
///
/// assert_eq!(Slot::new(3).map(Slot::index), Some(3));
/// assert_eq!(Slot::new(4), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    /// Every slot, left to right.
    pub const ALL: [Self; CODE_LENGTH] = [Self(0), Self(1), Self(2), Self(3)];

    /// Returns the slot at `index`, or `None` past the last slot.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CODE_LENGTH {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the zero-based position of this slot.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Four digit slots, each empty or holding one digit.
///
/// # Examples
///
/// ```
/// use abduel_core::{CodeError, Digit, DraftCode, Slot};
///
/// let mut draft: DraftCode = "12_4".parse()?;
/// assert_eq!(draft.to_code(), Err(CodeError::Incomplete));
///
/// draft.set(Slot::ALL[2], Some(Digit::D3));
/// assert_eq!(draft.to_code()?.to_string(), "1234");
/// # Ok::<(), CodeError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DraftCode {
    slots: [Option<Digit>; CODE_LENGTH],
}

impl DraftCode {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; CODE_LENGTH],
        }
    }

    /// Returns the slots of this draft.
    #[must_use]
    pub const fn slots(&self) -> &[Option<Digit>; CODE_LENGTH] {
        &self.slots
    }

    /// Returns the digit in `slot`, if any.
    #[must_use]
    pub fn slot(&self, slot: Slot) -> Option<Digit> {
        self.slots[slot.index()]
    }

    /// Puts `digit` into `slot` (or empties it with `None`).
    pub fn set(&mut self, slot: Slot, digit: Option<Digit>) {
        self.slots[slot.index()] = digit;
    }

    /// Empties one slot.
    pub fn clear_slot(&mut self, slot: Slot) {
        self.slots[slot.index()] = None;
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }

    /// Returns `true` if no slot holds a digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns `true` if every slot holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Converts the draft into a code.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Incomplete`] if a slot is empty and
    /// [`CodeError::DuplicateDigit`] if a digit is repeated.
    pub fn to_code(&self) -> Result<Code, CodeError> {
        let mut digits = [Digit::D0; CODE_LENGTH];
        for (digit, slot) in digits.iter_mut().zip(self.slots) {
            *digit = slot.ok_or(CodeError::Incomplete)?;
        }
        Code::new(digits)
    }
}

impl From<Code> for DraftCode {
    fn from(code: Code) -> Self {
        Self {
            slots: (*code.digits()).map(Some),
        }
    }
}

impl FromStr for DraftCode {
    type Err = CodeError;

    /// Parses up to four characters, where `_` or a space marks an empty slot.
    ///
    /// Shorter input leaves the trailing slots empty. Repeated digits are
    /// accepted here; they are rejected when the draft is turned into a code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len > CODE_LENGTH {
            return Err(CodeError::WrongLength { len });
        }
        let mut draft = Self::new();
        for (slot, ch) in draft.slots.iter_mut().zip(s.chars()) {
            *slot = match ch {
                '_' | ' ' => None,
                _ => Some(Digit::from_char(ch).ok_or(CodeError::NotADigit { ch })?),
            };
        }
        Ok(draft)
    }
}

impl Display for DraftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.slots {
            match slot {
                Some(digit) => Display::fmt(&digit, f)?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}

/// Selects one of the two feedback counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FeedbackField {
    /// The `A` count.
    A,
    /// The `B` count.
    B,
}

/// Staged feedback values entered by a human.
///
/// Each value is range-checked as it is entered; the combined `A + B` limit
/// is checked by [`DraftFeedback::to_feedback`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DraftFeedback {
    a: u8,
    b: u8,
}

impl DraftFeedback {
    /// Creates a draft with both values at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { a: 0, b: 0 }
    }

    /// Returns the staged value for `field`.
    #[must_use]
    pub const fn get(&self, field: FeedbackField) -> u8 {
        match field {
            FeedbackField::A => self.a,
            FeedbackField::B => self.b,
        }
    }

    /// Stages `value` for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::OutOfRange`] if `value` exceeds 4; the draft
    /// is left unchanged.
    pub fn set(&mut self, field: FeedbackField, value: u8) -> Result<(), FeedbackError> {
        if value > 4 {
            return Err(FeedbackError::OutOfRange { value });
        }
        match field {
            FeedbackField::A => self.a = value,
            FeedbackField::B => self.b = value,
        }
        Ok(())
    }

    /// Converts the staged values into a feedback pair.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::SumTooLarge`] if `A + B` exceeds 4.
    pub fn to_feedback(&self) -> Result<Feedback, FeedbackError> {
        Feedback::new(self.a, self.b)
    }
}

impl From<Feedback> for DraftFeedback {
    fn from(feedback: Feedback) -> Self {
        Self {
            a: feedback.a(),
            b: feedback.b(),
        }
    }
}

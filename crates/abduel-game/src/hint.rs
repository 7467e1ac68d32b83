/// A consumable supply of hints.
///
/// The budget is refilled only when a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintBudget {
    remaining: u32,
}

impl HintBudget {
    /// Creates a budget holding `hints` hints.
    #[must_use]
    pub const fn new(hints: u32) -> Self {
        Self { remaining: hints }
    }

    /// Returns the number of hints left.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns `true` if no hint is left.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Uses one hint, returning `false` if none was left.
    pub fn consume(&mut self) -> bool {
        match self.remaining.checked_sub(1) {
            Some(remaining) => {
                self.remaining = remaining;
                true
            }
            None => false,
        }
    }
}

/// Number of hints granted per game unless configured otherwise.
pub const DEFAULT_HINT_BUDGET: u32 = 3;

/// Settings that stay fixed for the lifetime of a [`Game`](crate::Game).
///
/// # Examples
///
/// ```
/// use abduel_game::GameConfig;
///
/// let config = GameConfig::default().hint_budget(5);
/// assert_eq!(config.hint_budget, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Hints available at the start of each game.
    pub hint_budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hint_budget: DEFAULT_HINT_BUDGET,
        }
    }
}

impl GameConfig {
    /// Sets the number of hints per game.
    #[must_use]
    pub fn hint_budget(mut self, hint_budget: u32) -> Self {
        self.hint_budget = hint_budget;
        self
    }
}

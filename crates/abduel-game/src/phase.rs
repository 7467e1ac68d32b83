use crate::Winner;

/// One side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Player {
    /// The person at the keyboard.
    #[display("human")]
    Human,
    /// The deducing program.
    #[display("computer")]
    Computer,
}

/// Where a game stands.
///
/// ```text
/// NotStarted -> HumanTurn <-> ComputerTurn -> HumanWins | ComputerWins | Draw
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// No game has been started.
    #[default]
    NotStarted,
    /// The human is to guess the computer's secret.
    HumanTurn,
    /// The computer has guessed and waits for the human's feedback.
    ComputerTurn,
    /// Decided in favor of the human.
    HumanWins,
    /// Decided in favor of the computer.
    ComputerWins,
    /// Both sides found the secret.
    Draw,
}

impl Phase {
    /// Returns `true` for the three decided phases.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::HumanWins | Self::ComputerWins | Self::Draw)
    }

    /// Returns `true` while turns are being played.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::HumanTurn | Self::ComputerTurn)
    }

    /// Returns whose turn it is, if a turn is being played.
    #[must_use]
    pub const fn turn(self) -> Option<Player> {
        match self {
            Self::HumanTurn => Some(Player::Human),
            Self::ComputerTurn => Some(Player::Computer),
            Self::NotStarted | Self::HumanWins | Self::ComputerWins | Self::Draw => None,
        }
    }

    /// Returns the outcome of a decided phase.
    #[must_use]
    pub const fn winner(self) -> Option<Winner> {
        match self {
            Self::HumanWins => Some(Winner::Human),
            Self::ComputerWins => Some(Winner::Computer),
            Self::Draw => Some(Winner::Draw),
            Self::NotStarted | Self::HumanTurn | Self::ComputerTurn => None,
        }
    }

    pub(crate) const fn from_winner(winner: Winner) -> Self {
        match winner {
            Winner::Human => Self::HumanWins,
            Winner::Computer => Self::ComputerWins,
            Winner::Draw => Self::Draw,
            Winner::None => Self::NotStarted,
        }
    }
}

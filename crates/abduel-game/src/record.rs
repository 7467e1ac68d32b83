use std::time::SystemTime;

use abduel_core::GuessRecord;

/// The outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Winner {
    /// The human found the secret and the computer did not.
    #[display("human")]
    Human,
    /// The computer found the secret first.
    #[display("computer")]
    Computer,
    /// Both sides found the secret within the same number of rounds.
    #[display("draw")]
    Draw,
    /// The game was abandoned before it was decided.
    #[display("none")]
    None,
}

/// Summary of one concluded game.
///
/// A record is created once, when the game ends or is abandoned, and is never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Identifier unique among records written by one process.
    pub id: u64,
    /// When the game ended.
    pub timestamp: SystemTime,
    /// Who won.
    pub winner: Winner,
    /// Guesses made by the human.
    pub human_attempts: u32,
    /// Guesses made by the computer.
    pub computer_attempts: u32,
    /// Number of rounds played.
    pub total_rounds: u32,
    /// The human's guesses with their feedback.
    pub human_history: Vec<GuessRecord>,
    /// The computer's guesses with the feedback the human gave.
    pub computer_history: Vec<GuessRecord>,
}

/// Receives match records as games end.
///
/// The game only ever appends; reading and clearing stored records is up to
/// the implementation.
pub trait MatchRecorder {
    /// Stores a finished game.
    fn append_match_record(&mut self, record: MatchRecord);
}

/// A recorder that discards every record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopRecorder;

impl MatchRecorder for NoopRecorder {
    fn append_match_record(&mut self, _record: MatchRecord) {}
}

impl MatchRecorder for Vec<MatchRecord> {
    fn append_match_record(&mut self, record: MatchRecord) {
        self.push(record);
    }
}

impl<R> MatchRecorder for &mut R
where
    R: MatchRecorder + ?Sized,
{
    fn append_match_record(&mut self, record: MatchRecord) {
        (**self).append_match_record(record);
    }
}

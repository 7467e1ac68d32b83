use std::time::{SystemTime, UNIX_EPOCH};

use abduel_core::{
    Code, Digit, DraftCode, DraftFeedback, Feedback, FeedbackField, GuessRecord, Slot,
};
use abduel_generator::{CodeGenerator, GameSeed};
use abduel_solver::{CandidateSet, CandidateSpace, Consistency, is_guess_consistent_with_history};
use log::{debug, info, warn};

use crate::{
    Complaint, CorrectionEditor, GameConfig, GameError, HintBudget, MatchRecord, MatchRecorder,
    Message, NoopRecorder, Phase, Player, Winner,
};

/// What happened to feedback submitted for the computer's guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FeedbackOutcome {
    /// The feedback was recorded and play moved on.
    Accepted,
    /// The feedback contradicts earlier answers and was not recorded.
    Complaint,
    /// The feedback was recorded and decided the game.
    Finished(Winner),
}

/// A game of 1A2B between a human and the computer.
///
/// Both sides hold a secret. The human guesses the computer's secret and is
/// scored automatically; the computer guesses the human's secret, which it
/// never sees, and the human answers with `A`/`B` feedback. The computer keeps
/// the set of codes consistent with every answer and picks its guesses from
/// it.
///
/// Input is staged in drafts ([`Game::update_draft_guess`],
/// [`Game::update_draft_feedback`]) and checked for format only; game rules
/// are applied when the draft is submitted. A rejected action leaves the game
/// unchanged.
///
/// When the human finds the secret first, the computer is granted one final
/// guess so that both sides have had the same number of attempts. If that
/// guess is also correct the game is a draw.
///
/// Finished and abandoned games are passed to the [`MatchRecorder`].
///
/// # Examples
///
/// ```
/// use abduel_core::FeedbackField;
/// use abduel_game::{Game, Phase};
/// use abduel_generator::GameSeed;
///
/// let mut game = Game::with_seed(GameSeed::from_phrase("doc"));
/// game.start_new_game_with_secret("1234".parse()?);
///
/// game.update_draft_guess("5670")?;
/// let feedback = game.submit_guess()?;
/// assert_eq!(feedback.to_string(), "0A0B");
/// assert_eq!(game.phase(), Phase::ComputerTurn);
///
/// // Answer the computer's guess as if our secret shared one digit in place.
/// game.update_draft_feedback(FeedbackField::A, 1)?;
/// assert!(game.submit_feedback()?.is_accepted());
/// assert_eq!(game.phase(), Phase::HumanTurn);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = NoopRecorder> {
    config: GameConfig,
    generator: CodeGenerator,
    recorder: R,
    phase: Phase,
    secret: Option<Code>,
    human_history: Vec<GuessRecord>,
    computer_history: Vec<GuessRecord>,
    candidates: CandidateSpace,
    human_attempts: u32,
    computer_attempts: u32,
    hints: HintBudget,
    final_turn: bool,
    pending_guess: Option<Code>,
    complaint: Option<Complaint>,
    correction: Option<CorrectionEditor>,
    draft_guess: DraftCode,
    draft_feedback: DraftFeedback,
    message: Option<Message>,
    last_record_id: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with a random seed that records nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_recorder(NoopRecorder, CodeGenerator::new(), GameConfig::default())
    }

    /// Creates a game whose secrets and computer guesses follow `seed`.
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self::with_recorder(
            NoopRecorder,
            CodeGenerator::with_seed(seed),
            GameConfig::default(),
        )
    }
}

impl<R> Game<R>
where
    R: MatchRecorder,
{
    /// Creates a game that reports finished matches to `recorder`.
    ///
    /// The game starts in [`Phase::NotStarted`].
    #[must_use]
    pub fn with_recorder(recorder: R, generator: CodeGenerator, config: GameConfig) -> Self {
        Self {
            config,
            generator,
            recorder,
            phase: Phase::NotStarted,
            secret: None,
            human_history: vec![],
            computer_history: vec![],
            candidates: CandidateSpace::new(),
            human_attempts: 0,
            computer_attempts: 0,
            hints: HintBudget::new(config.hint_budget),
            final_turn: false,
            pending_guess: None,
            complaint: None,
            correction: None,
            draft_guess: DraftCode::new(),
            draft_feedback: DraftFeedback::new(),
            message: None,
            last_record_id: 0,
        }
    }

    /// Starts a fresh game with a newly generated secret.
    ///
    /// A game in progress with at least one guess is recorded as abandoned.
    pub fn start_new_game(&mut self) {
        let secret = self.generator.generate_secret();
        self.start_new_game_with_secret(secret);
    }

    /// Starts a fresh game in which the computer's secret is `secret`.
    pub fn start_new_game_with_secret(&mut self, secret: Code) {
        if self.phase.is_in_progress()
            && !(self.human_history.is_empty() && self.computer_history.is_empty())
        {
            info!("abandoning game after {} rounds", self.total_rounds());
            self.emit_record(Winner::None);
        }

        self.phase = Phase::HumanTurn;
        self.secret = Some(secret);
        self.human_history.clear();
        self.computer_history.clear();
        self.candidates.reset();
        self.human_attempts = 0;
        self.computer_attempts = 0;
        self.hints = HintBudget::new(self.config.hint_budget);
        self.final_turn = false;
        self.pending_guess = None;
        self.complaint = None;
        self.correction = None;
        self.draft_guess.clear();
        self.draft_feedback = DraftFeedback::new();
        self.message = Some(Message::GameStarted);
        debug!("new game started");
    }

    /// Discards the current game and starts a new one.
    ///
    /// Equivalent to [`Game::start_new_game`].
    pub fn reset_game(&mut self) {
        self.start_new_game();
    }

    /// Replaces the drafted guess with `text`.
    ///
    /// Up to four characters are accepted; `_` or a space leaves a slot empty.
    /// Repeated digits are only rejected on submission.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidGuess`] if the text is too long or contains
    /// a character that is not a digit. The draft is left unchanged.
    pub fn update_draft_guess(&mut self, text: &str) -> Result<(), GameError> {
        match text.parse::<DraftCode>() {
            Ok(draft) => {
                self.draft_guess = draft;
                Ok(())
            }
            Err(error) => Err(self.reject(error.into())),
        }
    }

    /// Puts `digit` into one slot of the drafted guess, or empties it.
    pub fn set_draft_slot(&mut self, slot: Slot, digit: Option<Digit>) {
        self.draft_guess.set(slot, digit);
    }

    /// Empties the drafted guess.
    pub fn clear_draft_guess(&mut self) {
        self.draft_guess.clear();
    }

    /// Stages one value of the feedback for the computer's guess.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidFeedback`] if `value` exceeds 4. The draft
    /// is left unchanged.
    pub fn update_draft_feedback(&mut self, field: FeedbackField, value: u8) -> Result<(), GameError> {
        self.draft_feedback
            .set(field, value)
            .map_err(|error| self.reject(error.into()))
    }

    /// Submits the drafted guess against the computer's secret.
    ///
    /// On success the guess is scored and recorded, and the computer picks
    /// its guess for the following turn.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotStarted`], [`GameError::GameOver`] or
    ///   [`GameError::NotHumanTurn`] if the human cannot guess now.
    /// - [`GameError::InvalidGuess`] if the draft is not a legal code.
    /// - [`GameError::GuessAlreadyTried`] if the same guess was made before.
    pub fn submit_guess(&mut self) -> Result<Feedback, GameError> {
        let secret = self.require_turn(Player::Human)?;
        let guess = self
            .draft_guess
            .to_code()
            .map_err(|error| self.reject(error.into()))?;
        if self.human_history.iter().any(|record| record.guess() == guess) {
            return Err(self.reject(GameError::GuessAlreadyTried { guess }));
        }

        let feedback = Feedback::calculate(&guess, &secret);
        self.human_history.push(GuessRecord::new(guess, feedback));
        self.human_attempts += 1;
        self.draft_guess.clear();
        debug!("human guessed {guess}: {feedback}");

        if !feedback.is_solved() {
            self.message = Some(Message::GuessResult { guess, feedback });
            self.enter_computer_turn();
        } else if self.human_attempts > self.computer_attempts {
            info!(
                "human found the secret in {} guesses; computer gets a final turn",
                self.human_attempts
            );
            self.final_turn = true;
            self.message = Some(Message::FinalTurn {
                rounds: self.human_attempts,
            });
            self.enter_computer_turn();
        } else {
            self.finish(Winner::Human);
        }
        Ok(feedback)
    }

    /// Submits the drafted feedback for the computer's pending guess.
    ///
    /// Feedback that no remaining candidate could produce is not recorded;
    /// instead a [`Complaint`] is raised and history correction becomes
    /// available. Different feedback for the same guess may be submitted
    /// afterwards.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotStarted`], [`GameError::GameOver`] or
    ///   [`GameError::NotComputerTurn`] if no feedback is expected now.
    /// - [`GameError::NoPendingGuess`] if the computer could not guess because
    ///   no candidate remains.
    /// - [`GameError::InvalidFeedback`] if `A + B` exceeds 4.
    pub fn submit_feedback(&mut self) -> Result<FeedbackOutcome, GameError> {
        self.require_turn(Player::Computer)?;
        let guess = self.pending_guess.ok_or(GameError::NoPendingGuess)?;
        let feedback = self
            .draft_feedback
            .to_feedback()
            .map_err(|error| self.reject(error.into()))?;

        if let Consistency::Contradiction = self.candidates.check(&guess, feedback) {
            warn!("feedback {feedback} for {guess} contradicts earlier answers");
            self.complaint = Some(Complaint { guess, feedback });
            self.message = Some(Message::Complaint { guess, feedback });
            return Ok(FeedbackOutcome::Complaint);
        }

        self.complaint = None;
        self.correction = None;
        self.pending_guess = None;
        self.draft_feedback = DraftFeedback::new();
        self.computer_history.push(GuessRecord::new(guess, feedback));
        self.computer_attempts += 1;
        self.candidates.narrow(&guess, feedback);
        debug!(
            "computer guessed {guess}: {feedback}, {} candidates remain",
            self.candidates.remaining()
        );

        if feedback.is_solved() {
            let winner = self.computer_success_winner();
            self.finish(winner);
            return Ok(FeedbackOutcome::Finished(winner));
        }
        if self.final_turn {
            self.finish(Winner::Human);
            return Ok(FeedbackOutcome::Finished(Winner::Human));
        }
        if self.candidates.is_exhausted() {
            warn!("no candidate remains after {guess}: {feedback}");
            self.message = Some(Message::NoPossibleNumbers);
            return Ok(FeedbackOutcome::Accepted);
        }

        self.phase = Phase::HumanTurn;
        self.message = None;
        Ok(FeedbackOutcome::Accepted)
    }

    /// Checks whether the drafted guess fits every answer the human has
    /// received so far, using one hint.
    ///
    /// Returns `true` if the guess could still be the computer's secret.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotStarted`], [`GameError::GameOver`] or
    ///   [`GameError::NotHumanTurn`] outside the human's turn.
    /// - [`GameError::HintsExhausted`] if no hint is left.
    /// - [`GameError::InvalidGuess`] if the draft is not a legal code.
    ///
    /// No hint is used when an error is returned.
    pub fn request_hint(&mut self) -> Result<bool, GameError> {
        self.require_turn(Player::Human)?;
        if self.hints.is_exhausted() {
            return Err(self.reject(GameError::HintsExhausted));
        }
        let guess = self
            .draft_guess
            .to_code()
            .map_err(|error| self.reject(error.into()))?;

        self.hints.consume();
        let remaining = self.hints.remaining();
        let consistent = is_guess_consistent_with_history(&guess, &self.human_history);
        debug!("hint for {guess}: consistent={consistent}, {remaining} left");
        self.message = Some(if consistent {
            Message::HintConsistent { guess, remaining }
        } else {
            Message::HintInconsistent { guess, remaining }
        });
        Ok(consistent)
    }

    /// Returns `true` if a past feedback may be corrected now.
    ///
    /// Correction is offered while a complaint is outstanding or when no
    /// candidate is left.
    #[must_use]
    pub fn can_correct(&self) -> bool {
        self.phase.is_in_progress()
            && (self.complaint.is_some() || self.candidates.is_exhausted())
    }

    /// Opens an editor for the feedback of the computer's guess at `index`,
    /// pre-filled with the recorded result.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CorrectionUnavailable`] if [`Game::can_correct`] is
    /// `false` and [`GameError::CorrectionIndexOutOfRange`] if there is no
    /// entry at `index`.
    pub fn begin_correction(&mut self, index: usize) -> Result<(), GameError> {
        let record = *self.correctable_record(index)?;
        self.correction = Some(CorrectionEditor::new(index, &record));
        Ok(())
    }

    /// Stages one value in the open correction editor.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoCorrectionInProgress`] if no editor is open and
    /// [`GameError::InvalidFeedback`] if `value` exceeds 4.
    pub fn update_correction_draft(&mut self, field: FeedbackField, value: u8) -> Result<(), GameError> {
        let Some(editor) = &mut self.correction else {
            return Err(GameError::NoCorrectionInProgress);
        };
        editor
            .set(field, value)
            .map_err(|error| self.reject(error.into()))
    }

    /// Applies the open correction editor through [`Game::correct_feedback`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoCorrectionInProgress`] if no editor is open, or
    /// any error of [`Game::correct_feedback`]. The editor stays open on error.
    pub fn submit_correction(&mut self) -> Result<(), GameError> {
        let editor = self.correction.ok_or(GameError::NoCorrectionInProgress)?;
        let draft = editor.draft();
        self.correct_feedback(
            editor.index(),
            draft.get(FeedbackField::A),
            draft.get(FeedbackField::B),
        )
    }

    /// Closes the correction editor without applying it.
    ///
    /// The complaint and the current message are kept.
    pub fn cancel_correction(&mut self) {
        self.correction = None;
    }

    /// Replaces the feedback of the computer's guess at `index` and rebuilds
    /// the candidates from the corrected history.
    ///
    /// Entries after `index` were deduced from the wrong answer and are
    /// dropped. The complaint and the message are cleared and play resumes
    /// with the human, unless the human has already found the secret, in which
    /// case the computer takes its final guess again: the human has no turn
    /// left, and the guess the computer is owed was made against the wrong
    /// answer. Correcting an entry to `4A0B` ends the game as a computer
    /// success. Attempt counts are kept.
    ///
    /// # Errors
    ///
    /// - [`GameError::CorrectionUnavailable`] if [`Game::can_correct`] is
    ///   `false`.
    /// - [`GameError::CorrectionIndexOutOfRange`] if there is no entry at
    ///   `index`.
    /// - [`GameError::InvalidFeedback`] if `a` and `b` are not a legal pair.
    pub fn correct_feedback(&mut self, index: usize, a: u8, b: u8) -> Result<(), GameError> {
        self.correctable_record(index)?;
        let feedback = Feedback::new(a, b).map_err(|error| self.reject(error.into()))?;

        self.computer_history.truncate(index + 1);
        self.computer_history[index] = self.computer_history[index].with_result(feedback);
        self.candidates.replay(&self.computer_history);
        self.complaint = None;
        self.correction = None;
        self.message = None;
        self.pending_guess = None;
        self.draft_feedback = DraftFeedback::new();
        info!(
            "round {} corrected to {feedback}, {} candidates remain",
            index + 1,
            self.candidates.remaining()
        );

        if feedback.is_solved() {
            let winner = self.computer_success_winner();
            self.finish(winner);
        } else if self.final_turn {
            self.enter_computer_turn();
        } else {
            self.phase = Phase::HumanTurn;
            if self.candidates.is_exhausted() {
                warn!("corrected history admits no code");
                self.message = Some(Message::NoPossibleNumbers);
            }
        }
        Ok(())
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whose turn it is, if a turn is being played.
    #[must_use]
    pub fn turn(&self) -> Option<Player> {
        self.phase.turn()
    }

    /// Returns the computer's secret once the game is decided.
    #[must_use]
    pub fn secret(&self) -> Option<Code> {
        self.secret.filter(|_| self.phase.is_finished())
    }

    /// Returns the human's guesses with their scores.
    #[must_use]
    pub fn human_history(&self) -> &[GuessRecord] {
        &self.human_history
    }

    /// Returns the computer's guesses with the feedback the human gave.
    #[must_use]
    pub fn computer_history(&self) -> &[GuessRecord] {
        &self.computer_history
    }

    /// Returns the codes the computer still considers possible.
    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        self.candidates.candidates()
    }

    /// Returns the number of codes the computer still considers possible.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.remaining()
    }

    /// Returns the number of hints left in this game.
    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.hints.remaining()
    }

    /// Returns the number of guesses the human has made.
    #[must_use]
    pub fn human_attempts(&self) -> u32 {
        self.human_attempts
    }

    /// Returns the number of the computer's guesses that were answered.
    #[must_use]
    pub fn computer_attempts(&self) -> u32 {
        self.computer_attempts
    }

    /// Returns `true` while the computer is taking its final guess.
    #[must_use]
    pub fn is_final_turn(&self) -> bool {
        self.final_turn
    }

    /// Returns the computer's guess awaiting feedback.
    #[must_use]
    pub fn pending_guess(&self) -> Option<Code> {
        self.pending_guess
    }

    /// Returns the message describing the latest event.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Returns the drafted guess.
    #[must_use]
    pub fn draft_guess(&self) -> &DraftCode {
        &self.draft_guess
    }

    /// Returns the drafted feedback.
    #[must_use]
    pub fn draft_feedback(&self) -> &DraftFeedback {
        &self.draft_feedback
    }

    /// Returns the outstanding complaint.
    #[must_use]
    pub fn complaint(&self) -> Option<&Complaint> {
        self.complaint.as_ref()
    }

    /// Returns the open correction editor.
    #[must_use]
    pub fn correction(&self) -> Option<&CorrectionEditor> {
        self.correction.as_ref()
    }

    /// Returns the configuration of this game.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the seed of the generator.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.generator.seed()
    }

    /// Returns the match recorder.
    #[must_use]
    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    /// Returns the match recorder mutably.
    pub fn recorder_mut(&mut self) -> &mut R {
        &mut self.recorder
    }

    fn require_turn(&self, player: Player) -> Result<Code, GameError> {
        let Some(secret) = self.secret else {
            return Err(GameError::NotStarted);
        };
        match (self.phase, player) {
            (Phase::NotStarted, _) => Err(GameError::NotStarted),
            (Phase::HumanWins | Phase::ComputerWins | Phase::Draw, _) => Err(GameError::GameOver),
            (Phase::HumanTurn, Player::Human) | (Phase::ComputerTurn, Player::Computer) => {
                Ok(secret)
            }
            (Phase::ComputerTurn, Player::Human) => Err(GameError::NotHumanTurn),
            (Phase::HumanTurn, Player::Computer) => Err(GameError::NotComputerTurn),
        }
    }

    fn correctable_record(&self, index: usize) -> Result<&GuessRecord, GameError> {
        if !self.can_correct() {
            return Err(GameError::CorrectionUnavailable);
        }
        self.computer_history
            .get(index)
            .ok_or(GameError::CorrectionIndexOutOfRange {
                index,
                len: self.computer_history.len(),
            })
    }

    /// Surfaces an input error as the current message and hands it back.
    fn reject(&mut self, error: GameError) -> GameError {
        self.message = Some(error.message());
        error
    }

    fn enter_computer_turn(&mut self) {
        self.phase = Phase::ComputerTurn;
        self.draft_feedback = DraftFeedback::new();
        if self.candidates.is_exhausted() {
            warn!("computer cannot guess: no candidate remains");
            self.pending_guess = None;
            self.message = Some(Message::NoPossibleNumbers);
            return;
        }
        let picked = self.generator.pick_guess(self.candidates.candidates());
        debug!(
            "computer picked {} from {} candidates",
            picked.code(),
            self.candidates.remaining()
        );
        self.pending_guess = Some(picked.code());
    }

    fn computer_success_winner(&self) -> Winner {
        if self.final_turn || self.human_history.iter().any(GuessRecord::is_correct) {
            Winner::Draw
        } else {
            Winner::Computer
        }
    }

    fn finish(&mut self, winner: Winner) {
        let rounds = self.total_rounds();
        self.phase = Phase::from_winner(winner);
        self.final_turn = false;
        self.pending_guess = None;
        self.complaint = None;
        self.correction = None;
        self.message = Some(match winner {
            Winner::Human => Message::HumanWins {
                rounds: self.human_attempts,
            },
            Winner::Computer => Message::ComputerWins {
                rounds: self.computer_attempts,
            },
            Winner::Draw | Winner::None => Message::Draw { rounds },
        });
        info!("game over: {winner} after {rounds} rounds");
        self.emit_record(winner);
    }

    fn total_rounds(&self) -> u32 {
        self.human_attempts.max(self.computer_attempts)
    }

    fn emit_record(&mut self, winner: Winner) {
        let timestamp = SystemTime::now();
        let millis = timestamp
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        let id = millis.max(self.last_record_id + 1);
        self.last_record_id = id;
        self.recorder.append_match_record(MatchRecord {
            id,
            timestamp,
            winner,
            human_attempts: self.human_attempts,
            computer_attempts: self.computer_attempts,
            total_rounds: self.total_rounds(),
            human_history: self.human_history.clone(),
            computer_history: self.computer_history.clone(),
        });
    }
}

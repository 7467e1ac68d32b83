//! The interactive terminal session.
//!
//! [`App`] reads one [`Command`] per line, applies it to the [`Game`] and
//! writes localized text for whatever changed.

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use abduel_core::FeedbackField;
use abduel_game::{Game, GameError, Message, Phase};
use log::{debug, warn};

use crate::{
    command::{Command, CommandError},
    i18n::Language,
    match_store::MatchStore,
    settings::{Settings, SettingsStore},
};

/// A game bound to a terminal.
#[derive(Debug)]
pub struct App<W> {
    game: Game<MatchStore>,
    settings: Settings,
    settings_store: SettingsStore,
    think_delay: Duration,
    out: W,
}

impl<W> App<W>
where
    W: Write,
{
    #[must_use]
    pub fn new(
        game: Game<MatchStore>,
        settings: Settings,
        settings_store: SettingsStore,
        out: W,
    ) -> Self {
        let think_delay = Duration::from_millis(settings.think_delay_ms);
        Self {
            game,
            settings,
            settings_store,
            think_delay,
            out,
        }
    }

    /// Overrides the pause before the computer's guess for this session only.
    pub fn set_think_delay(&mut self, delay: Duration) {
        self.think_delay = delay;
    }

    #[must_use]
    pub fn game(&self) -> &Game<MatchStore> {
        &self.game
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    fn language(&self) -> Language {
        self.settings.language
    }

    /// Plays until `quit` or the end of `input`.
    ///
    /// A game is started first unless one is already in progress.
    pub fn run<I>(&mut self, input: I) -> io::Result<()>
    where
        I: BufRead,
    {
        if self.game.phase().is_not_started() {
            self.game.start_new_game();
        }
        self.say("app.welcome")?;
        self.show_message()?;
        self.prompt()?;
        self.out.flush()?;

        for line in input.lines() {
            let line = line?;
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    debug!("command: {command:?}");
                    self.execute(command)?;
                }
                Err(error) => self.report_command_error(&error)?,
            }
            self.out.flush()?;
        }
        self.say("app.bye")
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Empty | Command::Quit => Ok(()),
            Command::New => {
                self.game.start_new_game();
                self.after_action()
            }
            Command::Reset => {
                self.game.reset_game();
                self.after_action()
            }
            Command::Guess(text) => self.guess(&text),
            Command::Hint(text) => {
                let result = self
                    .game
                    .update_draft_guess(&text)
                    .and_then(|()| self.game.request_hint());
                match result {
                    Ok(_) => self.show_message(),
                    Err(error) => self.report(&error),
                }
            }
            Command::Feedback { a, b } => self.feedback(a, b),
            Command::EditRound { round } => self.edit_round(round),
            Command::Fix { round, a, b } => {
                let Some(index) = round.checked_sub(1) else {
                    return self.say_with("app.invalid_number", &[("value", round.to_string())]);
                };
                match self.game.correct_feedback(index, a, b) {
                    Ok(()) => self.after_action(),
                    Err(error) => self.report(&error),
                }
            }
            Command::Cancel => {
                if self.game.correction().is_none() {
                    return self.report(&GameError::NoCorrectionInProgress);
                }
                self.game.cancel_correction();
                self.say("app.correction_cancelled")
            }
            Command::Status => self.status(),
            Command::Records => self.records(),
            Command::ClearRecords => match self.game.recorder_mut().clear() {
                Ok(()) => self.say("app.records_cleared"),
                Err(error) => {
                    warn!("failed to clear match records: {error}");
                    self.say_with("app.store_failed", &[("error", error.to_string())])
                }
            },
            Command::Language(language) => {
                self.settings.language = language;
                if let Err(error) = self.settings_store.save(&self.settings) {
                    warn!("failed to save settings: {error}");
                    self.say_with("app.store_failed", &[("error", error.to_string())])?;
                }
                self.say("app.language_changed")
            }
            Command::Help => self.say("app.help"),
        }
    }

    fn guess(&mut self, text: &str) -> io::Result<()> {
        let result = self
            .game
            .update_draft_guess(text)
            .and_then(|()| self.game.submit_guess());
        if let Err(error) = result {
            return self.report(&error);
        }
        self.show_message()?;
        if self.game.pending_guess().is_some() {
            self.say("app.thinking")?;
            self.out.flush()?;
            if !self.think_delay.is_zero() {
                thread::sleep(self.think_delay);
            }
        }
        self.prompt()
    }

    /// Answers the computer's guess, or fills the open correction editor.
    fn feedback(&mut self, a: u8, b: u8) -> io::Result<()> {
        let result = if self.game.correction().is_some() {
            self.game
                .update_correction_draft(FeedbackField::A, a)
                .and_then(|()| self.game.update_correction_draft(FeedbackField::B, b))
                .and_then(|()| self.game.submit_correction())
        } else {
            self.game
                .update_draft_feedback(FeedbackField::A, a)
                .and_then(|()| self.game.update_draft_feedback(FeedbackField::B, b))
                .and_then(|()| self.game.submit_feedback().map(drop))
        };
        match result {
            Ok(()) => self.after_action(),
            Err(error) => self.report(&error),
        }
    }

    fn edit_round(&mut self, round: usize) -> io::Result<()> {
        let Some(index) = round.checked_sub(1) else {
            return self.say_with("app.invalid_number", &[("value", round.to_string())]);
        };
        if let Err(error) = self.game.begin_correction(index) {
            return self.report(&error);
        }
        let Some(editor) = self.game.correction() else {
            return Ok(());
        };
        let draft = editor.draft();
        let params = [
            ("round", round.to_string()),
            ("guess", editor.guess().to_string()),
            ("a", draft.get(FeedbackField::A).to_string()),
            ("b", draft.get(FeedbackField::B).to_string()),
        ];
        self.say_with("app.correction_open", &params)
    }

    fn status(&mut self) -> io::Result<()> {
        let game = &self.game;
        let round = game.human_attempts().max(game.computer_attempts());
        let params = [
            ("round", round.to_string()),
            ("human", game.human_attempts().to_string()),
            ("computer", game.computer_attempts().to_string()),
            ("hints", game.hints_remaining().to_string()),
            ("candidates", game.candidate_count().to_string()),
        ];
        self.say_with("app.status", &params)?;

        for (key, history) in [
            ("app.history_human", self.game.human_history().to_vec()),
            ("app.history_computer", self.game.computer_history().to_vec()),
        ] {
            if history.is_empty() {
                continue;
            }
            self.say(key)?;
            for (i, record) in history.iter().enumerate() {
                let params = [
                    ("round", (i + 1).to_string()),
                    ("guess", record.guess().to_string()),
                    ("a", record.result().a().to_string()),
                    ("b", record.result().b().to_string()),
                ];
                self.say_with("app.history_entry", &params)?;
            }
        }
        Ok(())
    }

    fn records(&mut self) -> io::Result<()> {
        let lines = self
            .game
            .recorder()
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let winner = self.language().render::<&str>(
                    &format!("app.winner.{}", record.winner),
                    &[],
                );
                self.language().render(
                    "app.record_entry",
                    &[
                        ("index", (i + 1).to_string()),
                        ("winner", winner),
                        ("human", record.human_attempts.to_string()),
                        ("computer", record.computer_attempts.to_string()),
                        ("rounds", record.total_rounds.to_string()),
                    ],
                )
            })
            .collect::<Vec<_>>();
        if lines.is_empty() {
            return self.say("app.records_empty");
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn after_action(&mut self) -> io::Result<()> {
        self.show_message()?;
        self.prompt()
    }

    /// Writes the game's current message, if any.
    fn show_message(&mut self) -> io::Result<()> {
        match self.game.message() {
            Some(message) => {
                let text = self.language().message(message);
                writeln!(self.out, "{text}")
            }
            None => Ok(()),
        }
    }

    /// Tells the player what the game is waiting for.
    fn prompt(&mut self) -> io::Result<()> {
        match self.game.phase() {
            Phase::HumanTurn => self.say("app.your_turn"),
            Phase::ComputerTurn => match self.game.pending_guess() {
                Some(guess) => self.say_with("app.computer_guess", &[("guess", guess.to_string())]),
                None => Ok(()),
            },
            Phase::HumanWins | Phase::ComputerWins | Phase::Draw => match self.game.secret() {
                Some(secret) => self.say_with("app.secret", &[("secret", secret.to_string())]),
                None => Ok(()),
            },
            Phase::NotStarted => Ok(()),
        }
    }

    fn report(&mut self, error: &GameError) -> io::Result<()> {
        debug!("rejected: {error}");
        self.say_message(&error.message())
    }

    fn report_command_error(&mut self, error: &CommandError) -> io::Result<()> {
        debug!("unparsable command: {error}");
        match error {
            CommandError::Unknown { command } => {
                self.say_with("app.unknown_command", &[("command", command.clone())])
            }
            CommandError::MissingArgument { command } => {
                self.say_with("app.missing_argument", &[("command", command.clone())])
            }
            CommandError::InvalidNumber { value } => {
                self.say_with("app.invalid_number", &[("value", value.clone())])
            }
            CommandError::InvalidLanguage { value } => {
                self.say_with("app.invalid_language", &[("value", value.clone())])
            }
            CommandError::InvalidFeedback(error) => self.say_message(&Message::from(*error)),
        }
    }

    fn say_message(&mut self, message: &Message) -> io::Result<()> {
        let text = self.language().message(message);
        writeln!(self.out, "{text}")
    }

    fn say(&mut self, key: &str) -> io::Result<()> {
        self.say_with(key, &[])
    }

    fn say_with(&mut self, key: &str, params: &[(&str, String)]) -> io::Result<()> {
        let text = self.language().render(key, params);
        writeln!(self.out, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use abduel_game::{GameConfig, Winner};
    use abduel_generator::{CodeGenerator, GameSeed};
    use tempfile::TempDir;

    use super::*;

    fn new_app(dir: &TempDir, secret: Option<&str>) -> App<Vec<u8>> {
        let store = MatchStore::empty(dir.path().join("matches.json"));
        let generator = CodeGenerator::with_seed(GameSeed::from_phrase("app tests"));
        let mut game = Game::with_recorder(store, generator, GameConfig::default());
        if let Some(secret) = secret {
            game.start_new_game_with_secret(secret.parse().unwrap());
        }
        let settings = Settings {
            think_delay_ms: 0,
            ..Settings::default()
        };
        let settings_store = SettingsStore::new(dir.path().join("settings.json"));
        App::new(game, settings, settings_store, Vec::new())
    }

    fn play(app: &mut App<Vec<u8>>, input: &str) -> String {
        app.run(Cursor::new(input)).unwrap();
        String::from_utf8(std::mem::take(&mut app.out)).unwrap()
    }

    #[test]
    fn test_human_wins_and_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = new_app(&dir, Some("2048"));
        let output = play(&mut app, "2048\n0A0B\nrecords\nquit\n");

        assert!(output.contains("Thinking..."));
        assert!(output.contains("My number was 2048."));
        assert!(output.contains("#1 you won"));
        assert!(output.ends_with("Bye!\n"));
        assert_eq!(app.game().phase(), Phase::HumanWins);

        let store = MatchStore::open(dir.path().join("matches.json")).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].winner, Winner::Human);
    }

    #[test]
    fn test_complaint_then_correction_editor() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = new_app(&dir, Some("1234"));
        // Two disjoint guesses both answered 0A0B leave only two digits.
        let output = play(&mut app, "5678\n0A0B\n1235\n0A0B\nfix 1\n1A0B\n");

        assert!(output.contains("Editing round 1"));
        assert!(app.game().complaint().is_none());
        assert!(app.game().correction().is_none());
        assert_eq!(app.game().computer_history().len(), 1);
        assert_eq!(app.game().computer_history()[0].result().a(), 1);
        assert_eq!(app.game().phase(), Phase::HumanTurn);
        assert_eq!(app.game().computer_attempts(), 1);
    }

    #[test]
    fn test_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = new_app(&dir, Some("1234"));
        let output = play(&mut app, "dance\nfix 1\ncancel\nfb\nfix 0 1 1\n");

        assert!(output.contains("Unknown command `dance`"));
        assert!(output.contains("There is nothing to correct right now."));
        assert!(output.contains("`fb` needs more arguments"));
        assert!(output.contains("`0` is not a number."));
        assert_eq!(app.game().phase(), Phase::HumanTurn);
        assert!(app.game().human_history().is_empty());
    }

    #[test]
    fn test_language_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = new_app(&dir, None);
        let output = play(&mut app, "lang zh\nhelp\n");

        assert!(output.contains("已切換為繁體中文"));
        assert!(output.ends_with("再見!\n"));
        assert_eq!(app.settings().language, Language::ZhTw);

        let saved = SettingsStore::new(dir.path().join("settings.json")).load();
        assert_eq!(saved.language, Language::ZhTw);
        assert_eq!(saved.think_delay_ms, 0);
    }
}

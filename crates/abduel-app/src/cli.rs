use std::path::{Path, PathBuf};

use clap::Parser;

use crate::i18n::Language;

/// Play 1A2B against the computer in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Directory holding settings and match records.
    #[arg(long, value_name = "DIR", env = "ABDUEL_DATA_DIR", default_value = ".abduel")]
    pub data_dir: PathBuf,
    /// Seed for the computer's secrets and guesses, as 64 hex digits or any phrase.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<String>,
    /// Interface language (`en` or `zh-TW`); saved for later sessions.
    #[arg(long, value_name = "LANG")]
    pub lang: Option<Language>,
    /// Pause before each computer guess, for this session only.
    #[arg(long, value_name = "MILLIS")]
    pub think_ms: Option<u64>,
}

impl Args {
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    #[must_use]
    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join("matches.json")
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

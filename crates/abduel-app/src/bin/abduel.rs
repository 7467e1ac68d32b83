//! Abduel terminal application.
//!
//! Settings and finished games are kept under `--data-dir`.

use std::{
    fs,
    io,
    process::ExitCode,
    time::Duration,
};

use abduel_app::{
    App,
    cli::Args,
    match_store::MatchStore,
    settings::SettingsStore,
};
use abduel_game::{Game, GameConfig};
use abduel_generator::{CodeGenerator, GameSeed};
use clap::Parser as _;
use log::{error, info, warn};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = fs::create_dir_all(args.data_dir()) {
        error!("failed to create {}: {e}", args.data_dir().display());
        return ExitCode::FAILURE;
    }

    let settings_store = SettingsStore::new(args.settings_path());
    let mut settings = settings_store.load();
    if let Some(language) = args.lang
        && language != settings.language
    {
        settings.language = language;
        if let Err(e) = settings_store.save(&settings) {
            warn!("failed to save settings: {e}");
        }
    }

    let store = MatchStore::open(args.matches_path()).unwrap_or_else(|e| {
        warn!("failed to read match records: {e}; starting with none");
        MatchStore::empty(args.matches_path())
    });

    let seed = args
        .seed
        .as_deref()
        .map_or_else(GameSeed::random, GameSeed::from_hex_or_phrase);
    info!("seed: {seed}");

    let game = Game::with_recorder(store, CodeGenerator::with_seed(seed), GameConfig::default());
    let mut app = App::new(game, settings, settings_store, io::stdout());
    if let Some(millis) = args.think_ms {
        app.set_think_delay(Duration::from_millis(millis));
    }

    match app.run(io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("terminal I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}

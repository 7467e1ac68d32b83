//! Plays many games in which both sides deduce from candidate sets.
//!
//! The "human" side is simulated: it answers the computer truthfully and picks
//! its own guesses from the codes consistent with the feedback it received.
//! The example reports how many guesses the computer needed and how the games
//! ended.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example self_play
//! ```
//!
//! Play a different number of games from a fixed seed phrase:
//!
//! ```sh
//! cargo run --release --example self_play -- --games 2000 --seed "tuesday"
//! ```

use std::{collections::BTreeMap, process};

use abduel_core::{Feedback, FeedbackField};
use abduel_game::{FeedbackOutcome, Game, GameConfig, MatchRecord, Winner};
use abduel_generator::{CodeGenerator, GameSeed};
use abduel_solver::CandidateSet;
use clap::Parser;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of games to play.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    games: usize,

    /// Seed phrase or 64 hex characters. A random seed is used when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    let args = Args::parse();
    if args.games == 0 {
        eprintln!("--games must be at least 1.");
        process::exit(1);
    }
    let seed = args
        .seed
        .as_deref()
        .map_or_else(GameSeed::random, GameSeed::from_hex_or_phrase);

    let records = (0..args.games)
        .into_par_iter()
        .map(|i| play(seed.derive(&i.to_string())))
        .collect::<Vec<_>>();

    let mut attempts = BTreeMap::<u32, usize>::new();
    let mut winners = BTreeMap::<String, usize>::new();
    for record in &records {
        *attempts.entry(record.computer_attempts).or_default() += 1;
        *winners.entry(record.winner.to_string()).or_default() += 1;
    }

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Computer attempts:");
    for (count, games) in &attempts {
        println!("  {count:>2}: {games}");
    }
    let total: u64 = records
        .iter()
        .map(|record| u64::from(record.computer_attempts))
        .sum();
    #[expect(clippy::cast_precision_loss)]
    let mean = total as f64 / records.len() as f64;
    println!("  mean: {mean:.3}");
    println!();
    println!("Results:");
    for (winner, games) in &winners {
        println!("  {winner}: {games}");
    }
}

fn play(seed: GameSeed) -> MatchRecord {
    let mut game = Game::with_recorder(
        Vec::new(),
        CodeGenerator::with_seed(seed.derive("computer")),
        GameConfig::default(),
    );
    let mut human = CodeGenerator::with_seed(seed.derive("human"));
    let human_secret = human.generate_secret();
    game.start_new_game();

    while game.phase().is_in_progress() {
        if game.phase().is_human_turn() {
            let candidates = CandidateSet::recompute_from_history(game.human_history());
            let guess = human.pick_guess(&candidates).code();
            game.update_draft_guess(&guess.to_string()).unwrap();
            game.submit_guess().unwrap();
        } else {
            let guess = game.pending_guess().unwrap();
            let feedback = Feedback::calculate(&guess, &human_secret);
            game.update_draft_feedback(FeedbackField::A, feedback.a())
                .unwrap();
            game.update_draft_feedback(FeedbackField::B, feedback.b())
                .unwrap();
            let outcome = game.submit_feedback().unwrap();
            assert_ne!(outcome, FeedbackOutcome::Complaint);
        }
    }

    let record = game.recorder_mut().pop().unwrap();
    assert_ne!(record.winner, Winner::None);
    record
}

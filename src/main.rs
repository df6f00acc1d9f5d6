use log::info;
use std::env;

use othello_search::config::Config;
use othello_search::debug_logger::DebugLogger;
use othello_search::selfplay::SelfPlay;
use othello_search::types::Color;

fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    // Optional first argument overrides the config path
    let config = match env::args().nth(1) {
        Some(path) => Config::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => Config::load_or_default(),
    };

    info!(
        "Starting self-play: {} game(s) on {}x{}, {:?} vs {:?}",
        config.selfplay.games,
        config.board.size,
        config.board.size,
        config.search.algorithm,
        config.selfplay.opponent
    );

    let logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path);
    let records = SelfPlay::new(config, logger).run();

    let first_wins = records
        .iter()
        .filter(|r| r.winner() == Some(Color::First))
        .count();
    println!(
        "Engine (first) won {} of {} game(s)",
        first_wins,
        records.len()
    );
    for (i, record) in records.iter().enumerate() {
        println!(
            "Game {}: {} - {}\n{}",
            i + 1,
            record.final_score.0,
            record.final_score.1,
            record.final_board
        );
    }
}

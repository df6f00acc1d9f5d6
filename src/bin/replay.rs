// Standalone replay tool for decision logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --verbose              Show detailed output for each turn
//   --config <path>        Path to Engine.toml (default: Engine.toml)

use std::env;
use std::process;

use othello_search::config::Config;
use othello_search::replay::ReplayEngine;

fn print_usage() {
    eprintln!("Othello Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated, default: all)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --config <path>         Path to Engine.toml (default: Engine.toml)");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  replay othello_debug.jsonl");
    eprintln!("  replay othello_debug.jsonl --turns 0,2,4 --verbose");
}

fn parse_turns(s: &str) -> Result<Vec<u32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<u32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help") {
        print_usage();
        process::exit(if args.is_empty() { 1 } else { 0 });
    }

    let log_file = &args[0];
    let mut turns: Option<Vec<u32>> = None;
    let mut verbose = false;
    let mut config_path = "Engine.toml".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--turns" => {
                i += 1;
                let value = args.get(i).unwrap_or_else(|| fail("--turns needs a value"));
                turns = Some(parse_turns(value).unwrap_or_else(|e| fail(&e)));
            }
            "--verbose" => verbose = true,
            "--config" => {
                i += 1;
                config_path = args
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| fail("--config needs a value"));
            }
            other => {
                print_usage();
                fail(&format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    let config = Config::from_file(&config_path).unwrap_or_else(|e| fail(&e.to_string()));
    let engine = ReplayEngine::new(config, verbose);

    let entries = engine
        .load_log_file(log_file)
        .unwrap_or_else(|e| fail(&e.to_string()));

    let results = match turns {
        Some(turns) => engine
            .replay_turns(&entries, &turns)
            .unwrap_or_else(|e| fail(&e.to_string())),
        None => engine.replay_all(&entries),
    };

    engine.print_report(&results);
}

// Replay module for re-running logged decisions
//
// This module provides functionality to:
// 1. Parse JSONL decision logs
// 2. Re-run the move selector on the logged positions
// 3. Compare logged vs replayed moves
// 4. Summarize the comparison

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::Config;
use crate::debug_logger::DecisionLogEntry;
use crate::error::EngineError;
use crate::rules::Othello;
use crate::selector::MoveSelector;
use crate::types::{Move, Utility};

/// Result of replaying a single turn
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayResult {
    pub turn: u32,
    pub original_move: Move,
    pub replayed_move: Option<Move>,
    pub matches: bool,
    pub original_utility: Utility,
    pub replayed_utility: Option<Utility>,
    pub computation_time_ms: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default, PartialEq)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

impl ReplayStats {
    pub fn from_results(results: &[ReplayResult]) -> Self {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches: total_turns - matches,
            match_rate,
        }
    }
}

/// Replay engine for analyzing decision logs
pub struct ReplayEngine {
    config: Config,
    verbose: bool,
}

impl ReplayEngine {
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine { config, verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<DecisionLogEntry>, EngineError> {
        let log_path = log_path.as_ref();
        let file = File::open(log_path)
            .map_err(|e| EngineError::io(log_path.display().to_string(), e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| EngineError::io(log_path.display().to_string(), e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DecisionLogEntry = serde_json::from_str(&line).map_err(|e| {
                EngineError::LogEntry {
                    line: line_num + 1,
                    source: e,
                }
            })?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Re-runs the decision for one entry and compares the result
    pub fn replay_entry(&self, entry: &DecisionLogEntry) -> ReplayResult {
        let mut selector = MoveSelector::new(Othello, self.config.search);
        let decision = selector.decide(&entry.board, entry.color);

        let replayed_move = decision.as_ref().map(|d| d.chosen);
        let matches = replayed_move == Some(entry.chosen_move);
        let result = ReplayResult {
            turn: entry.turn,
            original_move: entry.chosen_move,
            replayed_move,
            matches,
            original_utility: entry.utility,
            replayed_utility: decision.as_ref().map(|d| d.utility),
            computation_time_ms: decision.as_ref().map_or(0, |d| d.elapsed_ms),
        };

        if matches {
            if self.verbose {
                info!(
                    "Turn {}: MATCH - {} (utility: {}, time: {}ms)",
                    entry.turn, entry.chosen_move, entry.utility, result.computation_time_ms
                );
            }
        } else {
            warn!(
                "Turn {}: MISMATCH - Original: {}, Replayed: {}",
                entry.turn,
                entry.chosen_move,
                replayed_move.map_or_else(|| "pass".to_string(), |mv| mv.to_string())
            );
        }

        result
    }

    /// Replays all entries in a log file
    pub fn replay_all(&self, entries: &[DecisionLogEntry]) -> Vec<ReplayResult> {
        entries.iter().map(|entry| self.replay_entry(entry)).collect()
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[DecisionLogEntry],
        turn_numbers: &[u32],
    ) -> Result<Vec<ReplayResult>, EngineError> {
        turn_numbers
            .iter()
            .map(|&turn| {
                let entry = entries
                    .iter()
                    .find(|e| e.turn == turn)
                    .ok_or(EngineError::MissingTurn(turn))?;
                Ok(self.replay_entry(entry))
            })
            .collect()
    }

    /// Prints a report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = ReplayStats::from_results(results);

        println!("\n===========================================================");
        println!("                    REPLAY REPORT");
        println!("===========================================================");
        println!("Total Turns:    {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("===========================================================\n");

        if !results.is_empty() {
            let avg_time: f64 = results.iter().map(|r| r.computation_time_ms as f64).sum::<f64>()
                / results.len() as f64;
            println!("Average Computation Time:   {:.1}ms\n", avg_time);
        }

        for result in results.iter().filter(|r| !r.matches) {
            println!(
                "Turn {}: {} -> {} (logged utility: {}, replayed: {})",
                result.turn,
                result.original_move,
                result.replayed_move.map_or_else(|| "pass".to_string(), |mv| mv.to_string()),
                result.original_utility,
                result
                    .replayed_utility
                    .map_or_else(|| "-".to_string(), |u| u.to_string())
            );
        }
    }
}

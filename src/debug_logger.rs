// Debug logging module for move decisions
//
// Each engine decision is appended to a JSONL file so it can be replayed
// later. Clones of a logger share one file handle.

use log::{error, info};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::Arc;

use crate::board::Board;
use crate::selector::{Decision, RootScore};
use crate::types::{Color, Move, Utility};

/// Represents a single debug log entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DecisionLogEntry {
    pub turn: u32,
    pub color: Color,
    pub board: Board,
    pub chosen_move: Move,
    pub utility: Utility,
    pub root_scores: Vec<RootScore>,
    pub timestamp: String,
}

impl DecisionLogEntry {
    pub fn new(turn: u32, color: Color, board: &Board, decision: &Decision) -> Self {
        DecisionLogEntry {
            turn,
            color,
            board: board.clone(),
            chosen_move: decision.chosen,
            utility: decision.utility,
            root_scores: decision.root_scores.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Shared debug logger state
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<BufWriter<File>>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(BufWriter::new(file)))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Appends one decision and flushes it to disk
    pub fn log_decision(&self, turn: u32, color: Color, board: &Board, decision: &Decision) {
        if !self.enabled {
            return;
        }

        let entry = DecisionLogEntry::new(turn, color, board, decision);
        let json_line = match serde_json::to_string(&entry) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to serialize debug log entry: {}", e);
                return;
            }
        };

        let mut guard = self.file.lock();
        if let Some(writer) = guard.as_mut() {
            if let Err(e) = writeln!(writer, "{}", json_line) {
                error!("Failed to write debug log entry: {}", e);
            } else if let Err(e) = writer.flush() {
                error!("Failed to flush debug log: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchStats;

    fn sample_decision() -> Decision {
        Decision {
            chosen: Move::new(2, 3),
            utility: 3,
            root_scores: vec![
                RootScore { mv: Move::new(2, 3), utility: 3 },
                RootScore { mv: Move::new(3, 2), utility: 3 },
            ],
            stats: SearchStats::default(),
            elapsed_ms: 1,
        }
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("off.jsonl");
        let logger = DebugLogger::new(false, path.to_str().unwrap());

        logger.log_decision(0, Color::First, &Board::new(8), &sample_decision());
        assert!(!logger.is_enabled());
        assert!(!path.exists());
    }

    #[test]
    fn test_clones_append_to_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decisions.jsonl");
        let logger = DebugLogger::new(true, path.to_str().unwrap());
        let clone = logger.clone();

        logger.log_decision(0, Color::First, &Board::new(8), &sample_decision());
        clone.log_decision(2, Color::First, &Board::new(8), &sample_decision());

        let contents = std::fs::read_to_string(&path).unwrap();
        let entries: Vec<DecisionLogEntry> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].turn, 2);
        assert_eq!(entries[0].chosen_move, Move::new(2, 3));
        assert_eq!(entries[0].board, Board::new(8));
    }

    #[test]
    fn test_unwritable_path_degrades_to_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("decisions.jsonl");
        let logger = DebugLogger::new(true, path.to_str().unwrap());
        assert!(!logger.is_enabled());
    }
}

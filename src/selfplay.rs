// Local game driver
//
// Plays complete Othello games with the engine as First. Second is either a
// second engine or a seeded random mover. A side without a legal move passes
// and the game ends when neither side can move.

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::Board;
use crate::config::{Config, Opponent};
use crate::debug_logger::DebugLogger;
use crate::rules::{Othello, Rules};
use crate::selector::MoveSelector;
use crate::types::{Color, Move};

/// One half-move; `mv` is `None` for a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    pub color: Color,
    pub mv: Option<Move>,
}

/// Everything that happened in one game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub plies: Vec<Ply>,
    pub final_board: Board,
    /// `(first discs, second discs)`
    pub final_score: (u32, u32),
}

impl GameRecord {
    /// `None` on a draw
    pub fn winner(&self) -> Option<Color> {
        let (first, second) = self.final_score;
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Color::First),
            std::cmp::Ordering::Less => Some(Color::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

pub struct SelfPlay {
    config: Config,
    logger: DebugLogger,
}

impl SelfPlay {
    pub fn new(config: Config, logger: DebugLogger) -> Self {
        SelfPlay { config, logger }
    }

    /// Plays every configured game, seeding game `i` with `seed + i`
    pub fn run(&self) -> Vec<GameRecord> {
        (0..self.config.selfplay.games)
            .map(|i| {
                let record = self.play_game(self.config.selfplay.seed.wrapping_add(i as u64));
                let (first, second) = record.final_score;
                info!(
                    "Game {} over after {} plies: {} - {} ({})",
                    i + 1,
                    record.plies.len(),
                    first,
                    second,
                    record.winner().map_or("draw", Color::as_str)
                );
                record
            })
            .collect()
    }

    /// Plays one game from the standard start position
    pub fn play_game(&self, seed: u64) -> GameRecord {
        let mut board = Board::new(self.config.board.size);
        let mut engine = MoveSelector::new(Othello, self.config.search);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut plies = Vec::new();
        let mut to_move = Color::First;
        let mut consecutive_passes = 0;
        let mut turn = 0u32;

        while consecutive_passes < 2 {
            let mv = match (to_move, self.config.selfplay.opponent) {
                (Color::Second, Opponent::Random) => {
                    let moves = Othello.possible_moves(&board, to_move);
                    moves.choose(&mut rng).copied()
                }
                _ => engine.decide(&board, to_move).map(|decision| {
                    self.logger.log_decision(turn, to_move, &board, &decision);
                    decision.chosen
                }),
            };

            match mv {
                Some(mv) => {
                    board = Othello.apply_move(&board, to_move, mv);
                    consecutive_passes = 0;
                }
                None => {
                    info!("Turn {}: {} passes", turn, to_move);
                    consecutive_passes += 1;
                }
            }

            plies.push(Ply { color: to_move, mv });
            to_move = to_move.opponent();
            turn += 1;
        }

        // The final two passes only confirm the game is over
        plies.truncate(plies.len() - 2);
        let final_score = Othello.score(&board);

        GameRecord {
            plies,
            final_board: board,
            final_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelfPlayConfig;

    fn small_config(opponent: Opponent) -> Config {
        let mut config = Config::default_hardcoded();
        config.board.size = 4;
        config.search.depth_limit = 2;
        config.selfplay = SelfPlayConfig {
            games: 2,
            seed: 3,
            opponent,
        };
        config
    }

    #[test]
    fn test_game_runs_to_completion() {
        let selfplay = SelfPlay::new(small_config(Opponent::Engine), DebugLogger::disabled());
        let record = selfplay.play_game(0);

        assert!(Othello.possible_moves(&record.final_board, Color::First).is_empty());
        assert!(Othello.possible_moves(&record.final_board, Color::Second).is_empty());
        let (first, second) = record.final_score;
        let placed = record.plies.iter().filter(|p| p.mv.is_some()).count() as u32;
        assert_eq!(first + second, 4 + placed);
    }

    #[test]
    fn test_random_opponent_is_reproducible_per_seed() {
        let selfplay = SelfPlay::new(small_config(Opponent::Random), DebugLogger::disabled());
        let a = selfplay.play_game(11);
        let b = selfplay.play_game(11);
        assert_eq!(a.plies, b.plies);
        assert_eq!(a.final_board, b.final_board);
    }

    #[test]
    fn test_run_plays_configured_number_of_games() {
        let selfplay = SelfPlay::new(small_config(Opponent::Random), DebugLogger::disabled());
        assert_eq!(selfplay.run().len(), 2);
    }
}

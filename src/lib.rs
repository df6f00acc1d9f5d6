//! Othello move selection by depth-limited game-tree search
//!
//! - [`search`]: minimax and alpha-beta searchers with a transposition cache
//! - [`selector`]: the per-turn driver that picks a move for one color
//! - [`rules`]: the rules-provider seam and the Othello implementation
//! - [`eval`]: material-count utility
//!
//! ```
//! use othello_search::board::Board;
//! use othello_search::config::SearchConfig;
//! use othello_search::rules::Othello;
//! use othello_search::selector::MoveSelector;
//! use othello_search::types::{Color, Move};
//!
//! let mut selector = MoveSelector::new(Othello, SearchConfig::default());
//! let mv = selector.select_move(&Board::new(8), Color::First).unwrap();
//! assert!([Move::new(2, 3), Move::new(3, 2), Move::new(4, 5), Move::new(5, 4)].contains(&mv));
//! ```

pub mod board;
pub mod config;
pub mod debug_logger;
pub mod error;
pub mod eval;
pub mod replay;
pub mod rules;
pub mod search;
pub mod selector;
pub mod selfplay;
pub mod types;

//! Reference minimax search
//!
//! Unpruned, unlimited search down to positions where the side to move has
//! no legal move. Only terminal values are cached; the value of an interior
//! node is returned to the caller, which may cache it itself.

use super::{NodeKind, SearchStats, TranspositionCache};
use crate::eval::compute_utility;
use crate::rules::Rules;
use crate::types::{Color, Utility};

/// Minimax over a borrowed rules provider and cache
pub struct MinimaxSearcher<'a, R: Rules + ?Sized> {
    rules: &'a R,
    cache: &'a mut TranspositionCache<R::Board>,
    stats: SearchStats,
}

impl<'a, R: Rules + ?Sized> MinimaxSearcher<'a, R> {
    pub fn new(rules: &'a R, cache: &'a mut TranspositionCache<R::Board>) -> Self {
        MinimaxSearcher {
            rules,
            cache,
            stats: SearchStats::default(),
        }
    }

    /// Value of `board` with the opponent of `color` to move
    pub fn min_node(&mut self, board: &R::Board, color: Color) -> Utility {
        self.node(board, color, NodeKind::Min, 1)
    }

    /// Value of `board` with `color` to move
    pub fn max_node(&mut self, board: &R::Board, color: Color) -> Utility {
        self.node(board, color, NodeKind::Max, 1)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn node(&mut self, board: &R::Board, color: Color, kind: NodeKind, ply: u32) -> Utility {
        self.stats.nodes += 1;

        // A hit short-circuits whichever node kind stored it
        if let Some(utility) = self.cache.probe(board) {
            self.stats.cache_hits += 1;
            return utility;
        }

        let mover = kind.mover(color);
        let moves = self.rules.possible_moves(board, mover);
        if moves.is_empty() {
            self.stats.terminals += 1;
            let utility = compute_utility(self.rules, board, color);
            self.cache.store(board.clone(), utility);
            return utility;
        }

        self.stats.record_expansion(ply);
        let mut best = kind.worst();
        for mv in moves {
            let child = self.rules.apply_move(board, mover, mv);
            let value = self.node(&child, color, kind.child(), ply + 1);
            best = kind.prefer(best, value);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::rules::Othello;
    use crate::types::Move;

    fn full_board() -> Board {
        Board::from_rows(&[
            vec![1, 1, 1, 1],
            vec![1, 2, 2, 1],
            vec![2, 2, 2, 2],
            vec![1, 1, 1, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_terminal_position_returns_static_utility() {
        let board = full_board();
        let mut cache = TranspositionCache::new();
        let mut searcher = MinimaxSearcher::new(&Othello, &mut cache);

        let expected = compute_utility(&Othello, &board, Color::First);
        assert_eq!(searcher.max_node(&board, Color::First), expected);
        assert_eq!(searcher.stats().terminals, 1);
        assert_eq!(cache.peek(&board), Some(expected));
    }

    #[test]
    fn test_single_forced_reply_is_followed() {
        // Only Second can move, at (0, 3); afterwards nobody can
        let board = Board::from_rows(&[
            vec![1, 1, 1, 0],
            vec![1, 1, 1, 1],
            vec![1, 1, 1, 1],
            vec![2, 1, 1, 1],
        ])
        .unwrap();
        assert_eq!(Othello.possible_moves(&board, Color::Second), vec![Move::new(0, 3)]);

        let after = Othello.apply_move(&board, Color::Second, Move::new(0, 3));
        let mut cache = TranspositionCache::new();
        let mut searcher = MinimaxSearcher::new(&Othello, &mut cache);
        let value = searcher.min_node(&board, Color::First);

        assert_eq!(value, compute_utility(&Othello, &after, Color::First));
        // Interior nodes stay uncached
        assert!(!cache.contains(&board));
        assert!(cache.contains(&after));
    }

    #[test]
    fn test_cache_hit_short_circuits() {
        let board = Board::new(4);
        let mut cache = TranspositionCache::new();
        cache.store(board.clone(), 42);

        let mut searcher = MinimaxSearcher::new(&Othello, &mut cache);
        assert_eq!(searcher.max_node(&board, Color::First), 42);
        assert_eq!(searcher.stats().cache_hits, 1);
        assert_eq!(searcher.stats().expansions, 0);
    }
}

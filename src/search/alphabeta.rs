//! Depth-limited alpha-beta search
//!
//! Same tree as [`super::MinimaxSearcher`] with three additions:
//!
//! - an `alpha`/`beta` window that prunes siblings once a node cannot
//!   influence its parent any more
//! - a ply counter `level` compared against `limit`; past the limit a node is
//!   scored with the static utility instead of being expanded
//! - move ordering so the moves most likely to cause a cutoff come first
//!
//! `level` starts at 0 for the first call. A node expands while
//! `level <= limit`, so `limit + 1` plies are searched before the cutoff.
//!
//! Only terminal and cutoff values go into the cache. Interior values may be
//! bounds rather than exact utilities when a cutoff fired, so they are never
//! stored here.

use super::{MoveOrdering, NodeKind, SearchStats, TranspositionCache};
use crate::eval::compute_utility;
use crate::rules::Rules;
use crate::types::{Color, Utility};

/// Default search horizon in plies
pub const DEFAULT_DEPTH_LIMIT: u32 = 4;

/// Alpha-beta over a borrowed rules provider and cache
pub struct AlphaBetaSearcher<'a, R: Rules + ?Sized> {
    rules: &'a R,
    cache: &'a mut TranspositionCache<R::Board>,
    ordering: MoveOrdering,
    stats: SearchStats,
}

impl<'a, R: Rules + ?Sized> AlphaBetaSearcher<'a, R> {
    pub fn new(
        rules: &'a R,
        cache: &'a mut TranspositionCache<R::Board>,
        ordering: MoveOrdering,
    ) -> Self {
        AlphaBetaSearcher {
            rules,
            cache,
            ordering,
            stats: SearchStats::default(),
        }
    }

    /// Value of `board` with the opponent of `color` to move
    pub fn min_node(
        &mut self,
        board: &R::Board,
        color: Color,
        alpha: Utility,
        beta: Utility,
        level: u32,
        limit: u32,
    ) -> Utility {
        self.node(board, color, NodeKind::Min, alpha, beta, level, limit)
    }

    /// Value of `board` with `color` to move
    pub fn max_node(
        &mut self,
        board: &R::Board,
        color: Color,
        alpha: Utility,
        beta: Utility,
        level: u32,
        limit: u32,
    ) -> Utility {
        self.node(board, color, NodeKind::Max, alpha, beta, level, limit)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[allow(clippy::too_many_arguments)]
    fn node(
        &mut self,
        board: &R::Board,
        color: Color,
        kind: NodeKind,
        mut alpha: Utility,
        mut beta: Utility,
        level: u32,
        limit: u32,
    ) -> Utility {
        self.stats.nodes += 1;

        // Past the horizon the static utility stands in for the real value
        if level > limit {
            self.stats.horizon_evals += 1;
            let utility = compute_utility(self.rules, board, color);
            self.cache.store_if_absent(board.clone(), utility);
            return utility;
        }
        let level = level + 1;

        if let Some(utility) = self.cache.probe(board) {
            self.stats.cache_hits += 1;
            return utility;
        }

        let moves = self.rules.possible_moves(board, kind.mover(color));
        if moves.is_empty() {
            self.stats.terminals += 1;
            let utility = compute_utility(self.rules, board, color);
            self.cache.store(board.clone(), utility);
            return utility;
        }

        self.stats.record_expansion(level);
        let children = self
            .ordering
            .order_children(self.rules, board, color, kind, moves);
        let remaining = children.len() as u64;

        let mut best = kind.worst();
        for (visited, (_, child)) in children.iter().enumerate() {
            let value = self.node(child, color, kind.child(), alpha, beta, level, limit);
            best = kind.prefer(best, value);

            let cutoff = match kind {
                NodeKind::Max => best >= beta,
                NodeKind::Min => best <= alpha,
            };
            if cutoff {
                self.stats.cutoffs += remaining - visited as u64 - 1;
                return best;
            }

            match kind {
                NodeKind::Max => alpha = alpha.max(best),
                NodeKind::Min => beta = beta.min(best),
            }
        }
        best
    }
}

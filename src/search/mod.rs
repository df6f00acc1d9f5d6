//! Game-tree search
//!
//! Contains:
//! - Transposition cache scoped to one move decision
//! - Move ordering policies
//! - Reference minimax search to terminal positions
//! - Depth-limited alpha-beta search
//!
//! Both searchers use a single recursive routine parameterized by
//! [`NodeKind`] instead of a pair of mutually recursive min/max functions.
//! Utilities are always expressed from the color of interest; min nodes are
//! the opponent's turn, max nodes are the color of interest's turn.

pub mod alphabeta;
pub mod cache;
pub mod minimax;
pub mod ordering;

pub use alphabeta::AlphaBetaSearcher;
pub use cache::{CacheStats, TranspositionCache};
pub use minimax::MinimaxSearcher;
pub use ordering::MoveOrdering;

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::types::{Color, Utility, UTILITY_MAX, UTILITY_MIN};

/// Which searcher the move selector runs below each root move
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Unpruned search all the way to terminal positions
    Minimax,
    /// Pruned search with a depth cutoff
    AlphaBeta,
}

/// Role of a node in the search tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The color of interest moves and maximizes
    Max,
    /// The opponent moves and minimizes
    Min,
}

impl NodeKind {
    /// Color whose moves are enumerated at this node
    #[inline]
    pub fn mover(self, color: Color) -> Color {
        match self {
            NodeKind::Max => color,
            NodeKind::Min => color.opponent(),
        }
    }

    /// Kind of the nodes one ply below
    #[inline]
    pub fn child(self) -> NodeKind {
        match self {
            NodeKind::Max => NodeKind::Min,
            NodeKind::Min => NodeKind::Max,
        }
    }

    /// Initial accumulator before any child is seen
    #[inline]
    pub fn worst(self) -> Utility {
        match self {
            NodeKind::Max => UTILITY_MIN,
            NodeKind::Min => UTILITY_MAX,
        }
    }

    /// Keeps whichever value this side prefers
    #[inline]
    pub fn prefer(self, best: Utility, value: Utility) -> Utility {
        match self {
            NodeKind::Max => best.max(value),
            NodeKind::Min => best.min(value),
        }
    }
}

/// Counters collected while searching
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the recursive node routine
    pub nodes: u64,
    /// Nodes whose children were generated
    pub expansions: u64,
    /// Nodes where the side to move had no legal move
    pub terminals: u64,
    /// Nodes below the depth limit scored statically
    pub horizon_evals: u64,
    /// Remaining siblings skipped by alpha or beta cutoffs
    pub cutoffs: u64,
    pub cache_hits: u64,
    /// Deepest ply at which a node was expanded (1 = the node a searcher was started on)
    pub deepest_expansion: u32,
}

impl SearchStats {
    pub(crate) fn record_expansion(&mut self, ply: u32) {
        self.expansions += 1;
        self.deepest_expansion = self.deepest_expansion.max(ply);
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.expansions += other.expansions;
        self.terminals += other.terminals;
        self.horizon_evals += other.horizon_evals;
        self.cutoffs += other.cutoffs;
        self.cache_hits += other.cache_hits;
        self.deepest_expansion = self.deepest_expansion.max(other.deepest_expansion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_alternates_movers() {
        assert_eq!(NodeKind::Max.mover(Color::First), Color::First);
        assert_eq!(NodeKind::Min.mover(Color::First), Color::Second);
        assert_eq!(NodeKind::Max.child(), NodeKind::Min);
        assert_eq!(NodeKind::Min.child(), NodeKind::Max);
    }

    #[test]
    fn test_worst_is_identity_for_prefer() {
        for kind in [NodeKind::Max, NodeKind::Min] {
            assert_eq!(kind.prefer(kind.worst(), 7), 7);
            assert_eq!(kind.prefer(kind.worst(), -7), -7);
        }
        assert_eq!(NodeKind::Max.prefer(3, 5), 5);
        assert_eq!(NodeKind::Min.prefer(3, 5), 3);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats {
            nodes: 10,
            deepest_expansion: 2,
            ..SearchStats::default()
        };
        total += SearchStats {
            nodes: 5,
            cutoffs: 1,
            deepest_expansion: 4,
            ..SearchStats::default()
        };
        assert_eq!(total.nodes, 15);
        assert_eq!(total.cutoffs, 1);
        assert_eq!(total.deepest_expansion, 4);
    }
}

// Top-level move selection
//
// One call to `decide` is one move decision: clear the cache, score every
// root move with the configured searcher, keep the first strictly best move.

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::SearchConfig;
use crate::rules::Rules;
use crate::search::{
    AlphaBetaSearcher, Algorithm, MinimaxSearcher, SearchStats, TranspositionCache,
};
use crate::types::{Color, Move, Utility, UTILITY_MAX, UTILITY_MIN};

/// Utility of one root move, from the deciding color's side
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootScore {
    #[serde(rename = "move")]
    pub mv: Move,
    pub utility: Utility,
}

/// Outcome of one move decision
#[derive(Debug, Clone)]
pub struct Decision {
    pub chosen: Move,
    pub utility: Utility,
    /// Every root move in enumeration order
    pub root_scores: Vec<RootScore>,
    pub stats: SearchStats,
    pub elapsed_ms: u128,
}

/// Picks moves for one color at a time, owning the transposition cache
pub struct MoveSelector<R: Rules> {
    rules: R,
    settings: SearchConfig,
    cache: TranspositionCache<R::Board>,
}

impl<R> MoveSelector<R>
where
    R: Rules + Sync,
    R::Board: Send + Sync,
{
    pub fn new(rules: R, settings: SearchConfig) -> Self {
        MoveSelector {
            rules,
            settings,
            cache: TranspositionCache::new(),
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn settings(&self) -> &SearchConfig {
        &self.settings
    }

    /// Cache contents left behind by the last sequential decision
    pub fn cache(&self) -> &TranspositionCache<R::Board> {
        &self.cache
    }

    /// Best move for `color`, or `None` when `color` has no legal move
    pub fn select_move(&mut self, board: &R::Board, color: Color) -> Option<Move> {
        self.decide(board, color).map(|decision| decision.chosen)
    }

    /// Runs a full decision and reports how the move was chosen
    pub fn decide(&mut self, board: &R::Board, color: Color) -> Option<Decision> {
        let start_time = Instant::now();

        // Entries are only valid for the color they were computed for
        self.cache.clear();

        let moves = self.rules.possible_moves(board, color);
        if moves.is_empty() {
            info!("No legal moves for {}", color);
            return None;
        }

        info!(
            "Evaluating {} root moves for {} ({:?}, limit {})",
            moves.len(),
            color,
            self.settings.algorithm,
            self.settings.depth_limit
        );

        let mut stats = SearchStats::default();
        let root_scores = if self.settings.parallel_root {
            self.score_parallel(board, color, &moves, &mut stats)
        } else {
            self.score_sequential(board, color, &moves, &mut stats)
        };

        // Strictly greater only, so ties keep the earliest enumerated move
        let mut best: Option<RootScore> = None;
        for score in &root_scores {
            debug!("  {} -> {}", score.mv, score.utility);
            if best.map_or(true, |b| score.utility > b.utility) {
                best = Some(*score);
            }
        }
        let best = best?;

        let elapsed_ms = start_time.elapsed().as_millis();
        info!(
            "{} chose {} (utility: {}, nodes: {}, cutoffs: {}, time: {}ms)",
            color, best.mv, best.utility, stats.nodes, stats.cutoffs, elapsed_ms
        );

        Some(Decision {
            chosen: best.mv,
            utility: best.utility,
            root_scores,
            stats,
            elapsed_ms,
        })
    }

    fn score_sequential(
        &mut self,
        board: &R::Board,
        color: Color,
        moves: &[Move],
        stats: &mut SearchStats,
    ) -> Vec<RootScore> {
        let mut scores = Vec::with_capacity(moves.len());
        for &mv in moves {
            let child = self.rules.apply_move(board, color, mv);
            let utility =
                score_root_child(&self.rules, &self.settings, &mut self.cache, &child, color, stats);
            scores.push(RootScore { mv, utility });
        }
        scores
    }

    /// Each root move gets a private cache; results keep enumeration order
    fn score_parallel(
        &self,
        board: &R::Board,
        color: Color,
        moves: &[Move],
        stats: &mut SearchStats,
    ) -> Vec<RootScore> {
        let rules = &self.rules;
        let settings = &self.settings;

        let results: Vec<(RootScore, SearchStats)> = moves
            .par_iter()
            .map(|&mv| {
                let child = rules.apply_move(board, color, mv);
                let mut cache = TranspositionCache::new();
                let mut local = SearchStats::default();
                let utility = score_root_child(rules, settings, &mut cache, &child, color, &mut local);
                (RootScore { mv, utility }, local)
            })
            .collect();

        results
            .into_iter()
            .map(|(score, local)| {
                *stats += local;
                score
            })
            .collect()
    }
}

/// Scores a root child from the opponent's reply, caching the result under the child
fn score_root_child<R: Rules + ?Sized>(
    rules: &R,
    settings: &SearchConfig,
    cache: &mut TranspositionCache<R::Board>,
    child: &R::Board,
    color: Color,
    stats: &mut SearchStats,
) -> Utility {
    if let Some(utility) = cache.probe(child) {
        stats.cache_hits += 1;
        return utility;
    }

    let utility = match settings.algorithm {
        Algorithm::Minimax => {
            let mut searcher = MinimaxSearcher::new(rules, cache);
            let utility = searcher.min_node(child, color);
            *stats += searcher.stats();
            utility
        }
        Algorithm::AlphaBeta => {
            let mut searcher = AlphaBetaSearcher::new(rules, cache, settings.move_ordering);
            let utility =
                searcher.min_node(child, color, UTILITY_MIN, UTILITY_MAX, 0, settings.depth_limit);
            *stats += searcher.stats();
            utility
        }
    };

    cache.store(child.clone(), utility);
    utility
}

// Integration tests for the move selector's decision-level guarantees
//
// Tie-break and cache-reset behavior are checked on small scripted game trees
// where every utility is chosen by hand, then once more on real positions.

use std::collections::HashMap;

use othello_search::board::Board;
use othello_search::config::SearchConfig;
use othello_search::rules::{Othello, Rules};
use othello_search::search::Algorithm;
use othello_search::selector::MoveSelector;
use othello_search::types::{Color, Move};

/// Game tree over integer node ids with hand-picked moves and disc counts
#[derive(Default)]
struct ScriptedTree {
    moves: HashMap<(u32, Color), Vec<(Move, u32)>>,
    scores: HashMap<u32, (u32, u32)>,
}

impl ScriptedTree {
    fn edge(mut self, from: u32, color: Color, mv: Move, to: u32) -> Self {
        self.moves.entry((from, color)).or_default().push((mv, to));
        self
    }

    fn score(mut self, node: u32, first: u32, second: u32) -> Self {
        self.scores.insert(node, (first, second));
        self
    }
}

impl Rules for ScriptedTree {
    type Board = u32;

    fn possible_moves(&self, board: &u32, color: Color) -> Vec<Move> {
        self.moves
            .get(&(*board, color))
            .map(|edges| edges.iter().map(|(mv, _)| *mv).collect())
            .unwrap_or_default()
    }

    fn apply_move(&self, board: &u32, color: Color, mv: Move) -> u32 {
        self.moves[&(*board, color)]
            .iter()
            .find(|(candidate, _)| *candidate == mv)
            .map(|(_, to)| *to)
            .expect("scripted move must exist")
    }

    fn score(&self, board: &u32) -> (u32, u32) {
        self.scores.get(board).copied().unwrap_or((0, 0))
    }
}

fn both_algorithms() -> [SearchConfig; 2] {
    [
        SearchConfig::default(),
        SearchConfig {
            algorithm: Algorithm::Minimax,
            ..SearchConfig::default()
        },
    ]
}

#[test]
fn test_ties_keep_first_enumerated_move() {
    // Enumeration order deliberately differs from coordinate order
    let tree = || {
        ScriptedTree::default()
            .edge(0, Color::First, Move::new(0, 5), 1)
            .edge(0, Color::First, Move::new(0, 1), 2)
            .edge(0, Color::First, Move::new(0, 0), 3)
            .score(1, 3, 1)
            .score(2, 3, 1)
            .score(3, 1, 3)
    };

    for settings in both_algorithms() {
        let mut selector = MoveSelector::new(tree(), settings);
        let decision = selector.decide(&0, Color::First).unwrap();
        assert_eq!(decision.chosen, Move::new(0, 5));
        assert_eq!(decision.utility, 2);
        assert_eq!(
            decision.root_scores.iter().map(|s| s.utility).collect::<Vec<_>>(),
            vec![2, 2, -2]
        );
    }
}

#[test]
fn test_later_strictly_better_move_wins() {
    let tree = ScriptedTree::default()
        .edge(0, Color::Second, Move::new(1, 1), 1)
        .edge(0, Color::Second, Move::new(1, 2), 2)
        .score(1, 2, 2)
        .score(2, 1, 3);

    let mut selector = MoveSelector::new(tree, SearchConfig::default());
    assert_eq!(selector.select_move(&0, Color::Second), Some(Move::new(1, 2)));
}

#[test]
fn test_opponent_reply_is_minimized() {
    // Root move (0, 0) looks good statically but lets Second reply into a loss
    let tree = ScriptedTree::default()
        .edge(0, Color::First, Move::new(0, 0), 1)
        .edge(0, Color::First, Move::new(0, 1), 2)
        .edge(1, Color::Second, Move::new(1, 0), 3)
        .edge(1, Color::Second, Move::new(1, 1), 4)
        .score(1, 9, 1)
        .score(2, 4, 2)
        .score(3, 6, 2)
        .score(4, 1, 7);

    for settings in both_algorithms() {
        let decision = MoveSelector::new(ScriptedTreeRef(&tree), settings)
            .decide(&0, Color::First)
            .unwrap();
        assert_eq!(decision.chosen, Move::new(0, 1));
        assert_eq!(decision.root_scores[0].utility, -6);
        assert_eq!(decision.root_scores[1].utility, 2);
    }
}

/// Lets several selectors share one scripted tree
struct ScriptedTreeRef<'a>(&'a ScriptedTree);

impl Rules for ScriptedTreeRef<'_> {
    type Board = u32;

    fn possible_moves(&self, board: &u32, color: Color) -> Vec<Move> {
        self.0.possible_moves(board, color)
    }

    fn apply_move(&self, board: &u32, color: Color, mv: Move) -> u32 {
        self.0.apply_move(board, color, mv)
    }

    fn score(&self, board: &u32) -> (u32, u32) {
        self.0.score(board)
    }
}

#[test]
fn test_cache_is_reset_between_decisions() {
    // Node 9 is terminal and reachable from both roots. First decides at root
    // 0 (caching 9 as +4 for First), then Second decides at root 20, where 9
    // is worth -4 to Second.
    let tree = ScriptedTree::default()
        .edge(0, Color::First, Move::new(0, 0), 9)
        .edge(20, Color::Second, Move::new(1, 1), 9)
        .edge(20, Color::Second, Move::new(1, 2), 21)
        .score(9, 5, 1)
        .score(21, 2, 2);

    for settings in both_algorithms() {
        let mut selector = MoveSelector::new(ScriptedTreeRef(&tree), settings);
        let first = selector.decide(&0, Color::First).unwrap();
        assert_eq!(first.utility, 4);

        let second = selector.decide(&20, Color::Second).unwrap();
        assert_eq!(second.chosen, Move::new(1, 2));
        assert_eq!(second.root_scores[0].utility, -4);

        let fresh = MoveSelector::new(ScriptedTreeRef(&tree), settings)
            .decide(&20, Color::Second)
            .unwrap();
        assert_eq!(second.root_scores, fresh.root_scores);
    }
}

#[test]
fn test_successive_othello_decisions_match_fresh_selectors() {
    let start = Board::new(6);
    let after_first = Othello.apply_move(&start, Color::First, Move::new(1, 2));

    let mut shared = MoveSelector::new(Othello, SearchConfig::default());
    let _ = shared.decide(&start, Color::First).unwrap();
    let reused = shared.decide(&after_first, Color::Second).unwrap();
    let reused_again = shared.decide(&start, Color::First).unwrap();

    let fresh = MoveSelector::new(Othello, SearchConfig::default())
        .decide(&after_first, Color::Second)
        .unwrap();
    let fresh_again = MoveSelector::new(Othello, SearchConfig::default())
        .decide(&start, Color::First)
        .unwrap();

    assert_eq!(reused.root_scores, fresh.root_scores);
    assert_eq!(reused.chosen, fresh.chosen);
    assert_eq!(reused_again.root_scores, fresh_again.root_scores);
}

#[test]
fn test_no_legal_move_is_reported_as_none() {
    let tree = ScriptedTree::default().score(0, 3, 3);
    let mut selector = MoveSelector::new(tree, SearchConfig::default());
    assert!(selector.decide(&0, Color::First).is_none());
    assert!(selector.cache().is_empty());
}

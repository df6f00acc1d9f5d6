// Rules provider seam and the Othello implementation
//
// The searchers only ever talk to a game through the `Rules` trait: move
// enumeration, successor generation and the disc tally.

use std::hash::Hash;

use crate::board::Board;
use crate::types::{Color, Move};

/// Contract the search core consumes.
///
/// Implementations must be deterministic: the same board and color always
/// enumerate the same moves in the same order.
pub trait Rules {
    /// Immutable game state. Must hash and compare structurally.
    type Board: Clone + Eq + Hash;

    /// Legal moves for `color`. Empty means `color` cannot move.
    fn possible_moves(&self, board: &Self::Board, color: Color) -> Vec<Move>;

    /// Successor position. `mv` must be one of `possible_moves(board, color)`.
    fn apply_move(&self, board: &Self::Board, color: Color, mv: Move) -> Self::Board;

    /// `(first count, second count)`
    fn score(&self, board: &Self::Board) -> (u32, u32);
}

/// All eight line directions as (row delta, col delta)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Standard Othello line-capture rules
#[derive(Debug, Clone, Copy, Default)]
pub struct Othello;

impl Othello {
    /// Collects every disc that placing `color` at `(row, col)` would flip
    fn captured_discs(board: &Board, row: usize, col: usize, color: Color) -> Vec<(usize, usize)> {
        let mut captured = Vec::new();
        if board.get(row, col).is_some() {
            return captured;
        }

        let opponent = color.opponent();
        for (dr, dc) in DIRECTIONS {
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            let mut line = Vec::new();

            while board.contains(r, c) && board.get(r as usize, c as usize) == Some(opponent) {
                line.push((r as usize, c as usize));
                r += dr;
                c += dc;
            }

            if !line.is_empty() && board.contains(r, c) && board.get(r as usize, c as usize) == Some(color) {
                captured.extend(line);
            }
        }

        captured
    }
}

impl Rules for Othello {
    type Board = Board;

    fn possible_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let size = board.size();
        let mut moves = Vec::new();
        for row in 0..size {
            for col in 0..size {
                if !Self::captured_discs(board, row, col, color).is_empty() {
                    moves.push(Move::new(row as u8, col as u8));
                }
            }
        }
        moves
    }

    fn apply_move(&self, board: &Board, color: Color, mv: Move) -> Board {
        let (row, col) = (mv.row as usize, mv.col as usize);
        assert!(
            row < board.size() && col < board.size(),
            "move {:?} is off a {}x{} board",
            mv,
            board.size(),
            board.size()
        );

        let captured = Self::captured_discs(board, row, col, color);
        assert!(
            !captured.is_empty(),
            "illegal move {:?} for {}: nothing captured",
            mv,
            color
        );

        let mut next = board.clone();
        next.set(row, col, Some(color));
        for (r, c) in captured {
            next.set(r, c, Some(color));
        }
        next
    }

    fn score(&self, board: &Board) -> (u32, u32) {
        (board.count(Color::First), board.count(Color::Second))
    }
}

// Material-count utility
//
// The only heuristic the engine uses: disc difference from one color's side.
// Terminal positions and depth-cutoff positions are both scored with it.

use crate::rules::Rules;
use crate::types::{Color, Utility};

/// Returns (discs of `color`) - (discs of the opponent)
pub fn compute_utility<R: Rules + ?Sized>(rules: &R, board: &R::Board, color: Color) -> Utility {
    let (first, second) = rules.score(board);
    let (first, second) = (first as Utility, second as Utility);
    match color {
        Color::First => first - second,
        Color::Second => second - first,
    }
}

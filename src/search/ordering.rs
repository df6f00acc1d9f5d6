//! Move ordering for alpha-beta
//!
//! Children are generated once here and handed back in visiting order so the
//! searcher never applies a move twice.

use serde::{Deserialize, Serialize};

use super::NodeKind;
use crate::eval::compute_utility;
use crate::rules::Rules;
use crate::types::{Color, Move, Utility};

/// Order in which alpha-beta visits the moves of a node
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrdering {
    /// Key each move by the static utility of the position it reaches.
    /// Min nodes try the lowest key first, max nodes the highest.
    #[default]
    ResultingPosition,
    /// Every move shares one key, so moves are visited in coordinate order
    Coordinate,
}

impl MoveOrdering {
    /// Applies `moves` for the side to move at a `kind` node and sorts the children
    pub fn order_children<R: Rules + ?Sized>(
        self,
        rules: &R,
        board: &R::Board,
        color: Color,
        kind: NodeKind,
        moves: Vec<Move>,
    ) -> Vec<(Move, R::Board)> {
        let mover = kind.mover(color);
        let children = moves
            .into_iter()
            .map(|mv| (mv, rules.apply_move(board, mover, mv)));

        match self {
            MoveOrdering::Coordinate => {
                let mut children: Vec<_> = children.collect();
                children.sort_by_key(|(mv, _)| *mv);
                children
            }
            MoveOrdering::ResultingPosition => {
                let mut keyed: Vec<(Utility, Move, R::Board)> = children
                    .map(|(mv, child)| {
                        let utility = compute_utility(rules, &child, color);
                        let key = match kind {
                            NodeKind::Min => utility,
                            NodeKind::Max => -utility,
                        };
                        (key, mv, child)
                    })
                    .collect();
                keyed.sort_by_key(|(key, mv, _)| (*key, *mv));
                keyed.into_iter().map(|(_, mv, child)| (mv, child)).collect()
            }
        }
    }
}

// Core value types shared by the rules, the evaluator and the searchers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Utility of a position from one color's point of view.
///
/// Real utilities are material differences and always lie well inside
/// `UTILITY_MIN..=UTILITY_MAX`. The two bounds are only used as initial
/// accumulators and alpha/beta window edges and are never cached.
pub type Utility = i32;

/// Stand-in for +infinity in search windows
pub const UTILITY_MAX: Utility = i32::MAX;

/// Stand-in for -infinity in search windows
pub const UTILITY_MIN: Utility = -i32::MAX;

/// One of the two players. First moves first (dark discs).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    First,
    Second,
}

impl Color {
    /// Returns both colors in turn order
    pub fn all() -> [Color; 2] {
        [Color::First, Color::Second]
    }

    /// Returns the other player
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }

    /// Numeric encoding used by the game-manager protocol (1 = dark, 2 = light)
    pub fn as_u8(self) -> u8 {
        match self {
            Color::First => 1,
            Color::Second => 2,
        }
    }

    /// Inverse of [`Color::as_u8`]
    pub fn from_u8(value: u8) -> Option<Color> {
        match value {
            1 => Some(Color::First),
            2 => Some(Color::Second),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::First => "first",
            Color::Second => "second",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placement at `(row, col)`.
///
/// Ordering is row-major, which is also the coordinate tie-break used by
/// move ordering.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

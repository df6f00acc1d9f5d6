// Othello board representation
//
// A board is an immutable square grid of optional discs. Equality and hashing
// are structural so that boards can key the transposition cache.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;
use crate::types::{Color, Move};

/// Smallest board the rules accept
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest board the rules accept (coordinates must fit in a `u8`)
pub const MAX_BOARD_SIZE: usize = 26;

/// Full game state: `size * size` cells in row-major order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Creates the standard starting position with four discs in the center
    ///
    /// # Panics
    /// If `size` is odd or outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
    pub fn new(size: usize) -> Self {
        assert!(
            Self::is_valid_size(size),
            "board size must be even and within {}..={}, got {}",
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE,
            size
        );

        let mut board = Board {
            size,
            cells: vec![None; size * size],
        };
        let i = size / 2;
        board.set(i - 1, i - 1, Some(Color::Second));
        board.set(i, i, Some(Color::Second));
        board.set(i - 1, i, Some(Color::First));
        board.set(i, i - 1, Some(Color::First));
        board
    }

    /// Parses the protocol row encoding (0 = empty, 1 = first, 2 = second)
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, EngineError> {
        let size = rows.len();
        if !Self::is_valid_size(size) {
            return Err(EngineError::InvalidBoard(format!(
                "unsupported board size {}",
                size
            )));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row_idx,
                    row.len(),
                    size
                )));
            }
            for &value in row {
                let cell = match value {
                    0 => None,
                    v => Some(Color::from_u8(v).ok_or_else(|| {
                        EngineError::InvalidBoard(format!(
                            "unknown cell value {} in row {}",
                            v, row_idx
                        ))
                    })?),
                };
                cells.push(cell);
            }
        }

        Ok(Board { size, cells })
    }

    /// Renders the protocol row encoding
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.map_or(0, Color::as_u8)).collect())
            .collect()
    }

    fn is_valid_size(size: usize) -> bool {
        size % 2 == 0 && (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Disc at `(row, col)`, `None` for an empty square
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn at(&self, mv: Move) -> Option<Color> {
        self.get(mv.row as usize, mv.col as usize)
    }

    /// Only the rules may produce new positions, and only on fresh copies
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Option<Color>) {
        self.cells[row * self.size + col] = cell;
    }

    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Number of discs of the given color
    pub fn count(&self, color: Color) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(color)).count() as u32
    }

    pub fn empty_squares(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let glyph = match self.get(row, col) {
                    None => '.',
                    Some(Color::First) => 'X',
                    Some(Color::Second) => 'O',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

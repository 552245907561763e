//! Board coordinates and compass directions.
//!
//! The board is a fixed 5x5 square. `Position` is a plain value type;
//! arithmetic that would leave the board yields `None` instead of
//! clamping, so callers can never silently walk off the edge.

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 5;

/// A cell coordinate, row-major, both components in `0..BOARD_SIZE`.
///
/// ```
/// use santorini_core::core::Position;
///
/// let center = Position::new(2, 2);
/// assert_eq!(center.offset(1, -1), Some(Position::new(3, 1)));
/// assert_eq!(Position::new(0, 0).offset(-1, 0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: u8,
    /// Column index, 0 at the left.
    pub col: u8,
}

impl Position {
    /// Create a position. Components outside the board are representable
    /// but rejected by every consuming operation; see [`Position::is_in_bounds`].
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check that both components lie on the board.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Translate by a signed delta, returning `None` if the result
    /// leaves the board.
    #[must_use]
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(drow);
        let col = i16::from(self.col) + i16::from(dcol);
        if (0..i16::from(BOARD_SIZE)).contains(&row) && (0..i16::from(BOARD_SIZE)).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Step one cell in a compass direction, clipped to the board.
    #[must_use]
    pub fn towards(self, direction: Direction) -> Option<Self> {
        let (drow, dcol) = direction.delta();
        self.offset(drow, dcol)
    }

    /// Chebyshev (king-move) distance to another position.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u8 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight compass directions a worker can move or build in.
///
/// Each direction maps to a `(row, col)` delta; north decreases the row.
/// Translating an interactive label ("ne", "sw", ...) into a variant is
/// the driving shell's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
    ];

    /// The `(row, col)` delta for one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::Northeast => (-1, 1),
            Direction::East => (0, 1),
            Direction::Southeast => (1, 1),
            Direction::South => (1, 0),
            Direction::Southwest => (1, -1),
            Direction::West => (0, -1),
            Direction::Northwest => (-1, -1),
        }
    }
}

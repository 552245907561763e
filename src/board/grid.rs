//! The 5x5 grid of building heights.
//!
//! Heights run 0 through 4. Level 3 is the winning story; level 4 is a
//! completed tower that can never be built on or moved onto. Heights
//! only ever increase, one level per build.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Position, BOARD_SIZE};

/// A ring of neighboring positions, at most eight entries.
pub type Ring = SmallVec<[Position; 8]>;

/// Building heights for every cell of the board.
///
/// The grid owns heights and nothing else; worker placement lives in
/// [`Occupancy`](crate::board::Occupancy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    heights: [[u8; Grid::SIZE]; Grid::SIZE],
}

impl Grid {
    /// Side length of the board.
    pub const SIZE: usize = BOARD_SIZE as usize;

    /// A completed tower. Impassable and unbuildable.
    pub const MAX_HEIGHT: u8 = 4;

    /// The third story. Standing here wins the game.
    pub const WIN_HEIGHT: u8 = 3;

    /// An empty board, every height zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heights: [[0; Grid::SIZE]; Grid::SIZE],
        }
    }

    /// Rebuild a grid from raw heights, e.g. when restoring a snapshot.
    #[must_use]
    pub fn from_heights(heights: [[u8; Grid::SIZE]; Grid::SIZE]) -> Self {
        debug_assert!(heights
            .iter()
            .flatten()
            .all(|&h| h <= Grid::MAX_HEIGHT));
        Self { heights }
    }

    /// The full height matrix, copied out by value.
    #[must_use]
    pub fn heights(&self) -> [[u8; Grid::SIZE]; Grid::SIZE] {
        self.heights
    }

    /// Building height at a position.
    #[must_use]
    pub fn height(&self, pos: Position) -> u8 {
        self.heights[pos.row as usize][pos.col as usize]
    }

    /// Whether the cell carries a completed tower.
    #[must_use]
    pub fn is_capped(&self, pos: Position) -> bool {
        self.height(pos) >= Grid::MAX_HEIGHT
    }

    /// Add one story at a position. A completed tower is left untouched;
    /// the rules layer rejects such a build before it gets here.
    pub fn build(&mut self, pos: Position) {
        let cell = &mut self.heights[pos.row as usize][pos.col as usize];
        if *cell < Grid::MAX_HEIGHT {
            *cell += 1;
        }
    }

    /// The up-to-eight positions at Chebyshev distance 1, clipped to the
    /// board. Corner cells yield 3 neighbors, edge cells 5, interior
    /// cells 8. The center position itself is never included. Move and
    /// build enumeration both use this same ring.
    #[must_use]
    pub fn ring(pos: Position) -> Ring {
        let mut out = Ring::new();
        for drow in -1i8..=1 {
            for dcol in -1i8..=1 {
                if drow == 0 && dcol == 0 {
                    continue;
                }
                if let Some(p) = pos.offset(drow, dcol) {
                    out.push(p);
                }
            }
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

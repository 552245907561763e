//! The occupancy index: which worker stands where.
//!
//! This is the single source of truth for worker placement. Workers are
//! never stored anywhere else, so position and occupancy cannot drift
//! apart. Forward lookup (symbol to position) is an array read; the
//! inverse (position to symbol) scans all four workers.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Position, WorkerSymbol};

/// Positions of all four workers, keyed by worker symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    positions: [Position; 4],
}

impl Occupancy {
    /// Workers on their fixed opening cells.
    #[must_use]
    pub fn starting() -> Self {
        let mut positions = [Position::new(0, 0); 4];
        for symbol in WorkerSymbol::ALL {
            positions[symbol.index()] = symbol.starting_position();
        }
        Self { positions }
    }

    /// Rebuild the index from raw positions, e.g. when restoring a
    /// snapshot. Positions are indexed by [`WorkerSymbol::index`] and
    /// must be pairwise distinct.
    #[must_use]
    pub fn from_positions(positions: [Position; 4]) -> Self {
        debug_assert!(
            (0..4).all(|i| (i + 1..4).all(|j| positions[i] != positions[j])),
            "workers share a cell"
        );
        Self { positions }
    }

    /// The raw position array, copied out by value.
    #[must_use]
    pub fn positions(&self) -> [Position; 4] {
        self.positions
    }

    /// Where a worker currently stands.
    #[must_use]
    pub fn position_of(&self, symbol: WorkerSymbol) -> Position {
        self.positions[symbol.index()]
    }

    /// The worker standing on a cell, if any.
    #[must_use]
    pub fn worker_at(&self, pos: Position) -> Option<WorkerSymbol> {
        WorkerSymbol::ALL
            .into_iter()
            .find(|s| self.positions[s.index()] == pos)
    }

    /// Whether any worker stands on a cell.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.worker_at(pos).is_some()
    }

    /// Both worker positions for one side, in pair order.
    #[must_use]
    pub fn positions_of(&self, color: Color) -> [Position; 2] {
        let [first, second] = WorkerSymbol::pair_of(color);
        [self.position_of(first), self.position_of(second)]
    }

    /// Move a worker to a new cell. The destination must be free; the
    /// rules layer has already verified this.
    pub fn relocate(&mut self, symbol: WorkerSymbol, to: Position) {
        debug_assert!(
            self.worker_at(to).map_or(true, |s| s == symbol),
            "destination {to} already occupied"
        );
        self.positions[symbol.index()] = to;
    }

    /// Iterate all workers with their positions, in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (WorkerSymbol, Position)> + '_ {
        WorkerSymbol::ALL
            .into_iter()
            .map(|s| (s, self.positions[s.index()]))
    }
}

//! Snapshots and turn history.
//!
//! Every committed turn captures the complete game state as an owned
//! value: the turn number, all four worker positions, and the full
//! height matrix. Snapshots share no storage with the live game or with
//! each other; restoring copies every field back by value, so no amount
//! of undo and redo can alias live state into the history.
//!
//! ## Stacks
//!
//! Two stacks drive undo and redo. The done-stack grows on every
//! committed turn and always keeps the initial snapshot at its bottom;
//! the undone-stack holds what undo peeled off and is discarded the
//! moment a fresh turn commits. Backed by `im::Vector`, which clones in
//! O(1) when callers hold onto history views.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Grid, Occupancy};
use crate::core::Position;

/// An immutable, alias-free copy of the full game state at the end of
/// one turn.
///
/// Worker positions are indexed by
/// [`WorkerSymbol::index`](crate::core::WorkerSymbol::index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Turn number the game will play next from this state, 1-based.
    pub turn: u32,
    /// All four worker positions.
    pub workers: [Position; 4],
    /// Full height matrix.
    pub heights: [[u8; Grid::SIZE]; Grid::SIZE],
}

impl Snapshot {
    /// Capture the live state into a fresh snapshot.
    #[must_use]
    pub fn capture(turn: u32, grid: &Grid, occupancy: &Occupancy) -> Self {
        Self {
            turn,
            workers: occupancy.positions(),
            heights: grid.heights(),
        }
    }
}

/// Undo/redo stacks of snapshots.
#[derive(Clone, Debug, Default)]
pub struct History {
    done: Vector<Snapshot>,
    undone: Vector<Snapshot>,
}

impl History {
    /// Empty history. Push the initial state with [`History::backup`]
    /// before the first turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed snapshots.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.done.len()
    }

    /// The most recently committed snapshot.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.done.back()
    }

    /// Commit a snapshot. Clears everything undo peeled off: committing
    /// a new line of play forfeits the old redo future. Pushing the
    /// exact state already on top is a no-op, so calling this twice in
    /// a row cannot pad the stack.
    pub fn backup(&mut self, snapshot: Snapshot) {
        if self.done.back() == Some(&snapshot) {
            return;
        }
        self.done.push_back(snapshot);
        self.undone = Vector::new();
    }

    /// Step back one turn, returning the snapshot to restore. At the
    /// initial snapshot there is nothing earlier: the initial state is
    /// returned again and the stacks are left untouched.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.done.len() > 1 {
            let top = self.done.pop_back()?;
            self.undone.push_back(top);
        }
        self.done.back().copied()
    }

    /// Step forward again, returning the snapshot to restore. `None`
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let snapshot = self.undone.pop_back()?;
        self.done.push_back(snapshot);
        Some(snapshot)
    }
}

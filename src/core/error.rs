//! Error taxonomy for rejected actions and terminal conditions.
//!
//! Illegal move and build requests carry the worker, the offending
//! position, and the specific rule violated, so a driving shell can
//! report the failure and let the player retry. A win is not an error;
//! it surfaces as a [`TurnOutcome`](crate::game::TurnOutcome).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::{Color, WorkerSymbol};
use super::position::Position;

/// Why a requested move target is not legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveViolation {
    /// The target is not in the ring around the worker.
    NotAdjacent,
    /// Another worker stands on the target.
    Occupied,
    /// The target is more than one level above the worker.
    TooHigh,
    /// The target carries a completed tower.
    Capped,
}

impl std::fmt::Display for MoveViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            MoveViolation::NotAdjacent => "target is not adjacent",
            MoveViolation::Occupied => "target cell is occupied",
            MoveViolation::TooHigh => "cannot climb more than one level",
            MoveViolation::Capped => "cannot enter a completed tower",
        };
        f.write_str(reason)
    }
}

/// Why a requested build target is not legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildViolation {
    /// The target is not in the ring around the moved worker.
    NotAdjacent,
    /// Another worker stands on the target.
    Occupied,
    /// The target carries a completed tower.
    Capped,
}

impl std::fmt::Display for BuildViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            BuildViolation::NotAdjacent => "target is not adjacent",
            BuildViolation::Occupied => "target cell is occupied",
            BuildViolation::Capped => "cannot build on a completed tower",
        };
        f.write_str(reason)
    }
}

/// Everything that can go wrong when asking the engine to act.
///
/// `IllegalMove` and `IllegalBuild` are recoverable: nothing was
/// mutated, and the active player simply selects again. `NoLegalAction`
/// ends the game for the named side.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// A position lies outside the 5x5 board. Never silently clamped.
    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    /// The requested move violates a movement rule.
    #[error("cannot move {worker} to {target}: {reason}")]
    IllegalMove {
        worker: WorkerSymbol,
        target: Position,
        reason: MoveViolation,
    },

    /// The requested build violates a build rule.
    #[error("{worker} cannot build at {target}: {reason}")]
    IllegalBuild {
        worker: WorkerSymbol,
        target: Position,
        reason: BuildViolation,
    },

    /// The selected worker belongs to the other side.
    #[error("worker {0} does not belong to the active player")]
    NotYourWorker(WorkerSymbol),

    /// The active player has no move with a legal follow-up build left.
    /// Terminal: the named side has lost.
    #[error("{0} has no legal move and build remaining")]
    NoLegalAction(Color),

    /// The game already reached a terminal state.
    #[error("the game is already over")]
    GameFinished,
}

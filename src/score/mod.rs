//! Heuristic position scoring.
//!
//! Automated play ranks candidate moves with a three-component score
//! evaluated against hypothetical worker positions. The components:
//!
//! - `height`: sum of building heights under the side's workers.
//! - `center`: sum of `2 - chebyshev(worker, center)` per worker, so the
//!   board center is worth 2 and the rim 0.
//! - `proximity`: `8 - sum over own workers of the Chebyshev distance
//!   to the nearest opposing worker`. Crowding the opponent scores
//!   higher.
//!
//! The composite ranking weight is `3 * height + 2 * center + proximity`.
//! Evaluation is pure: candidates are scored by substituting a shadow
//! position for the moving worker, never by touching live state.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::Position;

/// Center of the 5x5 board.
const CENTER: Position = Position::new(2, 2);

/// Base for the proximity component; two workers at the maximum
/// Chebyshev distance of 4 each bring the raw sum to 8.
const PROXIMITY_BASE: i32 = 8;

/// The three scoring components for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Total building height under the side's workers.
    pub height: i32,
    /// Centrality bonus, 0 to 4.
    pub center: i32,
    /// Pressure on the opposing workers, higher is closer.
    pub proximity: i32,
}

impl Score {
    /// The weighted ranking value used to compare candidate moves.
    #[must_use]
    pub fn composite(&self) -> i32 {
        3 * self.height + 2 * self.center + self.proximity
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.center, self.proximity)
    }
}

/// Score a side's (possibly hypothetical) worker positions against the
/// opposing pair.
#[must_use]
pub fn evaluate(grid: &Grid, own: [Position; 2], opponents: [Position; 2]) -> Score {
    let height = own.iter().map(|&p| i32::from(grid.height(p))).sum();

    let center = own
        .iter()
        .map(|&p| 2 - i32::from(p.chebyshev(CENTER)))
        .sum();

    let spread: i32 = own
        .iter()
        .map(|&p| {
            opponents
                .iter()
                .map(|&o| i32::from(p.chebyshev(o)))
                .min()
                .unwrap_or(0)
        })
        .sum();

    Score {
        height,
        center,
        proximity: PROXIMITY_BASE - spread,
    }
}

//! Core value types: positions, directions, colors, workers, RNG, errors.
//!
//! Everything in this module is a plain value with no knowledge of the
//! board or the rules. Higher layers take these by parameter; there is
//! no ambient game state anywhere in the crate.

pub mod color;
pub mod error;
pub mod position;
pub mod rng;

pub use color::{Color, ColorMap, WorkerSymbol};
pub use error::{ActionError, BuildViolation, MoveViolation};
pub use position::{Direction, Position, BOARD_SIZE};
pub use rng::GameRng;

//! # santorini-core
//!
//! Rules and state engine for the Santorini board game: a 5x5 grid of
//! buildable cells, two workers per side, move one worker then build
//! one story each turn. Reach a third story and you win; run out of
//! legal move-and-build pairs and you lose.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: the whole game lives in one owned [`Game`]
//!    value. Every component takes what it needs by parameter.
//!
//! 2. **One source of truth for placement**: worker positions exist
//!    only in the [`Occupancy`] index, updated atomically with each
//!    move, so position and occupancy cannot disagree.
//!
//! 3. **Deterministic by seed**: the only randomness is the random
//!    strategy's pick and the heuristic tie-break, both drawn from a
//!    seeded [`GameRng`]. Equal seeds replay identically.
//!
//! 4. **Alias-free history**: snapshots are fully materialized values.
//!    Undo and redo copy state; they never share storage with the live
//!    game.
//!
//! ## Modules
//!
//! - `core`: positions, directions, colors, worker symbols, RNG, errors
//! - `board`: the height grid and the occupancy index
//! - `rules`: legal action enumeration and win detection
//! - `score`: the heuristic position evaluation
//! - `history`: snapshots and the undo/redo stacks
//! - `game`: the turn controller, builder, and strategies
//!
//! ## Example
//!
//! ```
//! use santorini_core::{Game, StrategyKind, TurnOutcome};
//!
//! let mut game = Game::new(StrategyKind::Random, StrategyKind::Random, 42);
//!
//! // Drive turns until someone wins or runs out of moves.
//! for _ in 0..500 {
//!     match game.select_action() {
//!         Ok(Some(action)) => match game.apply_action(action) {
//!             Ok(TurnOutcome::Advanced) => {}
//!             Ok(TurnOutcome::Won(color)) => {
//!                 println!("{color} wins");
//!                 break;
//!             }
//!             Err(err) => panic!("engine rejected its own action: {err}"),
//!         },
//!         Ok(None) => unreachable!("both sides are automated"),
//!         Err(_) => break, // active side had no legal action
//!     }
//! }
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod history;
pub mod rules;
pub mod score;

// Re-export commonly used types
pub use crate::core::{
    ActionError, BuildViolation, Color, ColorMap, Direction, GameRng, MoveViolation, Position,
    WorkerSymbol, BOARD_SIZE,
};

pub use crate::board::{Grid, Occupancy};

pub use crate::rules::{possibilities, winner, Action, PossibilityMap};

pub use crate::score::{evaluate, Score};

pub use crate::history::{History, Snapshot};

pub use crate::game::{Game, GameBuilder, GameStatus, StrategyKind, TurnOutcome, TurnRecord};

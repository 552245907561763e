//! The turn controller: one owned handle for a whole game.
//!
//! `Game` owns the grid, the occupancy index, the turn counter, and the
//! history. Each turn runs the same sequence: check for a standing win,
//! enumerate the active side's possibilities (an empty map is that
//! side's loss), validate the selected action, apply it, commit a
//! snapshot, and hand the turn to the other side. Every mutation is
//! atomic from the caller's side: a rejected action changes nothing.
//!
//! There is no ambient global state. Construct as many independent
//! games as you like; each carries its own RNG seeded at creation.

pub mod strategy;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Grid, Occupancy};
use crate::core::{ActionError, Color, ColorMap, GameRng, Position};
use crate::history::{History, Snapshot};
use crate::rules::{self, legality, Action, PossibilityMap};
use crate::score::{self, Score};

pub use strategy::StrategyKind;

/// Where the game stands between turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues; the active side is derived from the turn.
    InProgress,
    /// A worker of this side stands on a third story.
    Won(Color),
    /// This side had no legal move and build left on its turn.
    Lost(Color),
}

impl GameStatus {
    /// Whether no further turns will be processed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What a successfully applied action led to.
///
/// A loss is never an `Ok` outcome: it surfaces as
/// [`ActionError::NoLegalAction`] before any action is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The action was applied and play passed to the other side.
    Advanced,
    /// The action was applied and this side now stands on a third story.
    Won(Color),
}

/// One committed action, kept in arrival order.
///
/// The log is a chronicle, not a replay script: entries survive undo,
/// so superseded lines of play remain visible for debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number the action was played on.
    pub turn: u32,
    /// Side that played it.
    pub color: Color,
    /// The action itself.
    pub action: Action,
}

/// Configures and creates a [`Game`].
///
/// ```
/// use santorini_core::game::{GameBuilder, StrategyKind};
///
/// let game = GameBuilder::new()
///     .white(StrategyKind::Heuristic)
///     .blue(StrategyKind::Random)
///     .undo_redo(true)
///     .build(42);
/// assert_eq!(game.turn(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GameBuilder {
    white: StrategyKind,
    blue: StrategyKind,
    undo_redo: bool,
    opening: Option<Snapshot>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            white: StrategyKind::Human,
            blue: StrategyKind::Human,
            undo_redo: false,
            opening: None,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strategy for the white side.
    #[must_use]
    pub fn white(mut self, kind: StrategyKind) -> Self {
        self.white = kind;
        self
    }

    /// Strategy for the blue side.
    #[must_use]
    pub fn blue(mut self, kind: StrategyKind) -> Self {
        self.blue = kind;
        self
    }

    /// Enable the undo and redo commands. History is recorded either
    /// way; this gates only whether the commands act.
    #[must_use]
    pub fn undo_redo(mut self, enabled: bool) -> Self {
        self.undo_redo = enabled;
        self
    }

    /// Start from a given position instead of the standard opening.
    /// Useful for analysis and for setting up endgame situations.
    #[must_use]
    pub fn opening(mut self, snapshot: Snapshot) -> Self {
        self.opening = Some(snapshot);
        self
    }

    /// Create the game. The seed fixes every random decision the
    /// engine will make, so equal seeds replay identically.
    #[must_use]
    pub fn build(self, seed: u64) -> Game {
        let (grid, occupancy, turn) = match self.opening {
            Some(snapshot) => (
                Grid::from_heights(snapshot.heights),
                Occupancy::from_positions(snapshot.workers),
                snapshot.turn,
            ),
            None => (Grid::new(), Occupancy::starting(), 1),
        };

        let status = match rules::winner(&grid, &occupancy) {
            Some(color) => GameStatus::Won(color),
            None => GameStatus::InProgress,
        };

        let mut game = Game {
            grid,
            occupancy,
            turn,
            status,
            strategies: ColorMap::new(self.white, self.blue),
            undo_redo: self.undo_redo,
            rng: GameRng::new(seed),
            history: History::new(),
            log: Vector::new(),
            builder: self,
        };
        game.history.backup(game.snapshot());
        game
    }
}

/// A full game in progress: board, occupancy, turn state, and history.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    occupancy: Occupancy,
    turn: u32,
    status: GameStatus,
    strategies: ColorMap<StrategyKind>,
    undo_redo: bool,
    rng: GameRng,
    history: History,
    log: Vector<TurnRecord>,
    builder: GameBuilder,
}

impl Game {
    /// Standard opening with the given strategies.
    #[must_use]
    pub fn new(white: StrategyKind, blue: StrategyKind, seed: u64) -> Self {
        GameBuilder::new().white(white).blue(blue).build(seed)
    }

    /// Current turn number, 1-based.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The side to act this turn.
    #[must_use]
    pub fn active_color(&self) -> Color {
        Color::for_turn(self.turn)
    }

    /// Where the game stands.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The strategy configured for a side.
    #[must_use]
    pub fn strategy(&self, color: Color) -> StrategyKind {
        self.strategies[color]
    }

    /// Building heights.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Worker placement.
    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Committed actions in arrival order, including turns that were
    /// later undone.
    pub fn turn_log(&self) -> impl Iterator<Item = &TurnRecord> {
        self.log.iter()
    }

    /// Number of snapshots on the done side of the history.
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// The full action space for the active side, recomputed from the
    /// current board on every call.
    #[must_use]
    pub fn possibilities(&self) -> PossibilityMap {
        rules::possibilities(&self.grid, &self.occupancy, self.active_color())
    }

    /// Score a side's (possibly hypothetical) worker positions against
    /// the current board.
    #[must_use]
    pub fn score(&self, positions: [Position; 2], color: Color) -> Score {
        score::evaluate(
            &self.grid,
            positions,
            self.occupancy.positions_of(color.opponent()),
        )
    }

    /// A deep, alias-free copy of the current state, fit for rendering
    /// or for [`GameBuilder::opening`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.turn, &self.grid, &self.occupancy)
    }

    /// Let the active side's configured strategy pick an action.
    ///
    /// Returns `Ok(None)` for a human side: the shell collects the
    /// action and submits it through [`Game::apply_action`]. Detects
    /// the loss condition: if the active side has no legal action the
    /// game ends here with [`ActionError::NoLegalAction`].
    pub fn select_action(&mut self) -> Result<Option<Action>, ActionError> {
        if self.status.is_terminal() {
            return Err(ActionError::GameFinished);
        }
        let active = self.active_color();

        let map = self.possibilities();
        if map.is_empty() {
            self.status = GameStatus::Lost(active);
            return Err(ActionError::NoLegalAction(active));
        }

        let action = match self.strategies[active] {
            StrategyKind::Human => None,
            StrategyKind::Random => strategy::random_choice(&map, &mut self.rng),
            StrategyKind::Heuristic => strategy::heuristic_choice(
                &self.grid,
                &self.occupancy,
                active,
                &map,
                &mut self.rng,
            ),
        };
        Ok(action)
    }

    /// Run one full turn with the given action.
    ///
    /// The sequence follows the turn state machine: standing-win check
    /// for both sides, loss check for the active side, validation of
    /// the action with a diagnostic reason on rejection, then the
    /// move, the build, the snapshot, and the hand-over. Nothing is
    /// mutated unless the whole action is accepted.
    pub fn apply_action(&mut self, action: Action) -> Result<TurnOutcome, ActionError> {
        if self.status.is_terminal() {
            return Err(ActionError::GameFinished);
        }
        if let Some(color) = rules::winner(&self.grid, &self.occupancy) {
            self.status = GameStatus::Won(color);
            return Ok(TurnOutcome::Won(color));
        }

        let active = self.active_color();
        let map = self.possibilities();
        if map.is_empty() {
            self.status = GameStatus::Lost(active);
            return Err(ActionError::NoLegalAction(active));
        }

        if action.worker.color() != active {
            return Err(ActionError::NotYourWorker(action.worker));
        }
        if !action.move_to.is_in_bounds() {
            return Err(ActionError::OutOfBounds(action.move_to));
        }
        if !action.build_at.is_in_bounds() {
            return Err(ActionError::OutOfBounds(action.build_at));
        }

        let origin = self.occupancy.position_of(action.worker);
        legality::check_move(&self.grid, &self.occupancy, origin, action.move_to).map_err(
            |reason| ActionError::IllegalMove {
                worker: action.worker,
                target: action.move_to,
                reason,
            },
        )?;
        legality::check_build(
            &self.grid,
            &self.occupancy,
            action.worker,
            origin,
            action.move_to,
            action.build_at,
        )
        .map_err(|reason| ActionError::IllegalBuild {
            worker: action.worker,
            target: action.build_at,
            reason,
        })?;
        debug_assert!(map.contains(&action));

        self.occupancy.relocate(action.worker, action.move_to);
        self.grid.build(action.build_at);
        self.log.push_back(TurnRecord {
            turn: self.turn,
            color: active,
            action,
        });
        self.turn += 1;
        self.history.backup(self.snapshot());

        if let Some(color) = rules::winner(&self.grid, &self.occupancy) {
            self.status = GameStatus::Won(color);
            return Ok(TurnOutcome::Won(color));
        }
        Ok(TurnOutcome::Advanced)
    }

    /// Commit the current state to history without playing a turn.
    /// Duplicate-guarded, so repeated calls cannot pad the stack.
    pub fn backup(&mut self) {
        self.history.backup(self.snapshot());
    }

    /// Step back one committed turn. A no-op when undo/redo is
    /// disabled, when the history is empty, or at the initial state.
    pub fn undo(&mut self) {
        if !self.undo_redo {
            return;
        }
        if let Some(snapshot) = self.history.undo() {
            self.restore(&snapshot);
        }
    }

    /// Step forward again after an undo. A no-op when undo/redo is
    /// disabled or there is nothing to redo.
    pub fn redo(&mut self) {
        if !self.undo_redo {
            return;
        }
        if let Some(snapshot) = self.history.redo() {
            self.restore(&snapshot);
        }
    }

    /// Throw everything away and set the board back up. History and
    /// the turn log are discarded; the RNG is reseeded with the
    /// original seed, so a restarted game replays identically.
    pub fn restart(&mut self) {
        *self = self.builder.build(self.rng.seed());
    }

    /// Copy every field of a snapshot into live storage. The live game
    /// never aliases snapshot storage afterwards; the status is
    /// recomputed from the restored board.
    fn restore(&mut self, snapshot: &Snapshot) {
        self.turn = snapshot.turn;
        self.grid = Grid::from_heights(snapshot.heights);
        self.occupancy = Occupancy::from_positions(snapshot.workers);
        self.status = match rules::winner(&self.grid, &self.occupancy) {
            Some(color) => GameStatus::Won(color),
            None => GameStatus::InProgress,
        };
    }
}

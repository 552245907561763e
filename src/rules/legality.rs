//! Legal action enumeration.
//!
//! A turn is a move followed by a build, and both halves constrain each
//! other: a move with no legal follow-up build is not a legal action at
//! all. The possibility map holds the complete two-level action space
//! for one side, recomputed from scratch every turn and never persisted.
//!
//! ## Rules
//!
//! A worker at `p` (height `h`) may move to `m` iff `m` is in the ring
//! of `p`, `height(m) <= 3`, `height(m) <= h + 1`, and `m` is free.
//! Height exactly 3 is a legal destination and wins the game; height 4
//! never is. After moving to `m`, the worker may build on `b` iff `b` is
//! in the ring of `m`, `height(b) <= 3`, and `b` is free, where the
//! worker's own vacated cell `p` counts as free. Build checks run
//! against pre-move occupancy minus the mover, because possibilities are
//! computed before anything mutates.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

use crate::board::{Grid, Occupancy, Ring};
use crate::core::{BuildViolation, Color, MoveViolation, Position, WorkerSymbol};

/// One complete turn for one worker: step to `move_to`, then put a
/// story on `build_at`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The worker taking the turn.
    pub worker: WorkerSymbol,
    /// Cell the worker steps onto.
    pub move_to: Position,
    /// Cell that receives one story after the step.
    pub build_at: Position,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}, build {}", self.worker, self.move_to, self.build_at)
    }
}

/// The full action space for one side on one turn: worker, then move
/// target, then the set of legal build targets.
///
/// An empty map is the loss condition for that side; the turn
/// controller surfaces it as
/// [`ActionError::NoLegalAction`](crate::core::ActionError::NoLegalAction)
/// rather than treating it as a playable turn.
#[derive(Clone, Debug, Default)]
pub struct PossibilityMap {
    entries: FxHashMap<WorkerSymbol, FxHashMap<Position, SmallVec<[Position; 8]>>>,
}

impl PossibilityMap {
    /// Whether no worker has a single legal (move, build) pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|moves| moves.is_empty())
    }

    /// Workers with at least one legal action, in symbol order.
    #[must_use]
    pub fn workers(&self) -> Vec<WorkerSymbol> {
        let mut out: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, moves)| !moves.is_empty())
            .map(|(&s, _)| s)
            .collect();
        out.sort_unstable();
        out
    }

    /// Legal move targets for a worker, sorted row-major.
    #[must_use]
    pub fn moves_for(&self, worker: WorkerSymbol) -> Vec<Position> {
        let mut out: Vec<_> = self
            .entries
            .get(&worker)
            .map(|moves| moves.keys().copied().collect())
            .unwrap_or_default();
        out.sort_unstable();
        out
    }

    /// Legal build targets after a given move, `None` if the move
    /// itself is not legal.
    #[must_use]
    pub fn builds_for(&self, worker: WorkerSymbol, move_to: Position) -> Option<&[Position]> {
        self.entries
            .get(&worker)
            .and_then(|moves| moves.get(&move_to))
            .map(|builds| builds.as_slice())
    }

    /// Whether a complete action appears in the map.
    #[must_use]
    pub fn contains(&self, action: &Action) -> bool {
        self.builds_for(action.worker, action.move_to)
            .is_some_and(|builds| builds.contains(&action.build_at))
    }

    /// All (worker, move target) candidates, in canonical order. This
    /// is the space automated strategies rank.
    #[must_use]
    pub fn move_candidates(&self) -> Vec<(WorkerSymbol, Position)> {
        let mut out = Vec::new();
        for worker in self.workers() {
            for move_to in self.moves_for(worker) {
                out.push((worker, move_to));
            }
        }
        out
    }

    /// Every complete action, in canonical order.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        let mut out = Vec::new();
        for (worker, move_to) in self.move_candidates() {
            let mut builds: Vec<Position> = self
                .builds_for(worker, move_to)
                .map(<[Position]>::to_vec)
                .unwrap_or_default();
            builds.sort_unstable();
            for build_at in builds {
                out.push(Action {
                    worker,
                    move_to,
                    build_at,
                });
            }
        }
        out
    }

    /// Total number of complete actions.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(|moves| moves.values())
            .map(SmallVec::len)
            .sum()
    }

    fn insert(&mut self, worker: WorkerSymbol, move_to: Position, builds: SmallVec<[Position; 8]>) {
        debug_assert!(!builds.is_empty());
        let _ = self
            .entries
            .entry(worker)
            .or_default()
            .insert(move_to, builds);
    }
}

/// Compute the full possibility map for one side against the current
/// board. Pure with respect to its inputs; nothing is mutated.
#[must_use]
pub fn possibilities(grid: &Grid, occupancy: &Occupancy, color: Color) -> PossibilityMap {
    let mut map = PossibilityMap::default();

    for worker in WorkerSymbol::pair_of(color) {
        let origin = occupancy.position_of(worker);
        for move_to in Grid::ring(origin) {
            if check_move(grid, occupancy, origin, move_to).is_err() {
                continue;
            }
            let builds = legal_builds(grid, occupancy, worker, origin, move_to);
            if !builds.is_empty() {
                map.insert(worker, move_to, builds);
            }
        }
    }

    map
}

/// Every legal build target after `worker` steps from `origin` to
/// `move_to`. The vacated `origin` counts as free.
fn legal_builds(
    grid: &Grid,
    occupancy: &Occupancy,
    worker: WorkerSymbol,
    origin: Position,
    move_to: Position,
) -> Ring {
    let mut builds = Ring::new();
    for build_at in Grid::ring(move_to) {
        if check_build(grid, occupancy, worker, origin, move_to, build_at).is_ok() {
            builds.push(build_at);
        }
    }
    builds
}

/// Diagnose one move target against the movement rules.
pub(crate) fn check_move(
    grid: &Grid,
    occupancy: &Occupancy,
    origin: Position,
    move_to: Position,
) -> Result<(), MoveViolation> {
    if origin.chebyshev(move_to) != 1 {
        return Err(MoveViolation::NotAdjacent);
    }
    if occupancy.is_occupied(move_to) {
        return Err(MoveViolation::Occupied);
    }
    if grid.height(move_to) > Grid::WIN_HEIGHT {
        return Err(MoveViolation::Capped);
    }
    if grid.height(move_to) > grid.height(origin) + 1 {
        return Err(MoveViolation::TooHigh);
    }
    Ok(())
}

/// Diagnose one build target against the build rules, with the mover
/// conceptually standing on `move_to` and `origin` vacated.
pub(crate) fn check_build(
    grid: &Grid,
    occupancy: &Occupancy,
    worker: WorkerSymbol,
    origin: Position,
    move_to: Position,
    build_at: Position,
) -> Result<(), BuildViolation> {
    if move_to.chebyshev(build_at) != 1 {
        return Err(BuildViolation::NotAdjacent);
    }
    if grid.height(build_at) > Grid::WIN_HEIGHT {
        return Err(BuildViolation::Capped);
    }
    match occupancy.worker_at(build_at) {
        Some(other) if other != worker => Err(BuildViolation::Occupied),
        // The mover's own record still points at `origin` pre-move, so a
        // hit on the mover means building on the vacated cell.
        Some(_) => {
            debug_assert_eq!(build_at, origin);
            Ok(())
        }
        None => Ok(()),
    }
}

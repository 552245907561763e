//! Property-based tests for the board and rules invariants.
//!
//! Run with: cargo test --release properties

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use santorini_core::{
    possibilities, Color, Game, GameBuilder, Grid, Occupancy, Position, StrategyKind, TurnOutcome,
};

fn any_position() -> impl Strategy<Value = Position> {
    (0u8..5, 0u8..5).prop_map(|(row, col)| Position::new(row, col))
}

proptest! {
    /// Every ring member is in bounds, adjacent, and not the center.
    #[test]
    fn prop_ring_members_are_adjacent_and_in_bounds(pos in any_position()) {
        let ring = Grid::ring(pos);
        prop_assert!(!ring.is_empty());
        for neighbor in &ring {
            prop_assert!(neighbor.is_in_bounds());
            prop_assert_eq!(pos.chebyshev(*neighbor), 1);
            prop_assert_ne!(*neighbor, pos);
        }
    }

    /// Ring sizes depend only on how close the cell is to the rim.
    #[test]
    fn prop_ring_size_matches_cell_class(pos in any_position()) {
        let on_rim = |v: u8| v == 0 || v == 4;
        let expected = match (on_rim(pos.row), on_rim(pos.col)) {
            (true, true) => 3,
            (true, false) | (false, true) => 5,
            (false, false) => 8,
        };
        prop_assert_eq!(Grid::ring(pos).len(), expected);
    }

    /// Chebyshev distance is symmetric and zero only on equality.
    #[test]
    fn prop_chebyshev_metric(a in any_position(), b in any_position()) {
        prop_assert_eq!(a.chebyshev(b), b.chebyshev(a));
        prop_assert_eq!(a.chebyshev(b) == 0, a == b);
        prop_assert!(a.chebyshev(b) <= 4);
    }

    /// Heights never decrease and never exceed the cap, whatever the
    /// build sequence.
    #[test]
    fn prop_heights_are_monotonic_and_capped(
        builds in prop::collection::vec(any_position(), 0..200)
    ) {
        let mut grid = Grid::new();
        let mut previous = grid.heights();
        for pos in builds {
            grid.build(pos);
            let current = grid.heights();
            for row in 0..Grid::SIZE {
                for col in 0..Grid::SIZE {
                    prop_assert!(current[row][col] >= previous[row][col]);
                    prop_assert!(current[row][col] <= 4);
                }
            }
            previous = current;
        }
    }

    /// Every action the legality engine emits satisfies the movement
    /// and build rules, on boards reached through real play.
    #[test]
    fn prop_emitted_actions_are_sound(seed in any::<u64>(), turns in 0usize..30) {
        let mut game = Game::new(StrategyKind::Random, StrategyKind::Random, seed);

        for _ in 0..turns {
            let grid = *game.grid();
            let occ = *game.occupancy();
            let map = possibilities(&grid, &occ, game.active_color());

            for action in map.actions() {
                let origin = occ.position_of(action.worker);
                prop_assert_eq!(origin.chebyshev(action.move_to), 1);
                prop_assert!(grid.height(action.move_to) <= 3);
                prop_assert!(grid.height(action.move_to) <= grid.height(origin) + 1);
                prop_assert!(!occ.is_occupied(action.move_to));
                prop_assert_eq!(action.move_to.chebyshev(action.build_at), 1);
                prop_assert!(grid.height(action.build_at) <= 3);
                let occupant = occ.worker_at(action.build_at);
                prop_assert!(occupant.is_none() || action.build_at == origin);
            }

            match game.select_action() {
                Ok(Some(action)) => match game.apply_action(action) {
                    Ok(TurnOutcome::Advanced) => {}
                    _ => break,
                },
                _ => break,
            }
        }
    }

    /// N turns followed by N undos land exactly on the initial state,
    /// and N redos land back where play stopped.
    #[test]
    fn prop_undo_redo_round_trip(seed in any::<u64>(), turns in 1usize..15) {
        let mut game = GameBuilder::new()
            .white(StrategyKind::Random)
            .blue(StrategyKind::Random)
            .undo_redo(true)
            .build(seed);
        let initial = game.snapshot();

        let mut played = 0;
        for _ in 0..turns {
            match game.select_action() {
                Ok(Some(action)) => match game.apply_action(action) {
                    Ok(TurnOutcome::Advanced) => played += 1,
                    Ok(TurnOutcome::Won(_)) => { played += 1; break }
                    Err(_) => break,
                },
                _ => break,
            }
        }
        let end = game.snapshot();

        for _ in 0..played {
            game.undo();
        }
        prop_assert_eq!(game.snapshot(), initial);

        for _ in 0..played {
            game.redo();
        }
        prop_assert_eq!(game.snapshot(), end);
    }

    /// The possibility map treats the two sides independently: a side
    /// never gets actions for the other side's workers.
    #[test]
    fn prop_map_only_contains_own_workers(seed in any::<u64>()) {
        let mut game = Game::new(StrategyKind::Random, StrategyKind::Random, seed);
        for _ in 0..10 {
            let color = game.active_color();
            let map = game.possibilities();
            for worker in map.workers() {
                prop_assert_eq!(worker.color(), color);
            }
            match game.select_action() {
                Ok(Some(action)) => match game.apply_action(action) {
                    Ok(TurnOutcome::Advanced) => {}
                    _ => break,
                },
                _ => break,
            }
        }
    }

    /// Scoring is pure: evaluating hypothetical positions leaves the
    /// game untouched.
    #[test]
    fn prop_scoring_does_not_mutate(
        seed in any::<u64>(),
        hypothetical in (any_position(), any_position())
    ) {
        prop_assume!(hypothetical.0 != hypothetical.1);
        let game = Game::new(StrategyKind::Human, StrategyKind::Human, seed);
        let before = game.snapshot();

        let _ = game.score([hypothetical.0, hypothetical.1], Color::White);
        let _ = game.score([hypothetical.0, hypothetical.1], Color::Blue);

        prop_assert_eq!(game.snapshot(), before);
    }
}

/// The worked scoring identity: a worker pair on a flat board scores
/// zero height, centrality by ring, and proximity as eight minus the
/// nearest-opponent distances.
#[test]
fn test_flat_board_scoring_identity() {
    let occ = Occupancy::starting();
    let game = Game::new(StrategyKind::Human, StrategyKind::Human, 0);

    for color in [Color::White, Color::Blue] {
        let own = occ.positions_of(color);
        let opponents = occ.positions_of(color.opponent());
        let score = game.score(own, color);

        assert_eq!(score.height, 0);

        let expected_center: i32 = own
            .iter()
            .map(|p| 2 - i32::from(p.chebyshev(Position::new(2, 2))))
            .sum();
        assert_eq!(score.center, expected_center);

        let expected_spread: i32 = own
            .iter()
            .map(|p| {
                opponents
                    .iter()
                    .map(|o| i32::from(p.chebyshev(*o)))
                    .min()
                    .unwrap()
            })
            .sum();
        assert_eq!(score.proximity, 8 - expected_spread);
    }
}

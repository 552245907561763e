//! Win detection.
//!
//! A side wins the moment one of its workers stands on a third story.
//! Both sides are checked every time: only the moving worker can newly
//! reach height 3 under these rules, but checking all four workers is
//! cheap and leaves nothing to argue about.

use crate::board::{Grid, Occupancy};
use crate::core::{Color, WorkerSymbol};

/// The side with a worker on a third story, if any.
#[must_use]
pub fn winner(grid: &Grid, occupancy: &Occupancy) -> Option<Color> {
    WorkerSymbol::ALL
        .into_iter()
        .find(|&s| grid.height(occupancy.position_of(s)) == Grid::WIN_HEIGHT)
        .map(WorkerSymbol::color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_no_winner_on_a_fresh_board() {
        assert_eq!(winner(&Grid::new(), &Occupancy::starting()), None);
    }

    #[test]
    fn test_worker_on_third_story_wins() {
        let mut rows = [[0u8; 5]; 5];
        rows[3][3] = 3; // blue worker Z stands here
        let grid = Grid::from_heights(rows);
        let occ = Occupancy::starting();

        assert_eq!(winner(&grid, &occ), Some(Color::Blue));
    }

    #[test]
    fn test_third_story_without_a_worker_is_not_a_win() {
        let mut rows = [[0u8; 5]; 5];
        rows[0][0] = 3;
        rows[2][2] = 3;
        let grid = Grid::from_heights(rows);

        assert_eq!(winner(&grid, &Occupancy::starting()), None);
    }

    #[test]
    fn test_capped_tower_under_nobody_is_not_a_win() {
        let mut rows = [[0u8; 5]; 5];
        rows[4][4] = 4;
        let grid = Grid::from_heights(rows);

        assert_eq!(winner(&grid, &Occupancy::starting()), None);
    }

    #[test]
    fn test_white_worker_detected_after_relocation() {
        let mut rows = [[0u8; 5]; 5];
        rows[2][0] = 3;
        let grid = Grid::from_heights(rows);
        let mut occ = Occupancy::starting();
        occ.relocate(WorkerSymbol::B, Position::new(2, 0));

        assert_eq!(winner(&grid, &occ), Some(Color::White));
    }
}

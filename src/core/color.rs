//! Player colors, worker identities, and per-color storage.
//!
//! Each side owns exactly two workers. White plays `A` and `B`, blue
//! plays `Y` and `Z`, and the four symbols are fixed for the whole game.
//! `ColorMap` stores one value per side and indexes by [`Color`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::Position;

/// The two sides of the game. White always takes turn 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
}

impl Color {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Blue,
            Color::Blue => Color::White,
        }
    }

    /// Which side acts on a given turn number. Turns start at 1 with white.
    #[must_use]
    pub const fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 {
            Color::White
        } else {
            Color::Blue
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

/// Identity of one of the four workers on the board.
///
/// The symbol determines the owning side and the fixed opening cell:
/// `A` at (3,1) and `B` at (1,3) for white, `Y` at (1,1) and `Z` at
/// (3,3) for blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkerSymbol {
    A,
    B,
    Y,
    Z,
}

impl WorkerSymbol {
    /// All four workers, white pair first.
    pub const ALL: [WorkerSymbol; 4] = [
        WorkerSymbol::A,
        WorkerSymbol::B,
        WorkerSymbol::Y,
        WorkerSymbol::Z,
    ];

    /// The side this worker belongs to.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            WorkerSymbol::A | WorkerSymbol::B => Color::White,
            WorkerSymbol::Y | WorkerSymbol::Z => Color::Blue,
        }
    }

    /// The owning side's other worker.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            WorkerSymbol::A => WorkerSymbol::B,
            WorkerSymbol::B => WorkerSymbol::A,
            WorkerSymbol::Y => WorkerSymbol::Z,
            WorkerSymbol::Z => WorkerSymbol::Y,
        }
    }

    /// Dense index in `0..4`, used for array-backed lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            WorkerSymbol::A => 0,
            WorkerSymbol::B => 1,
            WorkerSymbol::Y => 2,
            WorkerSymbol::Z => 3,
        }
    }

    /// Index of this worker within its own pair, `0` or `1`.
    #[must_use]
    pub const fn pair_index(self) -> usize {
        match self {
            WorkerSymbol::A | WorkerSymbol::Y => 0,
            WorkerSymbol::B | WorkerSymbol::Z => 1,
        }
    }

    /// The pair of workers for one side, in pair order.
    #[must_use]
    pub const fn pair_of(color: Color) -> [WorkerSymbol; 2] {
        match color {
            Color::White => [WorkerSymbol::A, WorkerSymbol::B],
            Color::Blue => [WorkerSymbol::Y, WorkerSymbol::Z],
        }
    }

    /// The cell this worker occupies when a game starts.
    #[must_use]
    pub const fn starting_position(self) -> Position {
        match self {
            WorkerSymbol::A => Position::new(3, 1),
            WorkerSymbol::B => Position::new(1, 3),
            WorkerSymbol::Y => Position::new(1, 1),
            WorkerSymbol::Z => Position::new(3, 3),
        }
    }
}

impl std::fmt::Display for WorkerSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            WorkerSymbol::A => 'A',
            WorkerSymbol::B => 'B',
            WorkerSymbol::Y => 'Y',
            WorkerSymbol::Z => 'Z',
        };
        write!(f, "{c}")
    }
}

/// One value per side, indexable by [`Color`].
///
/// ```
/// use santorini_core::core::{Color, ColorMap};
///
/// let mut wins: ColorMap<u32> = ColorMap::new(0, 0);
/// wins[Color::Blue] += 1;
/// assert_eq!(wins[Color::White], 0);
/// assert_eq!(wins[Color::Blue], 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMap<T> {
    white: T,
    blue: T,
}

impl<T> ColorMap<T> {
    /// Create a map from the two per-side values.
    #[must_use]
    pub const fn new(white: T, blue: T) -> Self {
        Self { white, blue }
    }

    /// Get a reference to one side's value.
    #[must_use]
    pub const fn get(&self, color: Color) -> &T {
        match color {
            Color::White => &self.white,
            Color::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to one side's value.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Blue => &mut self.blue,
        }
    }

    /// Iterate both sides, white first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::White, &self.white), (Color::Blue, &self.blue)].into_iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

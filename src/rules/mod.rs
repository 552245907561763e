//! Game rules: legal action enumeration and win detection.

pub mod legality;
pub mod win;

pub use legality::{possibilities, Action, PossibilityMap};
pub use win::winner;

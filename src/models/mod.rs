pub mod grid;
pub mod player;

pub use grid::{Grid, GridError, Position};
pub use player::{normalize_submission, Player};

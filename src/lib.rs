//! Two-player word hunt on a random letter grid.
//!
//! The engine in [`game::search`] finds every dictionary word traceable on a
//! grid through adjacent, non-repeating cells, pruning paths with the prefix
//! set held by [`dictionary::DictionaryIndex`]. Scoring, grid generation and the
//! console turn driver are built around it.

pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod session;
pub mod utils;

// Console turn driver: input channel, setup prompts and timed turns

pub mod input;
pub mod setup;
pub mod turn;

pub use input::Console;
pub use setup::{ask_turn_duration, await_ready, SetupError};
pub use turn::collect_submissions;

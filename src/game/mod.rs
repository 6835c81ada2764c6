// Game engine modules

pub mod grid;
pub mod round;
pub mod scorer;
pub mod search;
pub mod validator;

pub use grid::{GridGenerator, LetterPolicy};
pub use round::{PlayerResult, Round, RoundOutcome, RoundSettings, Winner};
pub use scorer::{Scorer, WordVerdict};
pub use search::{find_words, find_words_parallel, search, SearchOutcome};

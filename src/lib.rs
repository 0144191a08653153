//! # Wordpool
//!
//! A letter-pool word game for the terminal. Each session deals a fixed
//! pool of letters; the player types words, a word scores its length in
//! points when every letter it uses is available in the pool and the
//! word is in the dictionary, and scoring words compete for a bounded
//! high-score table.

pub mod dictionary;
pub mod error;
pub mod game;
pub mod pool;
pub mod scores;
pub mod validate;

pub use dictionary::Dictionary;
pub use error::GameError;
pub use game::{GameSession, QUIT_COMMAND};
pub use pool::LetterPool;
pub use scores::{HighScoreEntry, HighScoreTable, InsertOutcome, DEFAULT_MAX_LEN};
pub use validate::{is_valid, top_words, word_score};

/// Number of letters dealt into a generated pool.
pub const POOL_SIZE: usize = 10;

/// Load the dictionary from the embedded file. Fails if the resource
/// holds no words; there is no fallback dictionary.
pub fn load_dictionary() -> Result<Dictionary, GameError> {
    Dictionary::parse(include_str!("../dictionary/dictionary.txt"))
}

//! A single game session: pool, dictionary and high-score table behind
//! one entry point.

use crate::dictionary::Dictionary;
use crate::pool::LetterPool;
use crate::scores::{HighScoreEntry, HighScoreTable};
use crate::validate::{is_valid, top_words, word_score};

/// Out-of-band terminate signal. The command loop checks for this
/// before submitting a line; it is never scored.
pub const QUIT_COMMAND: &str = "quit!";

/// All mutable game state for one sitting. The pool and dictionary are
/// fixed at construction; only the high-score table changes, and only
/// through [`GameSession::submit_word`].
#[derive(Debug, Clone)]
pub struct GameSession {
    pool: LetterPool,
    dictionary: Dictionary,
    scores: HighScoreTable,
}

impl GameSession {
    pub fn new(pool: LetterPool, dictionary: Dictionary) -> Self {
        Self { pool, dictionary, scores: HighScoreTable::new() }
    }

    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Current high-score standings, best first.
    pub fn standings(&self) -> &[HighScoreEntry] {
        self.scores.standings()
    }

    /// Submit one word. Returns the points awarded: the word's length
    /// when it is valid and takes a place in the score table, 0 for an
    /// empty line, an invalid word, or a word already on the table.
    pub fn submit_word(&mut self, word: &str) -> u32 {
        if word.is_empty() {
            return 0;
        }

        if !is_valid(word, &self.pool, &self.dictionary) {
            return 0;
        }

        let score = word_score(word);
        let outcome = self.scores.try_insert(word, score);
        if outcome.accepted {
            score
        } else {
            0
        }
    }

    /// The best-scoring words the dictionary can form from this pool.
    pub fn top_words(&self, n: usize) -> Vec<(&str, u32)> {
        top_words(&self.pool, &self.dictionary, n)
    }
}

//! The bounded high-score table.
//!
//! Entries are ranked by score descending; ties keep their insertion
//! order, earliest first. The table holds at most `DEFAULT_MAX_LEN`
//! entries and every word appears at most once.

/// Nominal table bound. The working cap enforced on insertion is one
/// less than this (see [`HighScoreTable::try_insert`]).
pub const DEFAULT_MAX_LEN: usize = 10;

/// One ranked submission. Entries are never mutated in place; an
/// outscored entry is evicted and a resubmitted word is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub word: String,
    pub score: u32,
}

/// Outcome of a [`HighScoreTable::try_insert`] call: whether the word
/// was taken, plus a snapshot of the standings after the call.
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    pub accepted: bool,
    pub standings: Vec<HighScoreEntry>,
}

/// An ordered, bounded collection of unique-word score entries.
#[derive(Debug, Clone)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
    max_len: usize,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    /// Table with a custom bound. `max_len` must be at least 2: the
    /// insertion algorithm works against the fixed boundary index
    /// `max_len - 2`.
    pub fn with_max_len(max_len: usize) -> Self {
        assert!(max_len >= 2, "table bound must be at least 2");
        Self { entries: Vec::with_capacity(max_len), max_len }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether `word` currently holds a place in the table.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    /// Entry at a 0-based rank, 0 = highest score. Out-of-range
    /// positions answer `None`; nothing here can panic.
    pub fn entry_at(&self, position: usize) -> Option<&HighScoreEntry> {
        self.entries.get(position)
    }

    /// Current standings, best first.
    pub fn standings(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Submit a scored word to the table.
    ///
    /// A word already holding a place is rejected outright with no
    /// state change. Otherwise the entry is added, the table is
    /// stable-sorted by score descending (so earlier submissions of an
    /// equal score keep the better rank) and truncated to `max_len - 1`
    /// entries.
    ///
    /// After truncation comes the boundary re-admission rule: if the
    /// entry at the fixed index `max_len - 2` now ties the submitted
    /// score, the submission is offered to the table a second time
    /// under the same duplicate guard. When the word survived
    /// truncation the second offer collapses against the guard and
    /// nothing changes; when the word
    /// was itself just evicted on a tie it re-enters at the back, and
    /// the table holds `max_len` entries until the next call re-ranks
    /// and truncates.
    pub fn try_insert(&mut self, word: &str, score: u32) -> InsertOutcome {
        if self.contains(word) {
            return InsertOutcome { accepted: false, standings: self.entries.clone() };
        }

        self.entries.push(HighScoreEntry { word: word.to_string(), score });
        // Vec::sort_by is stable: equal scores keep their pre-sort
        // order, which is insertion order across repeated calls.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.max_len - 1);

        let boundary = self.max_len - 2;
        let ties_boundary = self
            .entry_at(boundary)
            .map_or(false, |entry| entry.score == score);
        if ties_boundary && !self.contains(word) {
            self.entries.push(HighScoreEntry { word: word.to_string(), score });
        }

        InsertOutcome { accepted: true, standings: self.entries.clone() }
    }
}

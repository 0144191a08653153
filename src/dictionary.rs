//! The word dictionary submissions are checked against.

use std::collections::HashSet;

use crate::error::GameError;

/// An immutable set of lowercase words, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Parse a one-word-per-line text resource. Blank lines are
    /// skipped and words are lowercased. An empty resource is a fatal
    /// startup condition per the game rules, so it is an error here.
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let words: HashSet<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|word| word.to_lowercase())
            .collect();

        if words.is_empty() {
            return Err(GameError::Dictionary(
                "dictionary resource contains no words".to_string(),
            ));
        }

        Ok(Self { words })
    }

    /// Build a dictionary from an explicit word list (mainly for tests).
    pub fn from_words<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(GameError::Dictionary("word list is empty".to_string()));
        }
        Ok(Self { words })
    }

    /// Exact membership test; inputs are pre-lowercased by the caller.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub(crate) fn words(&self) -> &HashSet<String> {
        &self.words
    }
}

//! The letter pool a game session is played against.
//!
//! A pool is the fixed "base string" of lowercase letters dealt at game
//! start, viewed as a multiset: the same letter may appear several times
//! and each occurrence can be spent once per word.

use rand::Rng;

use crate::error::GameError;
use crate::POOL_SIZE;

/// Letter bag the pool generator draws from. Letters appear in rough
/// proportion to their English frequency so a dealt pool usually
/// contains enough vowels to be playable.
const LETTER_BAG: &str = "aaaaaaaaabbccddddeeeeeeeeeeeeffggghhhiiiiiiiiijkllllmmnnnnnnooooooooppqrrrrrrssssttttttuuuuvvwwxyyz";

/// A fixed multiset of lowercase letters, immutable for the duration of
/// a game session.
#[derive(Debug, Clone)]
pub struct LetterPool {
    letters: String,
    counts: [u8; 26],
}

impl LetterPool {
    /// Build a pool from a caller-supplied base string.
    ///
    /// The string must be nonempty ASCII lowercase; anything else is a
    /// startup error, not a recoverable condition.
    pub fn from_letters(letters: &str) -> Result<Self, GameError> {
        if letters.is_empty() {
            return Err(GameError::Pool("base string is empty".to_string()));
        }
        if !letters.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(GameError::Pool(format!(
                "base string {:?} must be lowercase a-z only",
                letters
            )));
        }

        let mut counts = [0u8; 26];
        for b in letters.bytes() {
            let i = (b - b'a') as usize;
            counts[i] = counts[i].saturating_add(1);
        }

        Ok(Self { letters: letters.to_string(), counts })
    }

    /// Deal a random pool of `POOL_SIZE` letters from the weighted bag.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let bag = LETTER_BAG.as_bytes();
        let mut letters = String::with_capacity(POOL_SIZE);
        let mut counts = [0u8; 26];
        for _ in 0..POOL_SIZE {
            let b = bag[rng.gen_range(0..bag.len())];
            letters.push(b as char);
            counts[(b - b'a') as usize] += 1;
        }
        Self { letters, counts }
    }

    /// The base string as dealt, in original order.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Presence test on the raw base string. This is the set view of
    /// the pool: it says nothing about how many times `c` may be used.
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(c)
    }

    /// Number of times `c` occurs in the pool. Zero for anything
    /// outside a-z.
    pub fn count(&self, c: char) -> u8 {
        if c.is_ascii_lowercase() {
            self.counts[(c as u8 - b'a') as usize]
        } else {
            0
        }
    }

    pub(crate) fn counts(&self) -> &[u8; 26] {
        &self.counts
    }
}

impl std::fmt::Display for LetterPool {
    /// Spaced uppercase letters for the game banner, e.g. `E A T P O`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for c in self.letters.chars() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", c.to_ascii_uppercase())?;
            first = false;
        }
        Ok(())
    }
}

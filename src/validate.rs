//! Submission validity checking and scoring.
//!
//! A word is an acceptable submission when it is a dictionary word and
//! its letters form a sub-multiset of the pool: every letter the word
//! uses must be in the pool, no letter more times than the pool holds
//! it.

use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::pool::LetterPool;

/// Decide whether `word` is an acceptable submission against `pool` and
/// `dictionary`.
///
/// Three checks run in order:
/// 1. every character of `word` is present somewhere in the base string
///    (a set-membership fast path over the raw pool string);
/// 2. `word` is a dictionary word;
/// 3. no character of `word` is used more times than the pool holds it.
///
/// Check 1 is subsumed by check 3 but is kept as an independent pass:
/// it bails out on foreign letters before the dictionary lookup and the
/// per-letter accounting run.
pub fn is_valid(word: &str, pool: &LetterPool, dictionary: &Dictionary) -> bool {
    for c in word.chars() {
        if !pool.contains(c) {
            return false;
        }
    }

    if !dictionary.contains(word) {
        return false;
    }

    let mut used = [0u32; 26];
    for b in word.bytes() {
        if !b.is_ascii_lowercase() {
            return false;
        }
        used[(b - b'a') as usize] += 1;
    }

    let available = pool.counts();
    for i in 0..26 {
        if used[i] > u32::from(available[i]) {
            return false;
        }
    }

    true
}

/// Score for a valid word: one point per letter. No rare-letter or
/// length-tier bonuses.
pub fn word_score(word: &str) -> u32 {
    word.chars().count() as u32
}

/// The best-scoring dictionary words formable from `pool`, ranked by
/// score descending then alphabetically, truncated to `n`.
///
/// This sweeps the whole dictionary, so it runs the validity check in
/// parallel.
pub fn top_words<'a>(
    pool: &LetterPool,
    dictionary: &'a Dictionary,
    n: usize,
) -> Vec<(&'a str, u32)> {
    let mut ranked: Vec<(&str, u32)> = dictionary
        .words()
        .par_iter()
        .filter(|word| is_valid(word.as_str(), pool, dictionary))
        .map(|word| (word.as_str(), word_score(word)))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
}

use std::collections::HashSet;

use serde::Serialize;

use crate::{dictionary::DictionaryIndex, models::Player};

/// Why a submitted word did or did not score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum WordVerdict {
    Scored { points: u32 },
    /// Both players submitted it, so neither gets credit
    Shared,
    NotInDictionary,
    /// A dictionary word with no path on this grid
    NotOnGrid,
}

pub struct Scorer;

impl Scorer {
    /// Points for a word of `length` letters.
    ///
    /// Scoring rules:
    /// - 3 or 4 letters: 1
    /// - 5 letters: 2
    /// - 6 letters: 3
    /// - 7 letters: 5
    /// - 8 or more letters: 11
    /// - anything shorter than 3 letters scores nothing
    pub fn word_points(length: usize) -> u32 {
        match length {
            0..=2 => 0,
            3 | 4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        }
    }

    /// Points for a single word, counted in letters rather than bytes
    pub fn points_for(word: &str) -> u32 {
        Self::word_points(word.chars().count())
    }

    /// Total points for a set of legal words
    pub fn score_words<'a, I>(words: I) -> u32
    where
        I: IntoIterator<Item = &'a String>,
    {
        words.into_iter().map(|word| Self::points_for(word)).sum()
    }

    /// Drop words both players submitted from both players. Returns the shared words.
    pub fn remove_shared(first: &mut Player, second: &mut Player) -> HashSet<String> {
        let shared: HashSet<String> = first.words.intersection(&second.words).cloned().collect();
        first.words.retain(|word| !shared.contains(word));
        second.words.retain(|word| !shared.contains(word));
        shared
    }

    /// Keep only the player's words present in the found set. Returns the rejected words.
    pub fn retain_found(player: &mut Player, found: &HashSet<String>) -> HashSet<String> {
        let rejected: HashSet<String> = player.words.difference(found).cloned().collect();
        player.words.retain(|word| found.contains(word));
        rejected
    }

    /// Classify a word that survived shared-word removal
    pub fn judge(word: &str, found: &HashSet<String>, index: &DictionaryIndex) -> WordVerdict {
        if found.contains(word) {
            WordVerdict::Scored {
                points: Self::points_for(word),
            }
        } else if index.is_word(word) {
            WordVerdict::NotOnGrid
        } else {
            WordVerdict::NotInDictionary
        }
    }
}

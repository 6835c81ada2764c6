use std::collections::{BTreeMap, HashSet};

use anyhow::{bail, Result};
use rand::Rng;
use serde::Serialize;

use crate::{
    dictionary::DictionaryIndex,
    game::{
        grid::{GridGenerator, LetterPolicy},
        scorer::{Scorer, WordVerdict},
        search::find_words_parallel,
    },
    models::{Grid, Player},
};

/// Grid shape and search settings for building a round
#[derive(Debug, Clone, Copy)]
pub struct RoundSettings {
    pub rows: usize,
    pub cols: usize,
    pub letters: LetterPolicy,
    pub max_attempts: u32,
    pub search_workers: usize,
}

/// A grid together with every word it contains
#[derive(Debug, Clone)]
pub struct Round {
    pub grid: Grid,
    pub found: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerResult {
    pub name: String,
    pub score: u32,
    /// Words that earned credit, sorted
    pub words: Vec<String>,
    pub verdicts: BTreeMap<String, WordVerdict>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Winner {
    Player { name: String },
    Tie,
}

/// Everything worth reporting once a round is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub grid: Vec<String>,
    pub found_words: Vec<String>,
    pub players: [PlayerResult; 2],
    pub winner: Winner,
}

impl Round {
    pub fn new(grid: Grid, index: &DictionaryIndex, search_workers: usize) -> Self {
        let found = find_words_parallel(&grid, index, search_workers);
        Self { grid, found }
    }

    /// Generate grids until one holds at least one word
    pub fn generate(index: &DictionaryIndex, settings: &RoundSettings) -> Result<Self> {
        Self::generate_with_rng(index, settings, &mut rand::rng())
    }

    pub fn generate_with_rng(
        index: &DictionaryIndex,
        settings: &RoundSettings,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        if index.is_empty() {
            bail!("Dictionary is empty, no grid can contain a word");
        }

        for attempt in 1..=settings.max_attempts {
            let grid = GridGenerator::generate_with_rng(
                settings.rows,
                settings.cols,
                settings.letters,
                rng,
            );
            let round = Self::new(grid, index, settings.search_workers);
            if !round.found.is_empty() {
                tracing::info!(
                    "Generated grid with {} words on attempt {}",
                    round.found.len(),
                    attempt
                );
                return Ok(round);
            }
            tracing::warn!("No valid words found in grid (attempt {}), regenerating", attempt);
        }

        bail!(
            "No grid with a dictionary word after {} attempts",
            settings.max_attempts
        )
    }

    /// Score both players: shared words are dropped first, then anything not
    /// found on the grid.
    pub fn resolve(
        &self,
        index: &DictionaryIndex,
        mut first: Player,
        mut second: Player,
    ) -> RoundOutcome {
        let shared = Scorer::remove_shared(&mut first, &mut second);
        if !shared.is_empty() {
            tracing::info!("{} shared words removed from both players", shared.len());
        }

        let first = self.player_result(index, first, &shared);
        let second = self.player_result(index, second, &shared);

        let winner = if first.score > second.score {
            Winner::Player {
                name: first.name.clone(),
            }
        } else if second.score > first.score {
            Winner::Player {
                name: second.name.clone(),
            }
        } else {
            Winner::Tie
        };

        let mut found_words: Vec<String> = self.found.iter().cloned().collect();
        found_words.sort();

        RoundOutcome {
            grid: self
                .grid
                .letter_rows()
                .iter()
                .map(|row| row.iter().collect())
                .collect(),
            found_words,
            players: [first, second],
            winner,
        }
    }

    fn player_result(
        &self,
        index: &DictionaryIndex,
        mut player: Player,
        shared: &HashSet<String>,
    ) -> PlayerResult {
        let mut verdicts: BTreeMap<String, WordVerdict> = shared
            .iter()
            .map(|word| (word.clone(), WordVerdict::Shared))
            .collect();
        for word in &player.words {
            verdicts.insert(word.clone(), Scorer::judge(word, &self.found, index));
        }

        Scorer::retain_found(&mut player, &self.found);
        let score = Scorer::score_words(&player.words);

        let mut words: Vec<String> = player.words.into_iter().collect();
        words.sort();

        tracing::debug!("{} scored {} with {} words", player.name, score, words.len());

        PlayerResult {
            name: player.name,
            score,
            words,
            verdicts,
        }
    }
}

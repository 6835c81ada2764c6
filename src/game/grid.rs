use std::str::FromStr;

use anyhow::bail;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    models::Grid,
    utils::letters::{get_cumulative_distribution, ALPHABET},
};

/// How grid letters are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterPolicy {
    /// Every letter A-Z equally likely
    #[default]
    Uniform,
    /// English letter frequencies
    Weighted,
}

impl FromStr for LetterPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "weighted" => Ok(Self::Weighted),
            other => bail!("unknown letter policy {other:?}, expected uniform or weighted"),
        }
    }
}

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a new `rows` x `cols` grid
    pub fn generate(rows: usize, cols: usize, policy: LetterPolicy) -> Grid {
        Self::generate_with_rng(rows, cols, policy, &mut rand::rng())
    }

    pub fn generate_with_rng(
        rows: usize,
        cols: usize,
        policy: LetterPolicy,
        rng: &mut impl Rng,
    ) -> Grid {
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().map_or(0.0, |(_, c)| *c);

        let mut letters = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for _ in 0..cols {
                let letter = match policy {
                    LetterPolicy::Uniform => ALPHABET[rng.random_range(0..ALPHABET.len())],
                    LetterPolicy::Weighted => Self::random_letter(&cumulative_dist, total, rng),
                };
                row.push(letter);
            }
            letters.push(row);
        }

        Grid::from_letters(letters)
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'E' // Fallback
    }
}

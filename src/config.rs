use anyhow::{bail, Context, Result};
use std::{env, time::Duration};

use crate::game::{LetterPolicy, RoundSettings};

#[derive(Debug, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub players: PlayerConfig,
    pub report: ReportFormat,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub grid_size: usize,
    pub letters: LetterPolicy,
    pub max_grid_attempts: u32,
    /// Prompted for at startup when unset
    pub turn_duration: Option<Duration>,
    pub search_workers: usize,
}

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub names: [String; 2],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let grid_size: usize = lookup("GRID_SIZE")
            .unwrap_or_else(|| "4".to_string())
            .parse()
            .context("GRID_SIZE must be a number")?;
        if grid_size == 0 {
            bail!("GRID_SIZE must be at least 1");
        }

        let max_grid_attempts: u32 = lookup("MAX_GRID_ATTEMPTS")
            .unwrap_or_else(|| "100".to_string())
            .parse()
            .context("MAX_GRID_ATTEMPTS must be a number")?;
        if max_grid_attempts == 0 {
            bail!("MAX_GRID_ATTEMPTS must be at least 1");
        }

        let search_workers: usize = lookup("SEARCH_WORKERS")
            .unwrap_or_else(|| "1".to_string())
            .parse()
            .context("SEARCH_WORKERS must be a number")?;

        let turn_duration = match lookup("TURN_DURATION") {
            Some(raw) => {
                let seconds: u64 = raw
                    .trim()
                    .parse()
                    .context("TURN_DURATION must be a number of seconds")?;
                if seconds == 0 {
                    bail!("TURN_DURATION must be positive");
                }
                Some(Duration::from_secs(seconds))
            }
            None => None,
        };

        let game = GameConfig {
            dictionary_path: lookup("DICTIONARY_PATH")
                .unwrap_or_else(|| "./wordlist.txt".to_string()),
            grid_size,
            letters: lookup("GRID_LETTERS")
                .unwrap_or_else(|| "uniform".to_string())
                .parse()
                .context("GRID_LETTERS must be uniform or weighted")?,
            max_grid_attempts,
            turn_duration,
            search_workers,
        };

        let players = PlayerConfig {
            names: [
                lookup("PLAYER_ONE_NAME").unwrap_or_else(|| "Player 1".to_string()),
                lookup("PLAYER_TWO_NAME").unwrap_or_else(|| "Player 2".to_string()),
            ],
        };

        let report = match lookup("REPORT_FORMAT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "text" => ReportFormat::Text,
                "json" => ReportFormat::Json,
                other => bail!("REPORT_FORMAT must be text or json, got {other:?}"),
            },
            None => ReportFormat::default(),
        };

        Ok(Config {
            game,
            players,
            report,
        })
    }

    pub fn round_settings(&self) -> RoundSettings {
        RoundSettings {
            rows: self.game.grid_size,
            cols: self.game.grid_size,
            letters: self.game.letters,
            max_attempts: self.game.max_grid_attempts,
            search_workers: self.game.search_workers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.game.dictionary_path, "./wordlist.txt");
        assert_eq!(config.game.grid_size, 4);
        assert_eq!(config.game.letters, LetterPolicy::Uniform);
        assert_eq!(config.game.turn_duration, None);
        assert_eq!(config.game.search_workers, 1);
        assert_eq!(config.players.names, ["Player 1", "Player 2"]);
        assert_eq!(config.report, ReportFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GRID_SIZE", "5"),
            ("GRID_LETTERS", "weighted"),
            ("TURN_DURATION", "45"),
            ("SEARCH_WORKERS", "4"),
            ("PLAYER_ONE_NAME", "Ada"),
            ("REPORT_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.game.turn_duration, Some(Duration::from_secs(45)));
        assert_eq!(config.players.names[0], "Ada");
        assert_eq!(config.report, ReportFormat::Json);

        let settings = config.round_settings();
        assert_eq!((settings.rows, settings.cols), (5, 5));
        assert_eq!(settings.letters, LetterPolicy::Weighted);
        assert_eq!(settings.search_workers, 4);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config_from(&[("GRID_SIZE", "0")]).is_err());
        assert!(config_from(&[("GRID_SIZE", "big")]).is_err());
        assert!(config_from(&[("TURN_DURATION", "0")]).is_err());
        assert!(config_from(&[("GRID_LETTERS", "scrabble")]).is_err());
        assert!(config_from(&[("REPORT_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_grid_attempts_and_workers_validated() {
        assert!(config_from(&[("MAX_GRID_ATTEMPTS", "0")]).is_err());
        assert!(config_from(&[("MAX_GRID_ATTEMPTS", "lots")]).is_err());
        assert!(config_from(&[("SEARCH_WORKERS", "-2")]).is_err());
        assert!(config_from(&[("SEARCH_WORKERS", "many")]).is_err());

        let config = config_from(&[("MAX_GRID_ATTEMPTS", "1"), ("SEARCH_WORKERS", "0")]).unwrap();
        assert_eq!(config.game.max_grid_attempts, 1);
        assert_eq!(config.game.search_workers, 0);
    }

    #[test]
    fn test_large_turn_duration_accepted() {
        let config = config_from(&[("TURN_DURATION", "18446744073709551615")]).unwrap();
        assert_eq!(config.game.turn_duration, Some(Duration::from_secs(u64::MAX)));
    }
}

use std::collections::HashSet;

/// A named player and the words they submitted this round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Normalized submissions: trimmed, uppercase, non-empty
    pub words: HashSet<String>,
}

impl Player {
    pub fn new<I, S>(name: impl Into<String>, submissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = submissions
            .into_iter()
            .filter_map(|word| normalize_submission(word.as_ref()))
            .collect();

        Self {
            name: name.into(),
            words,
        }
    }
}

/// Trim and uppercase a raw submission, dropping blank input
pub fn normalize_submission(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_normalizes_and_dedupes() {
        let player = Player::new("Ada", ["cat", " CAT ", "", "Dog"]);
        assert_eq!(player.name, "Ada");
        assert_eq!(player.words.len(), 2);
        assert!(player.words.contains("CAT"));
        assert!(player.words.contains("DOG"));
    }

    #[test]
    fn test_blank_submission_dropped() {
        assert_eq!(normalize_submission("   "), None);
        assert_eq!(normalize_submission(" bird\n"), Some("BIRD".to_string()));
    }
}

use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Word and prefix lookup for one round.
///
/// Built once from a raw word list and never updated; a new round builds a
/// fresh index. Every prefix of every word is present in `prefixes`.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl DictionaryIndex {
    /// Build from raw words: trimmed, uppercased, blanks dropped
    pub fn from_words<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = raw
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        let mut prefixes = HashSet::new();
        for word in &words {
            for (end, ch) in word.char_indices() {
                prefixes.insert(word[..end + ch.len_utf8()].to_string());
            }
        }

        Self { words, prefixes }
    }

    /// Build from line-oriented word list text
    pub fn from_reader_str(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let index = Self::from_reader_str(&content);

        tracing::info!(
            "Loaded {} words ({} prefixes) into dictionary",
            index.len(),
            index.prefix_count()
        );

        Ok(index)
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact membership in the word set
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    /// Whether `s` starts at least one word (a word is its own prefix)
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }
}

use std::collections::HashSet;
use std::thread;

use dashmap::DashSet;

use crate::{
    dictionary::DictionaryIndex,
    models::{Grid, Position},
};

/// Words found on a grid, plus how much of the grid the search touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub words: HashSet<String>,
    /// Cells whose letter extended a live prefix
    pub cells_expanded: usize,
}

/// Every dictionary word that can be traced on `grid` through distinct,
/// king-move-adjacent cells.
pub fn find_words(grid: &Grid, index: &DictionaryIndex) -> HashSet<String> {
    search(grid, index).words
}

/// Sequential search over every start cell
pub fn search(grid: &Grid, index: &DictionaryIndex) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    if grid.is_empty() || index.is_empty() {
        return outcome;
    }

    let mut visited = vec![false; grid.cell_count()];
    let mut word = String::new();

    for start in grid.positions() {
        extend_path(grid, index, start, &mut word, &mut visited, &mut outcome);
    }

    tracing::debug!(
        "Search over {}x{} grid found {} words, expanded {} cells",
        grid.rows(),
        grid.cols(),
        outcome.words.len(),
        outcome.cells_expanded
    );

    outcome
}

/// Search with start cells spread across `workers` threads.
///
/// Each worker owns its visited vector and merges its words into a shared
/// set once all its start cells are done.
pub fn find_words_parallel(grid: &Grid, index: &DictionaryIndex, workers: usize) -> HashSet<String> {
    let workers = workers.min(grid.cell_count());
    if workers <= 1 {
        return find_words(grid, index);
    }
    if index.is_empty() {
        return HashSet::new();
    }

    let starts: Vec<Position> = grid.positions().collect();
    let found: DashSet<String> = DashSet::new();

    thread::scope(|scope| {
        for worker in 0..workers {
            let starts = &starts;
            let found = &found;
            scope.spawn(move || {
                let mut local = SearchOutcome::default();
                let mut visited = vec![false; grid.cell_count()];
                let mut word = String::new();

                for &start in starts.iter().skip(worker).step_by(workers) {
                    extend_path(grid, index, start, &mut word, &mut visited, &mut local);
                }

                for word in local.words {
                    found.insert(word);
                }
            });
        }
    });

    tracing::debug!(
        "Parallel search with {} workers found {} words",
        workers,
        found.len()
    );

    found.into_iter().collect()
}

/// One DFS step: try to extend `word` with the letter at `pos`.
///
/// `word` and `visited` are restored to their entry state before returning.
fn extend_path(
    grid: &Grid,
    index: &DictionaryIndex,
    pos: Position,
    word: &mut String,
    visited: &mut [bool],
    outcome: &mut SearchOutcome,
) {
    let Some(letter) = grid.get(pos) else {
        return;
    };
    let cell = grid.index_of(pos);
    if visited[cell] {
        return;
    }

    word.push(letter);

    if index.is_prefix(word) {
        outcome.cells_expanded += 1;

        if index.is_word(word) && !outcome.words.contains(word.as_str()) {
            outcome.words.insert(word.clone());
        }

        visited[cell] = true;
        for next in grid.neighbors(pos) {
            extend_path(grid, index, next, word, visited, outcome);
        }
        visited[cell] = false;
    }

    word.pop();
}

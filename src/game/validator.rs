use crate::models::{Grid, Position};
use std::collections::HashSet;

/// Validate that positions form a valid path on the grid
pub fn is_valid_path(grid: &Grid, positions: &[Position]) -> bool {
    if positions.is_empty() {
        return false;
    }

    // Check that each position is adjacent to the previous one
    for window in positions.windows(2) {
        if !are_adjacent(&window[0], &window[1]) {
            return false;
        }
    }

    // Check that no position is used twice
    let unique_positions: HashSet<_> = positions.iter().collect();
    if unique_positions.len() != positions.len() {
        return false;
    }

    positions.iter().all(|pos| grid.get(*pos).is_some())
}

/// Check if two positions are adjacent (including diagonals)
pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
    let row_diff = pos1.row.abs_diff(pos2.row);
    let col_diff = pos1.col.abs_diff(pos2.col);

    row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
}

/// Extract word from grid positions, `None` if any position is off the grid
pub fn extract_word(grid: &Grid, positions: &[Position]) -> Option<String> {
    positions.iter().map(|pos| grid.get(*pos)).collect()
}

/// Find one path spelling `word`, recording the cells it uses.
///
/// Matching is exact, so callers pass uppercase words.
pub fn trace_word(grid: &Grid, word: &str) -> Option<Vec<Position>> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return None;
    }

    let mut path = Vec::with_capacity(letters.len());
    let found = grid
        .positions()
        .any(|start| trace_from(grid, &letters, start, &mut path));
    found.then_some(path)
}

fn trace_from(grid: &Grid, letters: &[char], pos: Position, path: &mut Vec<Position>) -> bool {
    let Some((first, rest)) = letters.split_first() else {
        return true;
    };
    if grid.get(pos) != Some(*first) || path.contains(&pos) {
        return false;
    }

    path.push(pos);
    if rest.is_empty() || grid.neighbors(pos).any(|next| trace_from(grid, rest, next, path)) {
        return true;
    }
    path.pop();
    false
}

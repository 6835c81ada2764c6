use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) holds {letter:?}, which is not a single letter")]
    InvalidLetter { row: usize, col: usize, letter: char },
}

/// Rectangular letter board for one round. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of letters, uppercasing each cell.
    ///
    /// Rows must all have the same length. An empty row list, or rows with no
    /// cells, produce an empty grid.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(rows.len());
        for (row, letters) in rows.into_iter().enumerate() {
            if letters.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: letters.len(),
                });
            }

            let mut normalized = Vec::with_capacity(cols);
            for (col, letter) in letters.into_iter().enumerate() {
                let mut upper = letter.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(u), None) if letter.is_alphabetic() => normalized.push(u),
                    _ => return Err(GridError::InvalidLetter { row, col, letter }),
                }
            }
            cells.push(normalized);
        }

        Ok(Self { cells, cols })
    }

    /// Wrap rows already known to be rectangular and uppercase
    pub(crate) fn from_letters(cells: Vec<Vec<char>>) -> Self {
        let cols = cells.first().map_or(0, Vec::len);
        debug_assert!(cells.iter().all(|row| row.len() == cols));
        Self { cells, cols }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Letter at `pos`, or `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Row-major index of an in-bounds position
    pub fn index_of(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols).map(move |col| Position { row, col }))
    }

    /// The up to 8 in-bounds king-move neighbors of `pos`
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];

        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            (row < self.rows() && col < self.cols).then_some(Position { row, col })
        })
    }

    pub fn letter_rows(&self) -> &[Vec<char>] {
        &self.cells
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// One row per line; whitespace inside a row is ignored, blank lines skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        Self::new(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_uppercases_letters() {
        let grid = Grid::new(vec![vec!['b', 'a'], vec!['o', 't']]).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some('B'));
        assert_eq!(grid.get(Position::new(1, 1)), Some('T'));
        assert_eq!(grid.get(Position::new(2, 0)), None);
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let err = Grid::new(vec![vec!['A', 'B'], vec!['C']]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_non_letter_rejected() {
        let err = Grid::new(vec![vec!['A', '3']]).unwrap_err();
        assert!(matches!(err, GridError::InvalidLetter { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_empty_grids() {
        assert!(Grid::new(vec![]).unwrap().is_empty());
        let no_cols = Grid::new(vec![vec![], vec![]]).unwrap();
        assert_eq!(no_cols.rows(), 2);
        assert!(no_cols.is_empty());
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let grid: Grid = "ABC\nDEF\nGHI".parse().unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbors(Position::new(0, 1)).count(), 5);
        assert_eq!(grid.neighbors(Position::new(1, 1)).count(), 8);
        assert!(grid
            .neighbors(Position::new(1, 1))
            .all(|p| p != Position::new(1, 1)));
    }

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "B A\nO T\n".parse().unwrap();
        assert_eq!(grid, "BA\nOT".parse::<Grid>().unwrap());
        assert_eq!(grid.to_string(), "B A\nO T\n");
    }

    #[test]
    fn test_positions_row_major() {
        let grid: Grid = "AB\nCD".parse().unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
        assert_eq!(grid.index_of(Position::new(1, 0)), 2);
    }
}

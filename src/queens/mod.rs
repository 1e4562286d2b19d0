//! N-Queens search.
//!
//! Three independent searches share the same row-by-row shape:
//! [`solve_all`] materializes every board, [`count_all`] only counts using
//! conflict sets, and [`QueenStepper`] walks the tree one cell at a time for
//! step-by-step display.

mod count;
mod solve;
mod stepper;
mod symmetry;

pub use count::count_all;
pub use solve::solve_all;
pub use stepper::{QueenStepper, StepEvent};
pub use symmetry::{canonical_form, classify, unique_solutions, variants};

use serde::Serialize;
use std::fmt;

pub const QUEEN: char = 'Q';
pub const EMPTY: char = '.';

/// A finished board: one string per row, `Q` for the queen and `.` elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Placement(Vec<String>);

impl Placement {
    /// Builds the board whose row `r` holds its queen at `cols[r]`.
    pub fn from_columns(cols: &[usize]) -> Self {
        let n = cols.len();
        let rows = cols
            .iter()
            .map(|&c| {
                (0..n)
                    .map(|i| if i == c { QUEEN } else { EMPTY })
                    .collect()
            })
            .collect();
        Self(rows)
    }

    pub fn rows(&self) -> &[String] {
        &self.0
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Queen column per row. `None` if some row has no queen.
    pub fn queen_columns(&self) -> Option<Vec<usize>> {
        self.0.iter().map(|row| row.find(QUEEN)).collect()
    }

    /// One queen per row and column, no shared diagonal, square shape.
    pub fn is_valid(&self) -> bool {
        let n = self.size();
        let shape_ok = self.0.iter().all(|row| {
            row.chars().count() == n
                && row.chars().filter(|&ch| ch == QUEEN).count() == 1
                && row.chars().all(|ch| ch == QUEEN || ch == EMPTY)
        });
        if !shape_ok {
            return false;
        }
        let Some(cols) = self.queen_columns() else {
            return false;
        };
        for r1 in 0..n {
            for r2 in r1 + 1..n {
                let (c1, c2) = (cols[r1], cols[r2]);
                if c1 == c2 || c1.abs_diff(c2) == r2 - r1 {
                    return false;
                }
            }
        }
        true
    }

    /// Chess-style listing ordered by file, e.g. `a1, b5, c8, …`.
    pub fn notation(&self) -> String {
        let Some(cols) = self.queen_columns() else {
            return String::new();
        };
        let mut squares: Vec<(usize, usize)> = cols
            .iter()
            .enumerate()
            .map(|(row, &col)| (col, row))
            .collect();
        squares.sort_unstable();
        squares
            .iter()
            .map(|&(col, row)| format!("{}{}", file_letter(col), row + 1))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

fn file_letter(col: usize) -> char {
    u32::try_from(col)
        .ok()
        .and_then(|c| char::from_u32('a' as u32 + c))
        .unwrap_or('?')
}

/// Scratch board owned by a single search and restored after every branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    cells: Vec<Vec<u8>>,
}

impl Board {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![vec![0; n]; n],
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == 1
    }

    pub fn place(&mut self, row: usize, col: usize) {
        self.cells[row][col] = 1;
    }

    pub fn remove(&mut self, row: usize, col: usize) {
        self.cells[row][col] = 0;
    }

    /// Checks the column and both upward diagonals from `(row, col)`.
    /// Only rows above `row` are inspected.
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        for i in 0..row {
            if self.cells[i][col] == 1 {
                return false;
            }
        }
        for (i, j) in (0..row).rev().zip((0..col).rev()) {
            if self.cells[i][j] == 1 {
                return false;
            }
        }
        for (i, j) in (0..row).rev().zip(col + 1..self.n) {
            if self.cells[i][j] == 1 {
                return false;
            }
        }
        true
    }

    /// Same answer as [`Board::is_safe`], found by visiting every cell above
    /// `row` and testing any queen there for a shared column or diagonal.
    pub fn is_safe_naive(&self, row: usize, col: usize) -> bool {
        for (r, cells) in self.cells.iter().enumerate().take(row) {
            for (c, &cell) in cells.iter().enumerate() {
                if cell == 1 && (c == col || c.abs_diff(col) == row - r) {
                    return false;
                }
            }
        }
        true
    }

    pub fn to_placement(&self) -> Placement {
        Placement(
            self.cells
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|&cell| if cell == 1 { QUEEN } else { EMPTY })
                        .collect()
                })
                .collect(),
        )
    }
}

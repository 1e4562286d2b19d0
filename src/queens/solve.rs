use super::{Board, Placement};

/// Every placement of `n` non-attacking queens, one per row.
///
/// Columns are tried in ascending order at each row, so the output order is
/// reproducible.
pub fn solve_all(n: usize) -> Vec<Placement> {
    let mut board = Board::new(n);
    let mut solutions = Vec::new();
    backtrack(&mut board, 0, &mut solutions);
    log::debug!("n={} enumerated {} solutions", n, solutions.len());
    solutions
}

fn backtrack(board: &mut Board, row: usize, solutions: &mut Vec<Placement>) {
    if row == board.size() {
        solutions.push(board.to_placement());
        return;
    }
    for col in 0..board.size() {
        if board.is_safe(row, col) {
            board.place(row, col);
            backtrack(board, row + 1, solutions);
            board.remove(row, col);
        }
    }
}

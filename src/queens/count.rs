use rustc_hash::FxHashSet;

/// Occupied columns and diagonals of the queens placed so far.
#[derive(Default)]
struct Conflicts {
    cols: FxHashSet<usize>,
    /// Keyed by `row - col`.
    neg_diag: FxHashSet<isize>,
    /// Keyed by `row + col`.
    pos_diag: FxHashSet<usize>,
}

impl Conflicts {
    fn is_free(&self, row: usize, col: usize) -> bool {
        !self.cols.contains(&col)
            && !self.neg_diag.contains(&neg_key(row, col))
            && !self.pos_diag.contains(&(row + col))
    }

    fn occupy(&mut self, row: usize, col: usize) {
        self.cols.insert(col);
        self.neg_diag.insert(neg_key(row, col));
        self.pos_diag.insert(row + col);
    }

    fn release(&mut self, row: usize, col: usize) {
        self.cols.remove(&col);
        self.neg_diag.remove(&neg_key(row, col));
        self.pos_diag.remove(&(row + col));
    }
}

fn neg_key(row: usize, col: usize) -> isize {
    row as isize - col as isize
}

/// Number of placements of `n` non-attacking queens, without building boards.
pub fn count_all(n: usize) -> u64 {
    let mut conflicts = Conflicts::default();
    let mut count = 0;
    backtrack(n, 0, &mut conflicts, &mut count);
    log::debug!("n={} counted {} solutions", n, count);
    count
}

fn backtrack(n: usize, row: usize, conflicts: &mut Conflicts, count: &mut u64) {
    if row == n {
        *count += 1;
        return;
    }
    for col in 0..n {
        if conflicts.is_free(row, col) {
            conflicts.occupy(row, col);
            backtrack(n, row + 1, conflicts, count);
            conflicts.release(row, col);
        }
    }
}

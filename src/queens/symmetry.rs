use super::{solve_all, Placement};
use rustc_hash::FxHashSet;

/// The 8 images of a solution under rotation and reflection, as queen
/// columns per row. The input itself comes first.
pub fn variants(cols: &[usize]) -> Vec<Vec<usize>> {
    let n = cols.len();
    let to_cols = |pts: &[(usize, usize)]| -> Vec<usize> {
        let mut v = vec![0; n];
        for &(r, c) in pts {
            v[r] = c;
        }
        v
    };

    let mut out = Vec::with_capacity(8);
    let mut curr: Vec<(usize, usize)> = cols.iter().copied().enumerate().collect();
    for _ in 0..4 {
        out.push(to_cols(&curr));
        let mirrored: Vec<(usize, usize)> = curr.iter().map(|&(r, c)| (r, n - 1 - c)).collect();
        out.push(to_cols(&mirrored));
        // quarter turn
        curr = curr.iter().map(|&(r, c)| (c, n - 1 - r)).collect();
    }
    out
}

/// Smallest of the 8 images; equal for solutions in the same symmetry class.
pub fn canonical_form(cols: &[usize]) -> Vec<usize> {
    variants(cols).into_iter().min().unwrap_or_default()
}

/// Pairs each placement with whether an earlier one is a rotation or
/// reflection of it.
pub fn classify(solutions: &[Placement]) -> Vec<(&Placement, bool)> {
    let mut seen = FxHashSet::default();
    solutions
        .iter()
        .map(|p| {
            let duplicate = match p.queen_columns() {
                Some(cols) => !seen.insert(canonical_form(&cols)),
                None => false,
            };
            (p, duplicate)
        })
        .collect()
}

/// One representative per symmetry class, in discovery order.
pub fn unique_solutions(n: usize) -> Vec<Placement> {
    let all = solve_all(n);
    let unique: Vec<Placement> = classify(&all)
        .into_iter()
        .filter(|&(_, duplicate)| !duplicate)
        .map(|(p, _)| p.clone())
        .collect();
    log::debug!("n={} has {} of {} solutions unique up to symmetry", n, unique.len(), all.len());
    unique
}

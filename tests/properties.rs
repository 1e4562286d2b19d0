use jump_queens_rust::input::{parse_jump_input, Limits};
use jump_queens_rust::jump::compute_min_jumps;
use jump_queens_rust::queens::{count_all, solve_all, QueenStepper};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

const KNOWN_COUNTS: [u64; 9] = [1, 0, 0, 2, 10, 4, 40, 92, 352];

#[test]
fn count_matches_enumeration() {
    for n in 1..=9 {
        let solutions = solve_all(n);
        assert_eq!(count_all(n), solutions.len() as u64, "n={n}");
        assert_eq!(count_all(n), KNOWN_COUNTS[n - 1], "n={n}");
    }
}

#[test]
fn nine_queens_boards_are_valid() {
    let solutions = solve_all(9);
    assert_eq!(solutions.len(), 352);
    for p in &solutions {
        assert!(p.is_valid(), "{p}");
        for row in p.rows() {
            assert_eq!(row.len(), 9);
            assert_eq!(row.matches('Q').count(), 1);
        }
    }
}

#[test]
fn stepper_agrees_on_eight() {
    let mut stepper = QueenStepper::new(8);
    let stepped = stepper.run_to_end().to_vec();
    assert_eq!(stepped, solve_all(8));
}

#[test]
fn queens_are_deterministic() {
    assert_eq!(solve_all(7), solve_all(7));
    assert_eq!(count_all(7), count_all(7));
}

/// Breadth-first reference for the minimum jump count.
fn bfs_min_jumps(nums: &[u32]) -> Option<usize> {
    let last = nums.len() - 1;
    let mut dist = vec![usize::MAX; nums.len()];
    let mut queue = VecDeque::from([0usize]);
    dist[0] = 0;
    while let Some(i) = queue.pop_front() {
        if i == last {
            return Some(dist[i]);
        }
        let end = (i + nums[i] as usize).min(last);
        for j in i + 1..=end {
            if dist[j] == usize::MAX {
                dist[j] = dist[i] + 1;
                queue.push_back(j);
            }
        }
    }
    None
}

#[test]
fn greedy_matches_bfs_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(1337);
    for _ in 0..500 {
        let len = rng.gen_range(1..=40);
        let nums: Vec<u32> = (0..len).map(|_| rng.gen_range(0..=6)).collect();
        let result = compute_min_jumps(&nums);
        match bfs_min_jumps(&nums) {
            Some(want) => {
                assert!(result.reaches_end(), "{nums:?}");
                assert_eq!(result.jumps, want, "{nums:?}");
                assert_eq!(result.path.len(), if len == 1 { 1 } else { want + 1 });
            }
            None => assert!(!result.reaches_end(), "{nums:?}"),
        }
    }
}

#[test]
fn parsed_input_flows_into_solver() {
    let nums = parse_jump_input("2,3,0,1,4", &Limits::default()).unwrap();
    let result = compute_min_jumps(&nums);
    assert_eq!(result.jumps, 2);
    assert_eq!(result.path, vec![0, 2, 4]);
    assert_eq!(result.path_until(result.trace.len() - 1), vec![0, 2]);
}

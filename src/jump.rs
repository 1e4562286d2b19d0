use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// One decision point of the greedy pass.
///
/// Every scanned position produces one entry; committing a jump at that
/// position produces a second entry with `jump_made` set.
///
/// Opened indices are kept as a range so a long input does not store one
/// list per position; use [`JumpTraceEntry::reachable_indices`] to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTraceEntry {
    /// 1-based position of this entry in the trace.
    pub step: usize,
    pub current: usize,
    /// `current + nums[current]`, unclamped.
    pub reach: usize,
    /// Indices opened by this position. Empty on jump entries.
    pub reachable: Range<usize>,
    pub farthest: usize,
    pub current_end: usize,
    pub jumps: usize,
    pub jump_made: bool,
}

impl JumpTraceEntry {
    pub fn reachable_indices(&self) -> Vec<usize> {
        self.reachable.clone().collect()
    }
}

/// camelCase fields plus the rendered `description`; `reachable` is
/// `{ start, end }` with `end` exclusive.
impl Serialize for JumpTraceEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("JumpTraceEntry", 9)?;
        s.serialize_field("step", &self.step)?;
        s.serialize_field("description", &self.to_string())?;
        s.serialize_field("current", &self.current)?;
        s.serialize_field("reach", &self.reach)?;
        s.serialize_field("reachable", &self.reachable)?;
        s.serialize_field("farthest", &self.farthest)?;
        s.serialize_field("currentEnd", &self.current_end)?;
        s.serialize_field("jumps", &self.jumps)?;
        s.serialize_field("jumpMade", &self.jump_made)?;
        s.end()
    }
}

impl fmt::Display for JumpTraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.jump_made {
            write!(
                f,
                "Made jump {}. New boundary: {}",
                self.jumps, self.current_end
            )
        } else {
            write!(
                f,
                "At index {}, can reach up to index {}. Farthest reachable: {}",
                self.current, self.reach, self.farthest
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpResult {
    pub jumps: usize,
    pub trace: Vec<JumpTraceEntry>,
    /// Indices where jumps were committed, then the last index once covered.
    pub path: Vec<usize>,
    #[serde(rename = "reachesEnd")]
    reached_end: bool,
}

impl JumpResult {
    /// Whether the committed boundary ended up covering the last index.
    pub fn reaches_end(&self) -> bool {
        self.reached_end
    }

    /// Jump positions committed within the first `step_index + 1` entries.
    pub fn path_until(&self, step_index: usize) -> Vec<usize> {
        self.trace
            .iter()
            .take(step_index.saturating_add(1))
            .filter(|entry| entry.jump_made)
            .map(|entry| entry.current)
            .collect()
    }
}

/// Minimum number of jumps from index 0 to the last index.
///
/// Single left-to-right pass: `farthest` tracks the best reach seen so far
/// and a jump is committed whenever the scan hits `current_end`, the edge of
/// what the jumps taken so far can cover.
pub fn compute_min_jumps(nums: &[u32]) -> JumpResult {
    let n = nums.len();
    if n <= 1 {
        return JumpResult {
            jumps: 0,
            trace: Vec::new(),
            path: vec![0],
            reached_end: true,
        };
    }

    let last = n - 1;
    let mut trace = Vec::new();
    let mut path = Vec::new();
    let mut jumps = 0;
    let mut current_end = 0;
    let mut farthest = 0;
    let mut reached_end = false;

    for (i, &len) in nums[..last].iter().enumerate() {
        let reach = i.saturating_add(len as usize);
        farthest = farthest.max(reach);

        trace.push(JumpTraceEntry {
            step: trace.len() + 1,
            current: i,
            reach,
            reachable: i + 1..reach.min(last) + 1,
            farthest,
            current_end,
            jumps,
            jump_made: false,
        });

        if i == current_end {
            jumps += 1;
            current_end = farthest;
            path.push(i);
            log::trace!("jump {} committed at index {}, boundary {}", jumps, i, current_end);

            trace.push(JumpTraceEntry {
                step: trace.len() + 1,
                current: i,
                reach,
                reachable: i + 1..i + 1,
                farthest,
                current_end,
                jumps,
                jump_made: true,
            });

            if current_end >= last {
                path.push(last);
                reached_end = true;
                break;
            }
        }
    }

    if !reached_end {
        log::warn!("last index {} is unreachable, boundary stopped at {}", last, current_end);
    }
    log::debug!(
        "{} jumps over {} positions ({} trace entries)",
        jumps,
        n,
        trace.len()
    );

    JumpResult {
        jumps,
        trace,
        path,
        reached_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_inputs() {
        assert_eq!(compute_min_jumps(&[2, 3, 1, 1, 4]).jumps, 2);
        assert_eq!(compute_min_jumps(&[2, 3, 0, 1, 4]).jumps, 2);
        assert_eq!(compute_min_jumps(&[1, 0]).jumps, 1);
        assert_eq!(compute_min_jumps(&[1, 1, 1, 1, 1]).jumps, 4);
        assert_eq!(compute_min_jumps(&[5, 1, 1, 1, 1, 1]).jumps, 1);
        assert_eq!(compute_min_jumps(&[3, 0, 0, 0]).jumps, 1);
    }

    #[test]
    fn single_element_needs_no_jump() {
        for value in [0, 1, 7, 1000] {
            let result = compute_min_jumps(&[value]);
            assert_eq!(result.jumps, 0);
            assert!(result.trace.is_empty());
            assert_eq!(result.path, vec![0]);
            assert!(result.reaches_end());
        }
    }

    #[test]
    fn trace_for_first_example() {
        let result = compute_min_jumps(&[2, 3, 1, 1, 4]);
        assert_eq!(result.trace.len(), 5);
        assert_eq!(result.path, vec![0, 2, 4]);

        let first = &result.trace[0];
        assert_eq!(first.step, 1);
        assert_eq!(first.current, 0);
        assert_eq!(first.reachable, 1..3);
        assert_eq!(first.reachable_indices(), vec![1, 2]);
        assert_eq!((first.farthest, first.current_end, first.jumps), (2, 0, 0));
        assert!(!first.jump_made);

        let commit = &result.trace[1];
        assert!(commit.jump_made);
        assert!(commit.reachable.is_empty());
        assert_eq!((commit.jumps, commit.current_end), (1, 2));

        assert_eq!(result.trace[2].reachable_indices(), vec![2, 3, 4]);
        assert_eq!(result.trace[3].reachable_indices(), vec![3]);

        let last = &result.trace[4];
        assert!(last.jump_made);
        assert_eq!((last.current, last.jumps, last.current_end), (2, 2, 4));
        for (i, entry) in result.trace.iter().enumerate() {
            assert_eq!(entry.step, i + 1);
        }
    }

    #[test]
    fn descriptions() {
        let result = compute_min_jumps(&[2, 3, 1, 1, 4]);
        assert_eq!(
            result.trace[0].to_string(),
            "At index 0, can reach up to index 2. Farthest reachable: 2"
        );
        assert_eq!(result.trace[1].to_string(), "Made jump 1. New boundary: 2");
    }

    #[test]
    fn reachable_is_clamped_to_last_index() {
        let result = compute_min_jumps(&[1000, 0, 0]);
        assert_eq!(result.trace[0].reach, 1000);
        assert_eq!(result.trace[0].reachable_indices(), vec![1, 2]);
    }

    #[test]
    fn path_until_replays_commits() {
        let result = compute_min_jumps(&[2, 3, 1, 1, 4]);
        assert!(result.path_until(0).is_empty());
        assert_eq!(result.path_until(1), vec![0]);
        assert_eq!(result.path_until(3), vec![0]);
        assert_eq!(result.path_until(4), vec![0, 2]);
        assert_eq!(result.path_until(usize::MAX), vec![0, 2]);
    }

    #[test]
    fn unreachable_end_is_reported() {
        let result = compute_min_jumps(&[0, 1]);
        assert_eq!(result.jumps, 1);
        assert!(!result.reaches_end());
        assert_eq!(result.path, vec![0]);

        let result = compute_min_jumps(&[1, 0, 1]);
        assert!(!result.reaches_end());
    }

    #[test]
    fn serializes_camel_case_with_descriptions() {
        let result = compute_min_jumps(&[1, 0]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "jumps": 1,
                "path": [0, 1],
                "reachesEnd": true,
                "trace": [
                    {
                        "step": 1,
                        "description": "At index 0, can reach up to index 1. Farthest reachable: 1",
                        "current": 0,
                        "reach": 1,
                        "reachable": { "start": 1, "end": 2 },
                        "farthest": 1,
                        "currentEnd": 0,
                        "jumps": 0,
                        "jumpMade": false
                    },
                    {
                        "step": 2,
                        "description": "Made jump 1. New boundary: 1",
                        "current": 0,
                        "reach": 1,
                        "reachable": { "start": 1, "end": 1 },
                        "farthest": 1,
                        "currentEnd": 1,
                        "jumps": 1,
                        "jumpMade": true
                    }
                ]
            })
        );
    }

    #[test]
    fn input_limits_keep_ranges() {
        let nums = vec![1000; 10_000];
        let result = compute_min_jumps(&nums);
        assert_eq!(result.jumps, 10);
        assert_eq!(result.trace.len(), 9011);
        assert_eq!(result.trace[0].reachable, 1..1001);
        assert_eq!(result.trace.last().map(|e| e.current_end), Some(10_000));
        assert!(result.trace.iter().all(|e| e.reachable.len() <= 1000));
    }

    #[test]
    fn repeated_calls_agree() {
        let nums = [2, 0, 2, 1, 3, 0, 1, 4];
        assert_eq!(compute_min_jumps(&nums), compute_min_jumps(&nums));
    }
}

use super::{Board, Placement};

/// What a single [`QueenStepper::step`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    Placed { row: usize, col: usize },
    Rejected { row: usize, col: usize },
    /// The queen at `(row, col)` was lifted to try the next column.
    Backtracked { row: usize, col: usize },
    Solution(Placement),
    Finished,
}

/// Depth-first search driven one cell at a time.
///
/// The recursion is replaced by `frames`, the column chosen in each filled
/// row. Legality uses [`Board::is_safe_naive`].
pub struct QueenStepper {
    n: usize,
    board: Board,
    frames: Vec<usize>,
    next_col: usize,
    solution_pending: bool,
    finished: bool,
    steps: u64,
    solutions: Vec<Placement>,
}

impl QueenStepper {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            board: Board::new(n),
            frames: Vec::new(),
            next_col: 0,
            solution_pending: false,
            finished: false,
            steps: 0,
            solutions: Vec::new(),
        }
    }

    pub fn step(&mut self) -> StepEvent {
        if self.finished {
            return StepEvent::Finished;
        }
        self.steps += 1;

        if self.solution_pending {
            self.solution_pending = false;
            let placement = self.board.to_placement();
            self.solutions.push(placement.clone());
            log::trace!("solution #{} after {} steps", self.solutions.len(), self.steps);
            return StepEvent::Solution(placement);
        }

        let row = self.frames.len();
        if row == self.n || self.next_col >= self.n {
            return match self.frames.pop() {
                Some(col) => {
                    let row = self.frames.len();
                    self.board.remove(row, col);
                    self.next_col = col + 1;
                    StepEvent::Backtracked { row, col }
                }
                None => {
                    self.finished = true;
                    log::debug!(
                        "n={} stepper finished: {} solutions in {} steps",
                        self.n,
                        self.solutions.len(),
                        self.steps
                    );
                    StepEvent::Finished
                }
            };
        }

        let col = self.next_col;
        if self.board.is_safe_naive(row, col) {
            self.board.place(row, col);
            self.frames.push(col);
            self.next_col = 0;
            if self.frames.len() == self.n {
                self.solution_pending = true;
            }
            StepEvent::Placed { row, col }
        } else {
            self.next_col += 1;
            StepEvent::Rejected { row, col }
        }
    }

    /// Steps until the search is exhausted and returns every solution seen.
    pub fn run_to_end(&mut self) -> &[Placement] {
        while self.step() != StepEvent::Finished {}
        &self.solutions
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Queen column of each filled row, top to bottom.
    pub fn frames(&self) -> &[usize] {
        &self.frames
    }

    pub fn solutions(&self) -> &[Placement] {
        &self.solutions
    }

    pub fn last_solution(&self) -> Option<&Placement> {
        self.solutions.last()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for QueenStepper {
    type Item = StepEvent;

    /// Yields events up to and including the first `Finished`.
    fn next(&mut self) -> Option<StepEvent> {
        if self.finished {
            return None;
        }
        Some(self.step())
    }
}

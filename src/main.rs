#[cfg(not(target_arch = "wasm32"))]
use clap::{Parser, Subcommand};
#[cfg(not(target_arch = "wasm32"))]
use jump_queens_rust::export::{self, ExportError};
#[cfg(not(target_arch = "wasm32"))]
use jump_queens_rust::input::{self, InputError, Limits};
#[cfg(not(target_arch = "wasm32"))]
use jump_queens_rust::jump;
#[cfg(not(target_arch = "wasm32"))]
use jump_queens_rust::queens::{self, QueenStepper, StepEvent};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(name = "jump-queens", about = "Jump Game II and N-Queens solvers")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,

    /// Largest accepted jump length
    #[arg(long, default_value_t = Limits::default().max_value)]
    max_value: u32,

    /// Longest accepted jump array
    #[arg(long, default_value_t = Limits::default().max_len)]
    max_len: usize,

    /// Largest accepted board size
    #[arg(long, default_value_t = Limits::default().max_board)]
    max_board: usize,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Subcommand)]
enum Cmd {
    /// Minimum jumps to reach the last index, e.g. `jump 2,3,1,1,4`
    Jump {
        /// Comma-separated jump lengths
        values: String,
        /// Print every step of the greedy pass
        #[arg(long)]
        steps: bool,
    },
    /// Place N non-attacking queens
    Queens {
        /// Board size
        n: String,
        /// Only count solutions
        #[arg(long)]
        count: bool,
        /// Keep one solution per rotation/reflection class
        #[arg(long, conflicts_with = "count")]
        unique: bool,
        /// Print every cell the search examines
        #[arg(long, conflicts_with_all = ["count", "unique"])]
        steps: bool,
        /// Write the solutions to this CSV file
        #[arg(long, conflicts_with = "count")]
        csv: Option<PathBuf>,
    },
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let limits = Limits {
        max_value: args.max_value,
        max_len: args.max_len,
        max_board: args.max_board,
        ..Limits::default()
    };

    match run(args.cmd, &limits) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build is driven through `jump_queens_rust::web`.
}

#[cfg(not(target_arch = "wasm32"))]
fn run(cmd: Cmd, limits: &Limits) -> Result<(), CliError> {
    match cmd {
        Cmd::Jump { values, steps } => {
            let nums = input::parse_jump_input(&values, limits)?;
            let result = jump::compute_min_jumps(&nums);
            if steps {
                for entry in &result.trace {
                    println!("Step {}: {}", entry.step, entry);
                }
            }
            println!("Minimum jumps: {}", result.jumps);
            println!("Jump path: {:?}", result.path);
            if !result.reaches_end() {
                println!("The last index cannot be reached");
            }
        }
        Cmd::Queens {
            n,
            count,
            unique,
            steps,
            csv,
        } => {
            let n = input::parse_board_size(&n, limits)?;
            let start = Instant::now();
            if count {
                let total = queens::count_all(n);
                log::info!("n={} counted in {:?}", n, start.elapsed());
                println!("Found {} solution{}", total, plural(total as usize));
                return Ok(());
            }

            let solutions = if steps {
                let mut stepper = QueenStepper::new(n);
                loop {
                    match stepper.step() {
                        StepEvent::Placed { row, col } => println!("place  ({row}, {col})"),
                        StepEvent::Rejected { row, col } => println!("reject ({row}, {col})"),
                        StepEvent::Backtracked { row, col } => println!("lift   ({row}, {col})"),
                        StepEvent::Solution(p) => println!("solution\n{p}"),
                        StepEvent::Finished => {
                            println!("finished after {} steps", stepper.steps());
                            break;
                        }
                    }
                }
                stepper.solutions().to_vec()
            } else if unique {
                queens::unique_solutions(n)
            } else {
                queens::solve_all(n)
            };
            log::info!("n={} solved in {:?}", n, start.elapsed());

            if solutions.is_empty() {
                println!("No solutions exist for n = {n}");
            } else {
                println!("Found {} solution{}", solutions.len(), plural(solutions.len()));
                if !steps {
                    for (i, p) in solutions.iter().enumerate() {
                        println!("Solution {} of {}: {}", i + 1, solutions.len(), p.notation());
                        println!("{p}");
                    }
                }
            }

            if let Some(path) = csv {
                export::write_solutions_csv_to_path(&path, &solutions)?;
            }
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

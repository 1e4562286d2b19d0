//! Core of the Jump Game II and N-Queens visualizers.
//!
//! Both solvers are pure functions of their input. Text parsing lives in
//! [`input`], CSV output in [`export`], and the browser bindings in `web`.

pub mod export;
pub mod input;
pub mod jump;
pub mod queens;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use jump::{compute_min_jumps, JumpResult, JumpTraceEntry};
pub use queens::{count_all, solve_all, Placement};

//! Text input accepted by the visualizers.
//!
//! The solvers trust their arguments; everything a user types goes through
//! here first.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    /// Largest accepted jump length.
    pub max_value: u32,
    /// Longest accepted jump array.
    pub max_len: usize,
    pub min_board: usize,
    pub max_board: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_value: 1000,
            max_len: 10_000,
            min_board: 1,
            max_board: 9,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input: Empty value")]
    EmptyValue,
    #[error("Invalid input: \"{0}\" is not a valid number")]
    NotANumber(String),
    #[error("Invalid input: Numbers must be non-negative")]
    Negative,
    #[error("Invalid input: Numbers must be <= {0}")]
    TooLarge(u32),
    #[error("Invalid input: Array cannot be empty")]
    EmptyArray,
    #[error("Invalid input: Array length must be <= {0}")]
    TooLong(usize),
    #[error("board size {value} is outside {min}..={max}")]
    BoardSize { value: i64, min: usize, max: usize },
}

/// Parses a comma-separated list such as `2,3,1,1,4`.
pub fn parse_jump_input(text: &str, limits: &Limits) -> Result<Vec<u32>, InputError> {
    let nums = text
        .split(',')
        .map(|part| parse_jump_value(part.trim(), limits))
        .collect::<Result<Vec<_>, _>>()?;

    if nums.is_empty() {
        return Err(InputError::EmptyArray);
    }
    if nums.len() > limits.max_len {
        return Err(InputError::TooLong(limits.max_len));
    }
    Ok(nums)
}

fn parse_jump_value(part: &str, limits: &Limits) -> Result<u32, InputError> {
    if part.is_empty() {
        return Err(InputError::EmptyValue);
    }
    let value: i64 = part
        .parse()
        .map_err(|_| InputError::NotANumber(part.to_owned()))?;
    if value < 0 {
        return Err(InputError::Negative);
    }
    match u32::try_from(value) {
        Ok(v) if v <= limits.max_value => Ok(v),
        _ => Err(InputError::TooLarge(limits.max_value)),
    }
}

pub fn parse_board_size(text: &str, limits: &Limits) -> Result<usize, InputError> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_owned()))?;
    let out_of_range = InputError::BoardSize {
        value,
        min: limits.min_board,
        max: limits.max_board,
    };
    match usize::try_from(value) {
        Ok(n) if (limits.min_board..=limits.max_board).contains(&n) => Ok(n),
        _ => Err(out_of_range),
    }
}

//! Score-engine errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("{field} score {value} exceeds maximum {max}")]
    ScoreOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("arithmetic overflow in score computation")]
    Overflow,
}

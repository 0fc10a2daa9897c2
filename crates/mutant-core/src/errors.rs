//! Error types for grid construction and lesion injection

use thiserror::Error;

use crate::mutator::{Anchor, Orientation};

/// Grid construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions: {reason}")]
    InvalidDimensions { reason: String },

    #[error("Invalid symbol '{symbol}' at row {row}, column {col}")]
    InvalidSymbol { symbol: char, row: usize, col: usize },
}

impl GridError {
    pub(crate) fn dimensions(reason: impl Into<String>) -> Self {
        GridError::InvalidDimensions {
            reason: reason.into(),
        }
    }
}

/// Lesion injection errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error(
        "Position out of range: a {orientation} run of {min_run} starting at {anchor} does not fit a {side}x{side} grid"
    )]
    OutOfBounds {
        anchor: Anchor,
        orientation: Orientation,
        min_run: usize,
        side: usize,
    },

    #[error("Mutation run length must be at least 1")]
    EmptyRun,
}

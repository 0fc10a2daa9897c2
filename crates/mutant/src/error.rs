//! Front-end errors

use std::io;

use thiserror::Error;

use mutant_core::{GridError, MutationError, OptionsError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid grid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("Unknown mutation type '{0}' (expected R or V)")]
    UnknownKind(String),

    #[error("Invalid base '{0}' (expected A, C, G or T)")]
    InvalidBase(String),

    #[error("Invalid orientation '{0}' (expected H or V)")]
    InvalidAxis(String),

    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    #[error("Radiation needs an orientation (H or V)")]
    MissingAxis,
}

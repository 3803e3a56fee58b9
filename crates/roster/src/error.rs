//! Error types for the roster crate.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// Writing the demonstration transcript failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;

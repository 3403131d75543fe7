//! Error types for outreglib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building table rows or writing table files
#[derive(Error, Debug)]
pub enum OutregError {
    /// Unrecognized parenthesis/bracket style token
    #[error("invalid standard error style '{0}': expected '(', '[', 'true', 'false' or 'none'")]
    InvalidStyle(String),

    /// Both left/right empty counts and explicit empty slots were given
    #[error("cannot specify left/right empty cells together with explicit empty slots")]
    ConflictingArguments,

    /// An explicit empty slot falls outside the expanded row
    #[error("empty slot {slot} is out of range for a row of {len} cells")]
    SlotOutOfRange { slot: usize, len: usize },

    /// Variable labels do not line up with variable names
    #[error("got {labels} variable labels for {names} variable names")]
    LabelMismatch { names: usize, labels: usize },

    /// Failed to write a notes file
    #[error("failed to write notes to '{path}': {source}")]
    NotesWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Regression results could not be decoded
    #[error("failed to parse regression results from '{path}': {message}")]
    ResultsParse { path: PathBuf, message: String },
}

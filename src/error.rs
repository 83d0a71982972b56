// src/error.rs

use thiserror::Error;

/// Failures that stop a record from being processed.
///
/// Anything softer than this (wrong type marker, odd timestamp, extra
/// columns) is reported as a [`crate::Warning`] instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PacsvError {
    #[error("Type {given} does not match any known log types (IDS,FIREWALL).")]
    UnknownCategory { given: String },

    #[error("record too short to validate, expected at least {required} fields, got {got}")]
    InsufficientFields { required: usize, got: usize },
}

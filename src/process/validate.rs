// src/process/validate.rs

use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

use super::date_parser::looks_like_receive_time;
use crate::error::PacsvError;
use crate::schema::{Schema, RECEIVE_TIME_INDEX, TYPE_INDEX};

/// Fewest values a record needs before the checks can look at it.
pub const MIN_VALIDATABLE_FIELDS: usize = TYPE_INDEX + 1;

/// Advisory findings about a record. Never stop processing.
#[derive(Debug, Serialize, PartialEq, Clone, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    TypeMismatch {
        category_label: String,
        actual: String,
        expected: String,
    },
    Format,
    Length {
        header_count: usize,
        data_point_count: usize,
        overflow_count: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::TypeMismatch {
                category_label,
                actual,
                expected,
            } => write!(
                f,
                "Log supplied does not seem to be {} generated. Type: {} does not match expected Type: {}.",
                category_label, actual, expected
            ),
            Warning::Format => f.write_str(
                "RegEx pattern of first inputted data point does not match expected format \
                 (YYYY/MM/DD HR:MM:SS). Please ensure log is entered correctly, with the \
                 recieve time being the first data point.",
            ),
            Warning::Length {
                header_count,
                data_point_count,
                overflow_count,
            } => write!(
                f,
                "Length of supplied log is larger than associated known data headers. \
                 Some data points will not be printed with associated headers. \
                 ({} headers, {} data points, {} unprinted data points)",
                header_count, data_point_count, overflow_count
            ),
        }
    }
}

/// Run the type-marker, receive-time and length checks, in that order.
///
/// Every check runs regardless of the others. Fails only when the record is
/// too short for the checks to index into it.
#[instrument(level = "debug", skip(schema, raw_values), fields(values = raw_values.len()))]
pub fn validate(
    schema: &Schema,
    raw_values: &[String],
    category_label: &str,
    expected_marker: &str,
) -> Result<Vec<Warning>, PacsvError> {
    if raw_values.len() < MIN_VALIDATABLE_FIELDS {
        return Err(PacsvError::InsufficientFields {
            required: MIN_VALIDATABLE_FIELDS,
            got: raw_values.len(),
        });
    }

    let mut warnings = Vec::new();

    let actual = &raw_values[TYPE_INDEX];
    if actual != expected_marker {
        debug!(actual = %actual, expected = %expected_marker, "type marker mismatch");
        warnings.push(Warning::TypeMismatch {
            category_label: category_label.to_owned(),
            actual: actual.clone(),
            expected: expected_marker.to_owned(),
        });
    }

    if !looks_like_receive_time(&raw_values[RECEIVE_TIME_INDEX]) {
        debug!(value = %raw_values[RECEIVE_TIME_INDEX], "receive time malformed");
        warnings.push(Warning::Format);
    }

    if raw_values.len() > schema.len() {
        debug!(headers = schema.len(), values = raw_values.len(), "record longer than schema");
        warnings.push(Warning::Length {
            header_count: schema.len(),
            data_point_count: raw_values.len(),
            overflow_count: raw_values.len() - schema.len(),
        });
    }

    Ok(warnings)
}

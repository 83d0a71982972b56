// src/process/label.rs

use tracing::{instrument, trace};

use crate::schema::{LabeledField, Schema};

/// Pair each schema name with the value at the same position.
///
/// Produces `min(schema.len(), raw_values.len())` fields in schema order.
/// Extra values are dropped here and reported by the validator; missing
/// trailing values simply yield fewer fields.
#[instrument(level = "debug", skip_all, fields(category = %schema.category, values = raw_values.len()))]
pub fn label(schema: &Schema, raw_values: &[String]) -> Vec<LabeledField> {
    let fields: Vec<LabeledField> = schema
        .iter()
        .zip(raw_values)
        .map(|(name, value)| LabeledField {
            name: name.to_owned(),
            value: value.clone(),
        })
        .collect();
    trace!(labeled = fields.len(), "labeled record");
    fields
}

// src/process/mod.rs

pub mod date_parser;
pub mod label;
pub mod split;
pub mod validate;

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::PacsvError;
use crate::schema::{Category, LabeledField, SchemaRegistry};

pub use label::label;
pub use split::split_record;
pub use validate::{validate, Warning, MIN_VALIDATABLE_FIELDS};

/// Everything the presentation layer needs about one record.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ProcessedRecord {
    pub category: Category,
    pub fields: Vec<LabeledField>,
    pub warnings: Vec<Warning>,
}

/// split → label → validate for a single raw log line.
#[instrument(level = "debug", skip(registry, input), fields(input_len = input.len()))]
pub fn process_record(
    registry: &SchemaRegistry,
    category: Category,
    input: &str,
) -> Result<ProcessedRecord, PacsvError> {
    let schema = registry.schema_for(category);
    let raw = split_record(input);

    let fields = label(schema, &raw);
    let warnings = validate(schema, &raw, category.label(), category.expected_marker())?;

    info!(
        category = %category,
        values = raw.len(),
        labeled = fields.len(),
        warnings = warnings.len(),
        "processed record"
    );
    Ok(ProcessedRecord {
        category,
        fields,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,pacsv::process=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    /// `ts,SN1,marker` followed by enough filler to reach `total` values.
    fn line(ts: &str, marker: &str, total: usize) -> String {
        let mut parts = vec![ts.to_string(), "SN1".to_string(), marker.to_string()];
        parts.extend((3..total).map(|i| format!("f{}", i)));
        parts.join(",")
    }

    #[test]
    fn test_scenario_firewall_clean() -> Result<()> {
        init_test_logging();
        let reg = SchemaRegistry::new();
        let out = process_record(
            &reg,
            Category::Firewall,
            &line("2024/07/12 10:00:00", "TRAFFIC", 65),
        )?;
        assert_eq!(out.fields.len(), 65);
        assert!(out.warnings.is_empty());
        assert_eq!(out.fields[64].name, "UUID for rule");
        assert_eq!(out.fields[64].value, "f64");
        Ok(())
    }

    #[test]
    fn test_scenario_ids_with_traffic_marker() -> Result<()> {
        init_test_logging();
        let reg = SchemaRegistry::new();
        let out = process_record(
            &reg,
            Category::Ids,
            &line("2024/07/12 10:00:00", "TRAFFIC", 65),
        )?;
        assert_eq!(
            out.warnings,
            vec![Warning::TypeMismatch {
                category_label: "IDS/IPS".into(),
                actual: "TRAFFIC".into(),
                expected: "THREAT".into(),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_scenario_bad_timestamp() -> Result<()> {
        init_test_logging();
        let reg = SchemaRegistry::new();
        let out = process_record(&reg, Category::Ids, &line("badtimestamp", "THREAT", 65))?;
        assert_eq!(out.warnings, vec![Warning::Format]);
        Ok(())
    }

    #[test]
    fn test_scenario_overlong_record() -> Result<()> {
        init_test_logging();
        let reg = SchemaRegistry::new();
        let out = process_record(
            &reg,
            Category::Firewall,
            &line("2024/07/12 10:00:00", "TRAFFIC", 70),
        )?;
        assert_eq!(out.fields.len(), 65);
        assert_eq!(
            out.warnings,
            vec![Warning::Length {
                header_count: 65,
                data_point_count: 70,
                overflow_count: 5,
            }]
        );
        Ok(())
    }

    #[test]
    fn test_short_record_rejected() {
        init_test_logging();
        let reg = SchemaRegistry::new();
        let err = process_record(&reg, Category::Ids, "2024/07/12 10:00:00,SN1").unwrap_err();
        assert_eq!(
            err,
            PacsvError::InsufficientFields {
                required: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_partial_record_labels_what_is_there() -> Result<()> {
        init_test_logging();
        let reg = SchemaRegistry::new();
        let out = process_record(&reg, Category::Ids, "2024/07/12 10:00:00,SN1,THREAT,url")?;
        assert_eq!(out.fields.len(), 4);
        assert_eq!(out.fields[3].name, "Threat/Content Type");
        assert!(out.warnings.is_empty());
        Ok(())
    }
}

// src/report.rs

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write as _;

use crate::process::{ProcessedRecord, Warning};
use crate::schema::{Category, LabeledField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `name: value` lines followed by `WARNING:` blocks
    #[default]
    Text,
    /// single JSON document
    Json,
}

/// Field dump, then each warning preceded by a blank line.
pub fn render_text(record: &ProcessedRecord) -> String {
    let mut out = String::new();
    for field in &record.fields {
        let _ = writeln!(out, "{}", field);
    }
    for warning in &record.warnings {
        let _ = writeln!(out, "\nWARNING: {}", warning);
    }
    out
}

#[derive(Serialize)]
struct WarningView<'a> {
    #[serde(flatten)]
    warning: &'a Warning,
    message: String,
}

#[derive(Serialize)]
struct RecordView<'a> {
    category: Category,
    fields: &'a [LabeledField],
    warnings: Vec<WarningView<'a>>,
}

pub fn render_json(record: &ProcessedRecord) -> Result<String> {
    let view = RecordView {
        category: record.category,
        fields: &record.fields,
        warnings: record
            .warnings
            .iter()
            .map(|w| WarningView {
                warning: w,
                message: w.to_string(),
            })
            .collect(),
    };
    let mut s = serde_json::to_string_pretty(&view)?;
    s.push('\n');
    Ok(s)
}

pub fn render(record: &ProcessedRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(record)),
        OutputFormat::Json => render_json(record),
    }
}

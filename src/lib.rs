pub mod cli;
pub mod error;
pub mod process;
pub mod report;
pub mod schema;

pub use error::PacsvError;
pub use process::{process_record, ProcessedRecord, Warning};
pub use schema::{Category, LabeledField, Schema, SchemaRegistry};

pub mod fields;
pub mod registry;
pub mod types;

pub use fields::{PANOS_LOG_FIELDS, RECEIVE_TIME_INDEX, TYPE_INDEX};
pub use registry::SchemaRegistry;
pub use types::{Category, LabeledField, Schema};

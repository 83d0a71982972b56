// src/schema/registry.rs

use tracing::debug;

use super::fields::PANOS_LOG_FIELDS;
use super::types::{Category, Schema};
use crate::error::PacsvError;

/// Immutable lookup of category → schema, built once at start-up and passed
/// to whoever needs it.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    ids: Schema,
    firewall: Schema,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        let registry = Self {
            ids: Schema {
                category: Category::Ids,
                fields: &PANOS_LOG_FIELDS,
            },
            firewall: Schema {
                category: Category::Firewall,
                fields: &PANOS_LOG_FIELDS,
            },
        };
        debug!(
            ids = registry.ids.len(),
            firewall = registry.firewall.len(),
            "schema registry ready"
        );
        registry
    }

    pub fn schema_for(&self, category: Category) -> &Schema {
        match category {
            Category::Ids => &self.ids,
            Category::Firewall => &self.firewall,
        }
    }

    /// Resolve a raw, case-insensitive selector such as `"ids"`.
    pub fn lookup(&self, selector: &str) -> Result<&Schema, PacsvError> {
        let category: Category = selector.parse()?;
        Ok(self.schema_for(category))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_schemas_have_65_fields() {
        let reg = SchemaRegistry::new();
        for c in Category::ALL {
            let schema = reg.schema_for(c);
            assert_eq!(schema.len(), 65);
            assert_eq!(schema.category, c);
            assert_eq!(schema.fields[0], "Receive Time");
            assert_eq!(schema.fields[2], "Type");
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let reg = SchemaRegistry::new();
        assert_eq!(reg.lookup("ids").unwrap().category, Category::Ids);
        assert_eq!(reg.lookup("Firewall").unwrap().category, Category::Firewall);
        assert_eq!(reg.lookup("FIREWALL").unwrap().category, Category::Firewall);
    }

    #[test]
    fn test_lookup_unknown() {
        let reg = SchemaRegistry::new();
        let err = reg.lookup("syslog").unwrap_err();
        assert_eq!(
            err,
            PacsvError::UnknownCategory {
                given: "SYSLOG".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "Type SYSLOG does not match any known log types (IDS,FIREWALL)."
        );
    }

    #[test]
    fn test_category_markers() {
        assert_eq!(Category::Ids.expected_marker(), "THREAT");
        assert_eq!(Category::Firewall.expected_marker(), "TRAFFIC");
        assert_eq!(Category::Ids.label(), "IDS/IPS");
        assert_eq!(Category::Firewall.label(), "FIREWALL");
    }
}

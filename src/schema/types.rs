// src/schema/types.rs

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::PacsvError;

/// Which of the known PAN-OS log layouts a record claims to be.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Ids,
    Firewall,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Ids, Category::Firewall];

    /// Selector token accepted on the command line.
    pub fn token(self) -> &'static str {
        match self {
            Category::Ids => "IDS",
            Category::Firewall => "FIREWALL",
        }
    }

    /// Human label used in warnings.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ids => "IDS/IPS",
            Category::Firewall => "FIREWALL",
        }
    }

    /// Value expected in the `Type` column for this category.
    pub fn expected_marker(self) -> &'static str {
        match self {
            Category::Ids => "THREAT",
            Category::Firewall => "TRAFFIC",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Category {
    type Err = PacsvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Category::ALL
            .into_iter()
            .find(|c| c.token() == upper)
            .ok_or(PacsvError::UnknownCategory { given: upper })
    }
}

/// Ordered field names; position is meaning.
#[derive(Debug, Serialize, PartialEq, Clone, Eq)]
pub struct Schema {
    pub category: Category,
    pub fields: &'static [&'static str],
}

impl Schema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().copied()
    }
}

/// One schema name paired with the value found at the same position.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct LabeledField {
    pub name: String,
    pub value: String,
}

impl fmt::Display for LabeledField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

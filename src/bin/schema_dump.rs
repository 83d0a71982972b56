//! schema_dump.rs
//!
//! Prints the known PAN-OS column layout(s) as YAML, one entry per position,
//! so a log export can be cross-checked column by column.
//!
//!     cargo run --bin schema_dump            # both categories
//!     cargo run --bin schema_dump -- ids     # just one

use anyhow::Result;
use pacsv::{Category, SchemaRegistry};
use serde::Serialize;
use std::{collections::BTreeMap, env};

#[derive(Debug, Serialize, PartialEq)]
struct Position {
    index: usize,
    name: &'static str,
}

fn positions(registry: &SchemaRegistry, category: Category) -> Vec<Position> {
    registry
        .schema_for(category)
        .iter()
        .enumerate()
        .map(|(index, name)| Position { index, name })
        .collect()
}

fn dump(registry: &SchemaRegistry, categories: &[Category]) -> Result<String> {
    let map: BTreeMap<&'static str, Vec<Position>> = categories
        .iter()
        .map(|&c| (c.token(), positions(registry, c)))
        .collect();
    Ok(serde_yaml::to_string(&map)?)
}

fn main() -> Result<()> {
    let registry = SchemaRegistry::new();
    let categories = match env::args().nth(1) {
        Some(sel) => vec![sel.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };
    print!("{}", dump(&registry, &categories)?);
    Ok(())
}

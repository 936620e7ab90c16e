//! Alias rows and grouping.
//!
//! `cat.aliases` returns one row per alias/index pair. The console shows one
//! row per alias with every index it points at.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One `cat.aliases` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasRow {
    /// Alias name.
    pub alias: String,
    /// Index the alias points at.
    pub index: String,
    /// Remaining columns (`filter`, `routing.index`, `is_write_index`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An alias with every index it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasGroup {
    /// Alias name.
    pub alias: String,
    /// Indices in response order.
    pub indices: Vec<String>,
    /// First row seen for this alias; carries its other columns.
    pub first: AliasRow,
}

/// Group rows by alias, keeping the order in which aliases first appear.
pub fn group_by_alias(rows: Vec<AliasRow>) -> Vec<AliasGroup> {
    let mut groups: Vec<AliasGroup> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for row in rows {
        match position.get(&row.alias) {
            Some(&i) => groups[i].indices.push(row.index),
            None => {
                position.insert(row.alias.clone(), groups.len());
                groups.push(AliasGroup {
                    alias: row.alias.clone(),
                    indices: vec![row.index.clone()],
                    first: row,
                });
            },
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(alias: &str, index: &str) -> AliasRow {
        AliasRow { alias: alias.into(), index: index.into(), extra: Map::new() }
    }

    #[test]
    fn groups_in_first_seen_order() {
        let groups = group_by_alias(vec![
            row("b", "i1"),
            row("a", "i2"),
            row("b", "i3"),
            row("c", "i4"),
            row("a", "i5"),
        ]);

        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.alias.as_str(), g.indices.iter().map(String::as_str).collect()))
            .collect();
        assert_eq!(summary, vec![
            ("b", vec!["i1", "i3"]),
            ("a", vec!["i2", "i5"]),
            ("c", vec!["i4"]),
        ]);
        assert_eq!(groups[0].first.index, "i1");
    }

    #[test]
    fn rows_parse_with_extra_columns() {
        let raw = serde_json::json!([
            { "alias": "a", "index": "i", "filter": "-", "is_write_index": "true" }
        ]);
        let rows: Vec<AliasRow> = serde_json::from_value(raw).expect("rows");
        assert_eq!(rows[0].extra.get("is_write_index"), Some(&Value::from("true")));
    }
}

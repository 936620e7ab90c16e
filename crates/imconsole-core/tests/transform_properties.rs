//! Property tests for alias grouping and settings flattening.

use imconsole_core::{
    aliases::{AliasRow, group_by_alias},
    settings::flatten_settings,
};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn rows() -> impl Strategy<Value = Vec<AliasRow>> {
    prop::collection::vec(("[a-c]", "idx-[0-4]"), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(alias, index)| AliasRow { alias, index, extra: Map::new() })
            .collect()
    })
}

fn settings() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<u16>().prop_map(|n| json!(n)),
        "[a-z0-9]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn grouping_keeps_every_row(rows in rows()) {
        let total = rows.len();
        let first_seen: Vec<String> = rows.iter().fold(Vec::new(), |mut seen, row| {
            if !seen.contains(&row.alias) {
                seen.push(row.alias.clone());
            }
            seen
        });

        let groups = group_by_alias(rows);

        prop_assert_eq!(groups.iter().map(|g| g.indices.len()).sum::<usize>(), total);
        prop_assert_eq!(groups.iter().map(|g| g.alias.clone()).collect::<Vec<_>>(), first_seen);
        for group in &groups {
            prop_assert_eq!(&group.first.alias, &group.alias);
            prop_assert_eq!(group.indices.first(), Some(&group.first.index));
        }
    }

    #[test]
    fn flattened_values_are_leaves(value in settings()) {
        for (key, leaf) in flatten_settings(&value) {
            prop_assert!(!key.is_empty());
            let nested = match &leaf {
                Value::Object(map) => !map.is_empty(),
                Value::Array(items) => !items.is_empty(),
                _ => false,
            };
            prop_assert!(!nested, "{key} kept a nested value");
        }
    }

    #[test]
    fn flattening_is_idempotent(value in settings()) {
        let once = Value::Object(flatten_settings(&value));
        let twice = Value::Object(flatten_settings(&once));
        prop_assert_eq!(once, twice);
    }
}

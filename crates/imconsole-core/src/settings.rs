//! Template settings and mapping transforms.
//!
//! The dashboards core returns nested settings even when the cluster was asked
//! for flat ones, so the console flattens them itself. Mapping properties are
//! turned into an ordered field list for editing.

use serde_json::{Map, Value};

/// Flatten nested objects and arrays into dotted keys.
///
/// `{"index": {"number_of_shards": "1"}}` becomes
/// `{"index.number_of_shards": "1"}`. Array elements use their position as
/// the key segment. Empty objects and arrays are kept as leaf values.
pub fn flatten_settings(settings: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    match settings {
        Value::Object(_) | Value::Array(_) => flatten_into(&mut out, None, settings),
        _ => {},
    }
    out
}

fn flatten_into(out: &mut Map<String, Value>, prefix: Option<&str>, value: &Value) {
    let children: Vec<(String, &Value)> = match value {
        Value::Object(map) if !map.is_empty() => {
            map.iter().map(|(k, v)| (k.clone(), v)).collect()
        },
        Value::Array(items) if !items.is_empty() => {
            items.iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect()
        },
        leaf => {
            if let Some(key) = prefix {
                out.insert(key.to_owned(), leaf.clone());
            }
            return;
        },
    };

    for (segment, child) in children {
        let key = match prefix {
            Some(p) => format!("{p}.{segment}"),
            None => segment,
        };
        flatten_into(out, Some(&key), child);
    }
}

/// Turn a mapping `properties` object into an ordered field list.
///
/// Each field becomes `{ "fieldName": <name>, ...settings }`, with nested
/// `properties` converted recursively. Field order follows the input.
pub fn mapping_properties_to_list(properties: &Value) -> Value {
    let Some(fields) = properties.as_object() else {
        return Value::Array(Vec::new());
    };

    let list = fields
        .iter()
        .map(|(name, settings)| {
            let mut field = Map::new();
            if let Some(settings) = settings.as_object() {
                for (k, v) in settings {
                    if k != "properties" {
                        field.insert(k.clone(), v.clone());
                    }
                }
            }
            field.insert("fieldName".to_owned(), Value::String(name.clone()));
            if let Some(nested) = settings.get("properties") {
                field.insert("properties".to_owned(), mapping_properties_to_list(nested));
            }
            Value::Object(field)
        })
        .collect();

    Value::Array(list)
}

/// Value at a key path, if every step is an object containing the key.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Set a value at a key path, creating (or replacing non-object) intermediate
/// steps with empty objects.
pub fn set_path(value: &mut Value, path: &[&str], new_value: Value) {
    let Some((key, rest)) = path.split_first() else {
        *value = new_value;
        return;
    };

    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    if let Value::Object(map) = value {
        let child = map.entry((*key).to_owned()).or_insert(Value::Null);
        set_path(child, rest, new_value);
    }
}

//! Read-only backend calls and one-shot helpers.
//!
//! Unlike [`crate::Operation`]s these are not wrapped in a submission
//! lifecycle; each helper documents whether it raises toasts itself.

use imconsole_proto::{
    CallResult, TransportRequest,
    paths::{index_template_path, lron_config_path},
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    Notifier, Operation, Route, Services,
    lron::{ActionType, LronConfig, LronConfigList},
    ops::AssociateLron,
    settings::{flatten_settings, get_path, mapping_properties_to_list, set_path},
};

/// Look up the default notification config for an action type.
///
/// Raises no toasts.
pub async fn get_lron_config(services: &Services, action: ActionType) -> CallResult<LronConfigList> {
    let request = TransportRequest::get(lron_config_path(action.lron_name())).into_request();
    services.call(Route::Direct, request).await.decode()
}

/// Bind a notification config to a running task.
///
/// Raises a danger toast on failure and returns whether it succeeded.
pub async fn associate_with_task(
    services: &Services,
    notifier: &dyn Notifier,
    task_id: &str,
    config: LronConfig,
) -> bool {
    let op = AssociateLron { task_id: task_id.to_owned(), config };
    match services.call(op.route(), op.request()).await {
        CallResult::Ok(_) => true,
        CallResult::Err(error) => {
            notifier.add_danger(&error);
            false
        },
    }
}

/// Fetch one composable template, prepared for editing.
///
/// The returned document is the template body with `name` set, settings
/// flattened into dotted keys and mapping properties turned into a field
/// list. A missing template or failed call raises a danger toast and is
/// returned as the failure.
pub async fn get_template(
    services: &Services,
    notifier: &dyn Notifier,
    name: &str,
) -> CallResult<Value> {
    let request = TransportRequest::get(index_template_path(name)).into_request();
    let error = match services.call(Route::Direct, request).await {
        CallResult::Ok(response) => match template_detail(&response, name) {
            Some(detail) => return CallResult::Ok(detail),
            None => format!("The template [{name}] does not exist."),
        },
        CallResult::Err(error) => error,
    };

    notifier.add_danger(&error);
    CallResult::Err(error)
}

fn template_detail(response: &Value, name: &str) -> Option<Value> {
    let entry = response
        .get("index_templates")?
        .as_array()?
        .iter()
        .find(|entry| entry.get("name").and_then(Value::as_str) == Some(name))?;

    let mut detail = entry.get("index_template").cloned().unwrap_or(Value::Object(Map::new()));
    set_path(&mut detail, &["name"], Value::String(name.to_owned()));

    let properties = get_path(&detail, &["template", "mappings", "properties"])
        .map_or_else(|| Value::Array(Vec::new()), mapping_properties_to_list);
    set_path(&mut detail, &["template", "mappings", "properties"], properties);

    let settings =
        get_path(&detail, &["template", "settings"]).map(flatten_settings).unwrap_or_default();
    set_path(&mut detail, &["template", "settings"], Value::Object(settings));

    Some(detail)
}

/// A template as listed by `_index_template/*`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedTemplate {
    /// Template name.
    pub name: String,
    /// Template body.
    pub index_template: Value,
}

impl NamedTemplate {
    /// Whether the template creates data streams.
    pub fn is_data_stream(&self) -> bool {
        self.index_template
            .get("data_stream")
            .is_some_and(|d| !matches!(d, Value::Null | Value::Bool(false)))
    }
}

/// Templates that can back a data stream.
///
/// Failures yield an empty list without a toast.
pub async fn get_data_stream_templates(services: &Services) -> Vec<NamedTemplate> {
    #[derive(Deserialize)]
    struct Listing {
        #[serde(default)]
        index_templates: Vec<NamedTemplate>,
    }

    let request = TransportRequest::get("_index_template/*").into_request();
    match services.call(Route::Direct, request).await.decode::<Listing>() {
        CallResult::Ok(listing) => {
            listing.index_templates.into_iter().filter(NamedTemplate::is_data_stream).collect()
        },
        CallResult::Err(error) => {
            tracing::debug!(%error, "template listing failed");
            Vec::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn template_detail_prepares_document() {
        let response = json!({
            "index_templates": [
                { "name": "other", "index_template": {} },
                {
                    "name": "good_template",
                    "index_template": {
                        "index_patterns": ["logs-*"],
                        "template": {
                            "settings": { "index": { "number_of_shards": "1" } },
                            "mappings": { "properties": { "msg": { "type": "text" } } }
                        }
                    }
                }
            ]
        });

        let detail = template_detail(&response, "good_template").expect("found");
        assert_eq!(detail["name"], "good_template");
        assert_eq!(detail["template"]["settings"], json!({ "index.number_of_shards": "1" }));
        assert_eq!(
            detail["template"]["mappings"]["properties"],
            json!([{ "type": "text", "fieldName": "msg" }])
        );
        assert_eq!(detail["index_patterns"], json!(["logs-*"]));
    }

    #[test]
    fn template_detail_fills_empty_template() {
        let response = json!({ "index_templates": [{ "name": "good_template", "template": {} }] });
        let detail = template_detail(&response, "good_template").expect("found");
        assert_eq!(
            detail,
            json!({
                "name": "good_template",
                "template": { "mappings": { "properties": [] }, "settings": {} }
            })
        );
    }

    #[test]
    fn template_detail_missing() {
        assert_eq!(template_detail(&json!({ "index_templates": [] }), "x"), None);
        assert_eq!(template_detail(&json!({}), "x"), None);
    }

    #[test]
    fn data_stream_detection() {
        let t = |body: Value| NamedTemplate { name: "t".into(), index_template: body };
        assert!(t(json!({ "data_stream": {} })).is_data_stream());
        assert!(!t(json!({ "data_stream": null })).is_data_stream());
        assert!(!t(json!({})).is_data_stream());
    }
}

//! Cluster paths used by `transport.request` calls.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Base path of the long-running-operation notification config API.
pub const LRON_BASE: &str = "/_plugins/_im/lron";

/// Percent-encode a single path component.
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, URI_COMPONENT).to_string()
}

/// Path of one lron config document, keyed by `LRON:<id>`.
///
/// `id` is either a task id or an action name such as `reindex`.
pub fn lron_config_path(id: &str) -> String {
    format!("{LRON_BASE}/{}", encode_component(&format!("LRON:{id}")))
}

/// Path of a data stream.
pub fn data_stream_path(name: &str) -> String {
    format!("_data_stream/{name}")
}

/// Path of a composable index template, with settings flattened by the
/// cluster.
pub fn index_template_path(name: &str) -> String {
    format!("_index_template/{name}?flat_settings=true")
}

/// Path naming one or more composable index templates.
pub fn index_templates_path(names: &str) -> String {
    format!("_index_template/{names}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lron_key_is_encoded() {
        assert_eq!(lron_config_path("reindex"), "/_plugins/_im/lron/LRON%3Areindex");
        assert_eq!(
            lron_config_path("node-1:42"),
            "/_plugins/_im/lron/LRON%3Anode-1%3A42"
        );
    }

    #[test]
    fn encode_matches_uri_component_rules() {
        assert_eq!(encode_component("a b/c?d"), "a%20b%2Fc%3Fd");
        assert_eq!(encode_component("keep-_.!~*'()"), "keep-_.!~*'()");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn template_and_stream_paths() {
        assert_eq!(index_template_path("logs"), "_index_template/logs?flat_settings=true");
        assert_eq!(data_stream_path("logs-app"), "_data_stream/logs-app");
        assert_eq!(index_templates_path("t1,t2"), "_index_template/t1,t2");
    }
}

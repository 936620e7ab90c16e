//! Mutating operations.
//!
//! Each operation knows the single request it issues and the text of the
//! success toast. Multi-entity operations batch their targets into one
//! comma-joined parameter; they never fan out into one call per entity.

use imconsole_proto::{
    ApiRequest, Endpoint, TransportRequest,
    paths::{data_stream_path, index_templates_path, lron_config_path},
};
use serde_json::json;

use crate::{Route, lron::LronConfig};

/// A user-triggered backend mutation.
pub trait Operation: Send + Sync {
    /// Route the request travels.
    fn route(&self) -> Route {
        Route::Direct
    }

    /// The single request this operation issues.
    fn request(&self) -> ApiRequest;

    /// Success toast text. `None` if success is silent.
    fn success_message(&self) -> Option<String>;

    /// Whether the operation has something to act on. A view never
    /// confirms an operation that is not ready.
    fn is_ready(&self) -> bool {
        true
    }

    /// Whether the owning view closes after a failed attempt.
    fn closes_on_failure(&self) -> bool {
        true
    }
}

/// Join entity names into one batched parameter.
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

/// What kind of entity a flush targets. Only affects wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushTarget {
    /// Plain indices.
    #[default]
    Indices,
    /// Data streams.
    DataStreams,
    /// Aliases.
    Aliases,
}

impl FlushTarget {
    /// Human-readable plural name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indices => "indices",
            Self::DataStreams => "data streams",
            Self::Aliases => "aliases",
        }
    }
}

/// Flush the selected entities in one request.
///
/// An empty selection flushes every open index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushIndices {
    /// Entity kind.
    pub target: FlushTarget,
    /// Selected entity names.
    pub items: Vec<String>,
}

impl FlushIndices {
    /// Flush the given indices.
    pub fn indices<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self { target: FlushTarget::Indices, items: items.into_iter().map(Into::into).collect() }
    }
}

impl Operation for FlushIndices {
    fn request(&self) -> ApiRequest {
        let request = ApiRequest::new(Endpoint::INDICES_FLUSH);
        if self.items.is_empty() {
            request
        } else {
            request.with_data(json!({ "index": join_names(&self.items) }))
        }
    }

    fn success_message(&self) -> Option<String> {
        if self.items.is_empty() {
            Some("Flush all open indexes successfully".to_owned())
        } else {
            Some(format!("Flush [{}] successfully", join_names(&self.items)))
        }
    }
}

/// Remove aliases from every index they point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAliases {
    /// Alias names to delete.
    pub aliases: Vec<String>,
}

impl Operation for DeleteAliases {
    fn request(&self) -> ApiRequest {
        ApiRequest::new(Endpoint::INDICES_DELETE_ALIAS)
            .with_data(json!({ "index": "_all", "name": join_names(&self.aliases) }))
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("Delete [{}] successfully", join_names(&self.aliases)))
    }

    fn is_ready(&self) -> bool {
        !self.aliases.is_empty()
    }

    fn closes_on_failure(&self) -> bool {
        false
    }
}

/// Delete composable index templates in one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTemplates {
    /// Template names to delete.
    pub templates: Vec<String>,
}

impl Operation for DeleteTemplates {
    fn request(&self) -> ApiRequest {
        TransportRequest::delete(index_templates_path(&join_names(&self.templates))).into_request()
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("Delete [{}] successfully", join_names(&self.templates)))
    }

    fn is_ready(&self) -> bool {
        !self.templates.is_empty()
    }

    fn closes_on_failure(&self) -> bool {
        false
    }
}

/// Create a data stream backed by a matching template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDataStream {
    /// Data stream name.
    pub name: String,
}

impl Operation for CreateDataStream {
    fn request(&self) -> ApiRequest {
        TransportRequest::put(data_stream_path(&self.name)).into_request()
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("[{}] has been successfully created.", self.name))
    }

    fn closes_on_failure(&self) -> bool {
        false
    }
}

/// Attach a notification config to a running task.
///
/// Travels the console proxy route and is silent on success.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociateLron {
    /// Task the config is bound to.
    pub task_id: String,
    /// Config to store; its `task_id` is overwritten with [`Self::task_id`].
    pub config: LronConfig,
}

impl Operation for AssociateLron {
    fn route(&self) -> Route {
        Route::ConsoleProxy
    }

    fn request(&self) -> ApiRequest {
        let config = LronConfig { task_id: Some(self.task_id.clone()), ..self.config.clone() };
        TransportRequest::put(lron_config_path(&self.task_id))
            .with_body(json!({ "lron_config": config }))
            .into_request()
    }

    fn success_message(&self) -> Option<String> {
        None
    }
}

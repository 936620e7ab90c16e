//! Endpoint descriptors.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{DescriptorError, Endpoint};

/// Identifies which backend operation to invoke and its parameters.
///
/// `data` is opaque at this layer; validating its shape is the backend's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// Backend client method to call.
    pub endpoint: Endpoint,
    /// Parameters for the call. `None` if the endpoint takes none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiRequest {
    /// Create a descriptor with no parameters.
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, data: None }
    }

    /// Build a descriptor from a raw endpoint name.
    pub fn parse(endpoint: &str, data: Option<Value>) -> Result<Self, DescriptorError> {
        Ok(Self { endpoint: Endpoint::parse(endpoint)?, data })
    }

    /// Attach call parameters.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// HTTP verb for a [`TransportRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `PUT`
    Put,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
}

/// Generic cluster request tunnelled through the `transport.request`
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Cluster path, e.g. `_data_stream/logs` or `/_plugins/_im/lron/...`.
    pub path: String,
    /// Request body. Omitted from the wire when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl TransportRequest {
    /// Create a request with no body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    /// `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// `PUT` request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// `DELETE` request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Wrap into a `transport.request` descriptor.
    pub fn into_request(self) -> ApiRequest {
        let mut data = json!({ "method": self.method, "path": self.path });
        if let (Some(body), Some(map)) = (self.body, data.as_object_mut()) {
            map.insert("body".to_owned(), body);
        }
        ApiRequest::new(Endpoint::TRANSPORT_REQUEST).with_data(data)
    }
}

impl From<TransportRequest> for ApiRequest {
    fn from(request: TransportRequest) -> Self {
        request.into_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_wire_shape() {
        let request =
            ApiRequest::new(Endpoint::INDICES_FLUSH).with_data(json!({ "index": "a,b" }));
        assert_eq!(
            serde_json::to_value(&request).ok(),
            Some(json!({ "endpoint": "indices.flush", "data": { "index": "a,b" } }))
        );
    }

    #[test]
    fn descriptor_without_data_omits_field() {
        let request = ApiRequest::new(Endpoint::CAT_ALIASES);
        assert_eq!(serde_json::to_value(&request).ok(), Some(json!({ "endpoint": "cat.aliases" })));
    }

    #[test]
    fn parse_rejects_bad_endpoint() {
        assert_eq!(ApiRequest::parse("", None), Err(DescriptorError::EmptyEndpoint));
    }

    #[test]
    fn transport_request_without_body() {
        let request = TransportRequest::put("_data_stream/logs").into_request();
        assert_eq!(request.endpoint, Endpoint::TRANSPORT_REQUEST);
        assert_eq!(request.data, Some(json!({ "method": "PUT", "path": "_data_stream/logs" })));
    }

    #[test]
    fn transport_request_with_body() {
        let request: ApiRequest =
            TransportRequest::put("/x").with_body(json!({ "k": 1 })).into();
        assert_eq!(request.data, Some(json!({ "method": "PUT", "path": "/x", "body": { "k": 1 } })));
    }
}

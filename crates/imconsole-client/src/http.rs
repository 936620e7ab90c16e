//! reqwest-backed caller.

use async_trait::async_trait;
use imconsole_core::{ApiCaller, ApiRequest, CallResult, Route, backend_error_message};
use serde_json::Value;

use crate::{ClientConfig, ClientError};

/// Header the dashboards backend requires on state-changing requests.
const XSRF_HEADER: &str = "osd-xsrf";

/// Caller that POSTs `{ endpoint, data }` to the dashboards backend.
#[derive(Debug, Clone)]
pub struct HttpCaller {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpCaller {
    /// Build a caller for `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base = reqwest::Url::parse(&config.base_url).map_err(|e| {
            ClientError::InvalidBaseUrl { url: config.base_url.clone(), reason: e.to_string() }
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme {}", base.scheme()),
            });
        }

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post(&self, route: Route, request: ApiRequest) -> CallResult<Value> {
        let url = self.config.route_url(route);
        tracing::debug!(%url, endpoint = %request.endpoint, "posting backend call");

        let mut builder = self.client.post(&url).header(XSRF_HEADER, "true").json(&request);
        if let Some(auth) = &self.config.basic_auth {
            builder = builder.basic_auth(&auth.username, auth.password.as_ref());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%url, error = %e, "request failed");
                return CallResult::failure(e.to_string());
            },
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => envelope_from_http(status.as_u16(), status.canonical_reason(), &body),
            Err(e) => CallResult::failure(format!("{status}: {e}")),
        }
    }
}

#[async_trait]
impl ApiCaller for HttpCaller {
    async fn api_caller(&self, request: ApiRequest) -> CallResult<Value> {
        self.post(Route::Direct, request).await
    }

    async fn console_proxy_caller(&self, request: ApiRequest) -> CallResult<Value> {
        self.post(Route::ConsoleProxy, request).await
    }
}

/// Convert an HTTP status and body into an envelope.
///
/// 2xx bodies are read as envelopes. Other statuses are failures carrying the
/// body's most specific error text, or the status line if the body has none.
pub fn envelope_from_http(status: u16, reason: Option<&str>, body: &str) -> CallResult<Value> {
    let parsed = serde_json::from_str::<Value>(body).ok();

    if (200..300).contains(&status) {
        return match parsed {
            Some(body) => CallResult::from_wire(body),
            None => CallResult::failure(""),
        };
    }

    let message = parsed.as_ref().and_then(backend_error_message).unwrap_or_else(|| match reason {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    });
    CallResult::failure(message)
}

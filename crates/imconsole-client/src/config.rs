//! Client configuration.

use std::time::Duration;

use imconsole_core::Route;

/// Basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// User name.
    pub username: String,
    /// Password. `None` sends the user name alone.
    pub password: Option<String>,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Where and how to reach the dashboards backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Dashboards base URL, including any base path.
    pub base_url: String,
    /// Path of the direct caller route.
    pub api_path: String,
    /// Path of the console proxy route.
    pub proxy_path: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Credentials, if the backend requires them.
    pub basic_auth: Option<BasicAuth>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5601".to_owned(),
            api_path: "/api/ism/apiCaller".to_owned(),
            proxy_path: "/api/ism/consoleProxyCaller".to_owned(),
            timeout: Duration::from_secs(30),
            basic_auth: None,
        }
    }
}

impl ClientConfig {
    /// Full URL of a route.
    pub fn route_url(&self, route: Route) -> String {
        let path = match route {
            Route::Direct => &self.api_path,
            Route::ConsoleProxy => &self.proxy_path,
        };
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_urls_join_cleanly() {
        let config = ClientConfig { base_url: "https://dash.example/base/".into(), ..Default::default() };
        assert_eq!(config.route_url(Route::Direct), "https://dash.example/base/api/ism/apiCaller");
        assert_eq!(
            config.route_url(Route::ConsoleProxy),
            "https://dash.example/base/api/ism/consoleProxyCaller"
        );
    }

    #[test]
    fn password_is_redacted() {
        let auth = BasicAuth { username: "admin".into(), password: Some("hunter2".into()) };
        let shown = format!("{auth:?}");
        assert!(shown.contains("admin"));
        assert!(!shown.contains("hunter2"));
    }
}

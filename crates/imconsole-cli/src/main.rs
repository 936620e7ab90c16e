//! Index-management console from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Flush two indices
//! imconsole --base-url http://localhost:5601 flush logs-1 logs-2
//!
//! # Delete aliases (the phrase must be typed exactly)
//! imconsole delete-aliases --confirm delete old-alias
//!
//! # List aliases matching a prefix
//! imconsole aliases --search logs
//! ```

mod commands;
mod error;
mod host;

use std::{sync::Arc, time::Duration};

use clap::Parser;
use imconsole_client::{BasicAuth, ClientConfig, HttpCaller};
use imconsole_core::Services;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Command;

/// Index-management console
#[derive(Parser, Debug)]
#[command(name = "imconsole")]
#[command(about = "Index lifecycle operations through the dashboards backend")]
#[command(version)]
struct Args {
    /// Dashboards base URL
    #[arg(long, default_value = "http://localhost:5601")]
    base_url: String,

    /// Basic-auth user name
    #[arg(short, long)]
    username: Option<String>,

    /// Basic-auth password
    #[arg(short, long, requires = "username")]
    password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            basic_auth: self
                .username
                .clone()
                .map(|username| BasicAuth { username, password: self.password.clone() }),
            ..ClientConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    let config = args.client_config();
    tracing::debug!(base_url = %config.base_url, "using dashboards backend");
    let services = Services::new(Arc::new(HttpCaller::new(config)?));

    commands::run(args.command, &services).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn credentials_reach_client_config() {
        let args = Args::parse_from([
            "imconsole",
            "--base-url",
            "https://dash:5601",
            "-u",
            "admin",
            "-p",
            "secret",
            "--timeout-secs",
            "5",
            "flush",
        ]);
        let config = args.client_config();

        assert_eq!(config.base_url, "https://dash:5601");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.basic_auth,
            Some(BasicAuth { username: "admin".into(), password: Some("secret".into()) })
        );
        assert_eq!(config.api_path, ClientConfig::default().api_path);
    }
}

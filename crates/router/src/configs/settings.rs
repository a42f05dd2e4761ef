use std::path::PathBuf;

use config::{Environment, File};
use connector_interfaces::{configs::Connectors, types::Proxy};
use payment_providers::BamboraSettings;
use router_env::{env, logger};
use serde::Deserialize;

use crate::core::errors::{ApplicationError, ApplicationResult};

#[derive(clap::Parser, Default)]
pub struct CmdLineConf {
    /// Config file.
    /// Application will look for "config/<env>.toml" if this option isn't specified.
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub server: Server,
    pub log: router_env::config::Log,
    pub proxy: Proxy,
    pub connectors: Connectors,
    pub bambora: BamboraSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Server {
    pub port: u16,
    pub workers: usize,
    pub host: String,
    /// Public URL the gateway reaches this service at, used to build callback URLs
    pub base_url: String,
    pub request_body_limit: usize,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            port: 8080,
            workers: num_cpus::get_physical(),
            host: "localhost".into(),
            base_url: "http://localhost:8080".into(),
            request_body_limit: 16 * 1024, // POST request body is limited to 16KiB
            shutdown_timeout: 30,
        }
    }
}

impl Settings {
    pub fn new() -> ApplicationResult<Self> {
        Self::with_config_path(None)
    }

    /// Loads `config/<env>.toml` (or `config_path`) overlaid with `ROUTER__` environment
    /// variables, e.g. `ROUTER__SERVER__PORT=9000`.
    pub fn with_config_path(config_path: Option<PathBuf>) -> ApplicationResult<Self> {
        let environment = env::which();
        let config_path = config_path.unwrap_or_else(|| {
            env::workspace_path()
                .join("config")
                .join(environment.config_path())
        });

        let config = config::Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix("ROUTER")
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        serde_path_to_error::deserialize(config).map_err(|error| {
            logger::error!(%error, "Unable to deserialize application configuration");
            ApplicationError::from(error.into_inner())
        })
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        self.server.validate()?;
        self.validate_bambora()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use serial_test::serial;

    use super::*;

    fn config_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "router-settings-{}-{name}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    #[serial]
    fn settings_are_read_from_file() {
        let path = config_file(
            "full",
            r#"
[server]
port = 9090
base_url = "https://shop.example"

[connectors.bambora]
base_url = "http://localhost:1234/checkout/"
merchant_base_url = "http://localhost:1234/merchant/"
transaction_base_url = "http://localhost:1234/transaction/"

[bambora]
continue_url = "https://shop.example/continue"
capture = true
excluded_payment_types = "2,3"

[bambora.test]
merchant_number = "T123"
"#,
        );

        let settings = Settings::with_config_path(Some(path)).unwrap();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "localhost");
        assert_eq!(
            settings.connectors.bambora.merchant_base_url,
            "http://localhost:1234/merchant/"
        );
        assert!(settings.bambora.capture);
        assert!(settings.bambora.test_mode);
        assert_eq!(settings.bambora.get_excluded_payment_types(), vec!["2", "3"]);
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        let path = config_file("override", "[server]\nport = 9090\n");
        std::env::set_var("ROUTER__SERVER__PORT", "9191");

        let settings = Settings::with_config_path(Some(path));
        std::env::remove_var("ROUTER__SERVER__PORT");

        assert_eq!(settings.unwrap().server.port, 9191);
    }

    #[test]
    #[serial]
    fn missing_file_falls_back_to_defaults() {
        let settings =
            Settings::with_config_path(Some(PathBuf::from("/nonexistent/router.toml"))).unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(
            settings.connectors.bambora.base_url,
            "https://api.v1.checkout.bambora.com/"
        );
    }

    #[test]
    #[serial]
    fn malformed_values_are_rejected() {
        let path = config_file("malformed", "[server]\nport = \"not a port\"\n");

        assert!(matches!(
            Settings::with_config_path(Some(path)),
            Err(ApplicationError::ConfigurationError(_))
        ));
    }
}

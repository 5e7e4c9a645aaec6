use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use crate::schemas::AppState;

/// Hosted prediction service used when nothing else is configured
pub const DEFAULT_UPSTREAM_URL: &str = "https://web-production-69fc2.up.railway.app";

/// Settings of the development server.
///
/// Sources, lowest priority first: built-in defaults, the optional TOML file,
/// `LIFEXPECT_*` environment variables, then command-line flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to, e.g. `0.0.0.0:3000`
    pub bind_address: String,
    /// Base URL of the prediction service
    pub upstream_url: String,
    /// Directory with the built frontend (`index.html`, wasm, js)
    pub static_dir: String,
    /// Remove the leading `/api` before forwarding
    pub strip_api_prefix: bool,
    /// Timeout for a single upstream call
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            static_dir: "workspace/frontend/dist".to_string(),
            strip_api_prefix: false,
            request_timeout_secs: 30,
        }
    }
}

/// Values given on the command line; `None` keeps the loaded value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
    pub static_dir: Option<String>,
    pub strip_api_prefix: Option<bool>,
}

impl ServerConfig {
    /// Load configuration from `.env`, the optional config file and the environment
    pub fn load(config_path: &str) -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("upstream_url", defaults.upstream_url)?
            .set_default("static_dir", defaults.static_dir)?
            .set_default("strip_api_prefix", defaults.strip_api_prefix)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("LIFEXPECT").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", config_path))?;

        let config: ServerConfig = settings
            .try_deserialize()
            .context("Invalid server configuration")?;
        Ok(config.normalized())
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bind_address) = overrides.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(upstream_url) = overrides.upstream_url {
            self.upstream_url = upstream_url;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.static_dir = static_dir;
        }
        if let Some(strip_api_prefix) = overrides.strip_api_prefix {
            self.strip_api_prefix = strip_api_prefix;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.upstream_url = self.upstream_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Upstream URL for an incoming `/api/...` path (with query string)
    pub fn upstream_target(&self, path_and_query: &str) -> String {
        let forwarded = if self.strip_api_prefix {
            match path_and_query.strip_prefix("/api") {
                Some(rest) if rest.is_empty() || rest.starts_with('?') => format!("/{}", rest),
                Some(rest) if rest.starts_with('/') => rest.to_string(),
                _ => path_and_query.to_string(),
            }
        } else {
            path_and_query.to_string()
        };
        format!("{}{}", self.upstream_url, forwarded)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Initialize application state from configuration
pub fn initialize_app_state(config: ServerConfig) -> Result<AppState> {
    tracing::info!("Upstream prediction service: {}", config.upstream_url);

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()
        .context("Failed to build HTTP client")?;

    Ok(AppState::new(client, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_upstream_target_keeps_api_prefix_by_default() {
        let config = ServerConfig {
            upstream_url: "http://upstream:8000".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(
            config.upstream_target("/api/countries"),
            "http://upstream:8000/api/countries"
        );
    }

    #[test]
    fn test_upstream_target_strips_api_prefix() {
        let config = ServerConfig {
            upstream_url: "http://upstream:8000".to_string(),
            strip_api_prefix: true,
            ..ServerConfig::default()
        };
        assert_eq!(config.upstream_target("/api/predict"), "http://upstream:8000/predict");
        assert_eq!(
            config.upstream_target("/api/countries?region=eu"),
            "http://upstream:8000/countries?region=eu"
        );
        assert_eq!(config.upstream_target("/api"), "http://upstream:8000/");
        assert_eq!(config.upstream_target("/apis/x"), "http://upstream:8000/apis/x");
    }

    #[test]
    fn test_overrides_replace_loaded_values() {
        let config = ServerConfig::default().with_overrides(ConfigOverrides {
            upstream_url: Some("http://localhost:8000/".to_string()),
            strip_api_prefix: Some(true),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.upstream_url, "http://localhost:8000");
        assert!(config.strip_api_prefix);
        assert_eq!(config.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "upstream_url = \"http://predictor.local/\"").unwrap();
        writeln!(file, "request_timeout_secs = 5").unwrap();

        let config = ServerConfig::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.upstream_url, "http://predictor.local");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(!config.strip_api_prefix);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ServerConfig::load("/nonexistent/lifexpect").unwrap();
        assert_eq!(config.static_dir, ServerConfig::default().static_dir);
    }
}

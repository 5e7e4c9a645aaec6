use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::ConfigOverrides;
use commands::serve;

#[derive(Parser)]
#[command(name = "lifexpect")]
#[command(about = "Development server for the life expectancy prediction form")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the frontend and forward `/api` calls to the prediction service
    Serve {
        /// Path of the optional TOML configuration file
        #[arg(short, long, env = "LIFEXPECT_CONFIG", default_value = "lifexpect.toml")]
        config: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Base URL of the prediction service
        ///
        /// Examples:
        ///   https://web-production-69fc2.up.railway.app
        ///   http://localhost:8000
        #[arg(short, long, env = "UPSTREAM_URL")]
        upstream_url: Option<String>,

        /// Directory containing the built frontend
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<String>,

        /// Remove the `/api` prefix before forwarding (`/api/predict` -> `/predict`)
        #[arg(long, env = "STRIP_API_PREFIX", num_args = 0..=1, default_missing_value = "true")]
        strip_api_prefix: Option<bool>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                config,
                bind_address,
                upstream_url,
                static_dir,
                strip_api_prefix,
            } => {
                let overrides = ConfigOverrides {
                    bind_address,
                    upstream_url,
                    static_dir,
                    strip_api_prefix,
                };
                serve(&config, overrides).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "lifexpect",
            "serve",
            "--upstream-url",
            "http://localhost:8000",
            "--strip-api-prefix",
            "true",
        ])
        .unwrap();

        let Commands::Serve {
            upstream_url,
            strip_api_prefix,
            config,
            ..
        } = cli.command;
        assert_eq!(upstream_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(strip_api_prefix, Some(true));
        assert_eq!(config, "lifexpect.toml");
    }

    #[test]
    fn test_bare_strip_api_prefix_flag() {
        let cli = Cli::try_parse_from(["lifexpect", "serve", "--strip-api-prefix"]).unwrap();

        let Commands::Serve {
            strip_api_prefix, ..
        } = cli.command;
        assert_eq!(strip_api_prefix, Some(true));

        let cli = Cli::try_parse_from(["lifexpect", "serve", "--strip-api-prefix=false"]).unwrap();
        let Commands::Serve {
            strip_api_prefix, ..
        } = cli.command;
        assert_eq!(strip_api_prefix, Some(false));
    }
}

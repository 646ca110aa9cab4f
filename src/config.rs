//! Application configuration loaded from command-line flags.
//!
//! Configuration is parsed once at startup and validated before the server
//! starts.
//!
//! ## Flags
//!
//! - `--base` - Base URL every request is redirected to (default: `https://example.com`)
//! - `--addr` - Address and port to listen on (default: `0.0.0.0:8080`)
//! - `--filter` - Comma-separated keywords; when set, only paths containing
//!   at least one keyword are redirected
//! - `--filter-count` - Maximum number of filter keywords kept (0 = no limit)
//! - `--stats-file` - Statistics persistence file (default: `stats.json`)
//! - `--paths-file` - Reserved-token persistence file (default: `paths.json`)
//!
//! Log level is controlled through `RUST_LOG` as usual.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

use crate::filter::PathFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "redirector", version, about)]
pub struct Cli {
    /// Base URL to redirect to
    #[arg(long, default_value = "https://example.com")]
    pub base: String,

    /// Address and port to listen on
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Comma-separated list of keywords; only matching paths are redirected
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Maximum number of filter keywords (0 for no limit)
    #[arg(long, default_value_t = 0)]
    pub filter_count: usize,

    /// File the statistics are persisted to
    #[arg(long, default_value = "stats.json")]
    pub stats_file: PathBuf,

    /// File the reserved endpoint tokens are persisted to
    #[arg(long, default_value = "paths.json")]
    pub paths_file: PathBuf,
}

/// Validated service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub listen_addr: String,
    pub filter: PathFilter,
    pub stats_file: PathBuf,
    pub paths_file: PathBuf,
}

impl Config {
    /// Builds a validated configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or listen address is invalid.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = Self {
            base_url: cli.base,
            listen_addr: cli.addr,
            filter: PathFilter::parse(&cli.filter, cli.filter_count),
            stats_file: cli.stats_file,
            paths_file: cli.paths_file,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not a valid http(s) URL
    /// - `listen_addr` is not a valid socket address
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("--base must be a valid URL, got '{}': {}", self.base_url, e))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "--base must use http or https, got '{}'",
                self.base_url
            );
        }

        self.listen_addr.parse::<SocketAddr>().map_err(|e| {
            anyhow::anyhow!(
                "--addr must be in format 'host:port', got '{}': {}",
                self.listen_addr,
                e
            )
        })?;

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);

        if self.filter.is_empty() {
            tracing::info!("  Filter: disabled (all paths redirected)");
        } else {
            tracing::info!("  Filter: {}", self.filter.keywords().join(", "));
        }

        tracing::info!("  Stats file: {}", self.stats_file.display());
        tracing::info!("  Paths file: {}", self.paths_file.display());
    }
}

//! Server configuration module

use clap::Parser;

use crate::config::{
    catalogue::CatalogueConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod catalogue;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Vibe Commerce JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "vibe-json", about = "Vibe Commerce JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Catalogue seeding settings.
    #[command(flatten)]
    pub catalogue: CatalogueConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::config::observability::LogFormat;

    #[test]
    fn defaults_apply_with_only_a_database_url() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "vibe-json",
            "--database-url",
            "postgres://localhost/vibe",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:5000");
        assert!(matches!(config.logging.log_format, LogFormat::Compact));
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert!(config.catalogue.seed_catalogue, "seeding should default on");
        assert_eq!(config.catalogue.catalogue_url, "https://fakestoreapi.com");
        assert_eq!(config.catalogue.catalogue_seed_limit, 8);

        Ok(())
    }

    #[test]
    fn seeding_can_be_disabled() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "vibe-json",
            "--database-url",
            "postgres://localhost/vibe",
            "--seed-catalogue",
            "false",
            "--port",
            "8080",
        ])?;

        assert!(!config.catalogue.seed_catalogue, "seeding should be off");
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");

        Ok(())
    }
}

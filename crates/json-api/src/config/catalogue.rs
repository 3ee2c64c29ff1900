//! Catalogue Config

use clap::{ArgAction, Args};

/// Startup catalogue seeding settings.
#[derive(Debug, Args)]
pub struct CatalogueConfig {
    /// Seed an empty product table from the remote catalogue at startup
    #[arg(
        long,
        env = "SEED_CATALOGUE",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed_catalogue: bool,

    /// Base URL of the Fake Store compatible catalogue
    #[arg(long, env = "CATALOGUE_URL", default_value = "https://fakestoreapi.com")]
    pub catalogue_url: String,

    /// Maximum number of products to import
    #[arg(long, env = "CATALOGUE_SEED_LIMIT", default_value_t = 8)]
    pub catalogue_seed_limit: u32,
}

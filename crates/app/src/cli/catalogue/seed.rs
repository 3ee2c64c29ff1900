use clap::Args;
use vibe_app::{
    catalogue::{FakeStoreClient, SeedOutcome, seed_catalogue},
    context::AppContext,
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Base URL of the Fake Store compatible catalogue
    #[arg(long, env = "CATALOGUE_URL", default_value = "https://fakestoreapi.com")]
    catalogue_url: String,

    /// Maximum number of products to import
    #[arg(long, env = "CATALOGUE_SEED_LIMIT", default_value_t = 8)]
    limit: u32,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialize app context: {error}"))?;

    let source = FakeStoreClient::new(args.catalogue_url);

    let outcome = seed_catalogue(app.products.as_ref(), &source, args.limit)
        .await
        .map_err(|error| format!("failed to seed catalogue: {error}"))?;

    match outcome {
        SeedOutcome::Skipped(existing) => {
            println!("catalogue already holds {existing} products; nothing to do");
        }
        SeedOutcome::Seeded(inserted) => println!("seeded {inserted} products"),
    }

    Ok(())
}

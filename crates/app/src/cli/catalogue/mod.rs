use clap::{Args, Subcommand};

mod seed;

#[derive(Debug, Args)]
pub(crate) struct CatalogueCommand {
    #[command(subcommand)]
    command: CatalogueSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogueSubcommand {
    /// Seed an empty product catalogue from the remote feed
    Seed(seed::SeedArgs),
}

pub(crate) async fn run(command: CatalogueCommand) -> Result<(), String> {
    match command.command {
        CatalogueSubcommand::Seed(args) => seed::run(args).await,
    }
}

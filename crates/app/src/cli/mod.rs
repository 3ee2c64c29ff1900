use clap::{Parser, Subcommand};

mod catalogue;
mod db;

#[derive(Debug, Parser)]
#[command(name = "vibe-app", about = "Vibe Commerce admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalogue(catalogue::CatalogueCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalogue(command) => catalogue::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

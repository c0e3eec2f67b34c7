//! Antiphonale CLI
//!
//! Command-line interface for the antiphona catalog

use std::path::PathBuf;

use antiphonale_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::{AppConfig, Overrides};

#[derive(Debug, Parser)]
#[command(name = "antiphonale")]
#[command(about = "Antiphonale - catalog of antiphons for the Mass propers", long_about = None)]
struct Cli {
    /// Config file (default: ./antiphonale.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file, overriding config and environment
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Logging profile: dev, prod or test
    #[arg(long, global = true)]
    log: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create or migrate the database and ensure the default MissaType
    Init(commands::init::InitArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Render a Missa proper to Markdown
    Render(commands::render::RenderArgs),
    /// Print the admin schema registry
    Schema(commands::schema::SchemaArgs),
    /// Delete a row with its entity's deletion semantics
    Delete(commands::delete::DeleteArgs),
}

fn main() {
    let cli = Cli::parse();

    let overrides = Overrides {
        config: cli.config,
        db: cli.db,
        log: cli.log,
    };
    let config = match AppConfig::load(&overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    logging_facility::init(config.log_profile);

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args, &config),
        Commands::Seed(args) => commands::seed::execute(args, &config),
        Commands::Render(args) => commands::render::execute(args, &config),
        Commands::Schema(args) => commands::schema::execute(args),
        Commands::Delete(args) => commands::delete::execute(args, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

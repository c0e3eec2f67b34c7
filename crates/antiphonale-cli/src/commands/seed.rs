//! Seed import command
//!
//! Usage: antiphonale seed import <PATH>
//!
//! `PATH` is a seed file or a directory of `.yaml` / `.yml` seeds, imported
//! in file-name order.

use std::path::PathBuf;

use antiphonale_store::db::open_catalog;
use clap::{Args, Subcommand};

use super::{logged, CmdResult};
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file into the database
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

pub fn execute(args: SeedArgs, config: &AppConfig) -> CmdResult {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, config),
    }
}

fn execute_import(args: ImportArgs, config: &AppConfig) -> CmdResult {
    let seed_files = if args.path.is_dir() {
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    let mut conn = logged("open_catalog", || open_catalog(&config.db_path))?;
    for seed_file in seed_files {
        println!("Importing {}...", seed_file.display());
        let digest = antiphonale_store::seed::import_seed(&seed_file, &mut conn)?;
        println!("✓ Imported (digest: {})", digest);
    }
    Ok(())
}

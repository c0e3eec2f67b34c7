//! Render command
//!
//! Usage: antiphonale render missa <MISSA_ID> [--output <FILE>]

use std::path::PathBuf;

use antiphonale_store::db::open_catalog;
use antiphonale_store::repo::load_store;
use clap::{Args, Subcommand};

use super::{logged, CmdResult};
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub command: RenderCommand,
}

#[derive(Debug, Subcommand)]
pub enum RenderCommand {
    /// Render the proper of one Missa
    Missa(RenderMissaArgs),
}

#[derive(Debug, Args)]
pub struct RenderMissaArgs {
    /// Missa key
    pub missa_id: i64,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: RenderArgs, config: &AppConfig) -> CmdResult {
    match args.command {
        RenderCommand::Missa(missa_args) => execute_render_missa(missa_args, config),
    }
}

fn execute_render_missa(args: RenderMissaArgs, config: &AppConfig) -> CmdResult {
    let markdown = logged("render_missa", || {
        let conn = open_catalog(&config.db_path)?;
        let store = load_store(&conn)?;
        Ok(antiphonale_core::render::render_missa(&store, args.missa_id)?)
    })?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, markdown)?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        print!("{}", markdown);
    }
    Ok(())
}

//! Init command
//!
//! Usage: antiphonale init

use antiphonale_store::db::open_catalog;
use antiphonale_store::SqliteRepo;
use clap::Args;

use super::{logged, CmdResult};
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct InitArgs {}

pub fn execute(_args: InitArgs, config: &AppConfig) -> CmdResult {
    let default_id = logged("init", || {
        let mut conn = open_catalog(&config.db_path)?;
        SqliteRepo::resolve_default_missa_type(&mut conn)
    })?;

    println!(
        "✓ Initialized {} (default MissaType {})",
        config.db_path.display(),
        default_id
    );
    Ok(())
}

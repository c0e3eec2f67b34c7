//! Delete command
//!
//! Usage: antiphonale delete <ENTITY> <ID>
//!
//! Deleting a MissaType reports how many memberships went with it and how
//! many Missae were re-pointed at the default.

use antiphonale_core::EntityKind;
use antiphonale_store::db::open_catalog;
use antiphonale_store::SqliteRepo;
use clap::Args;

use super::{logged, CmdResult};
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Entity kind (name, snake_case or table name)
    pub entity: EntityKind,

    /// Row key
    pub id: i64,
}

pub fn execute(args: DeleteArgs, config: &AppConfig) -> CmdResult {
    let mut conn = logged("open_catalog", || open_catalog(&config.db_path))?;

    if args.entity == EntityKind::MissaType {
        let outcome = logged("delete", || SqliteRepo::delete_missa_type(&mut conn, args.id))?;
        println!(
            "✓ Deleted MissaType {} ({} membership(s) removed, {} Missa(e) moved to default)",
            args.id, outcome.cascaded, outcome.rewritten
        );
    } else {
        logged("delete", || SqliteRepo::delete(&mut conn, args.entity, args.id))?;
        println!("✓ Deleted {} {}", args.entity, args.id);
    }
    Ok(())
}

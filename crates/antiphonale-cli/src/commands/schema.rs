//! Schema command
//!
//! Usage: antiphonale schema [ENTITY] [--json]

use antiphonale_core::admin::{self, EntitySchema, FieldKind};
use antiphonale_core::EntityKind;
use clap::Args;

use super::CmdResult;

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Only this entity (name, snake_case or table name)
    pub entity: Option<EntityKind>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SchemaArgs) -> CmdResult {
    let schemas = match args.entity {
        Some(kind) => vec![admin::schema_of(kind)],
        None => admin::registry(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schemas)?);
    } else {
        for schema in &schemas {
            print!("{}", describe(schema));
        }
    }
    Ok(())
}

/// Plain-text listing of one entity
fn describe(schema: &EntitySchema) -> String {
    let mut out = format!("{} ({})\n", schema.entity, schema.table);
    for field in &schema.fields {
        let kind = match field.kind {
            FieldKind::Text => "text".to_string(),
            FieldKind::Url => "url".to_string(),
            FieldKind::SmallInteger => "small integer".to_string(),
            FieldKind::Decimal {
                max_digits,
                decimal_places,
            } => format!("decimal({}, {})", max_digits, decimal_places),
        };
        out.push_str(&format!("  {}: {}", field.name, kind));
        if let Some(max) = field.max_length {
            out.push_str(&format!(", max {}", max));
        }
        if field.nullable {
            out.push_str(", nullable");
        }
        if field.blank {
            out.push_str(", may be blank");
        }
        out.push('\n');
    }
    for fk in &schema.foreign_keys {
        out.push_str(&format!(
            "  {} -> {}, on delete {:?}{}\n",
            fk.name,
            fk.target,
            fk.on_delete,
            if fk.nullable { ", nullable" } else { "" }
        ));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_missa() {
        let text = describe(&admin::schema_of(EntityKind::Missa));
        assert!(text.starts_with("Missa (missae)\n"));
        assert!(text.contains("  name: text, max 40\n"));
        assert!(text.contains("-> MissaType, on delete SetDefault"));
    }
}

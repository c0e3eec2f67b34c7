use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::{Anno, Antiphona, AntiphonaMissa, AntiphonaType, Documentum, Missa, MissaType};
use crate::ops::Store;
use crate::queries;

/// Render the proper of a Missa to Markdown
///
/// Generates:
/// - Missa name as H1 and its MissaType
/// - One H2 per AntiphonaType of the MissaType, in membership order, with
///   the assignments of that type
/// - Assignments whose type is not a member of the MissaType, grouped by
///   type, after the ordered sections
///
/// # Errors
/// * `NotFound` - the Missa or any referenced row is missing
pub fn render_missa(store: &Store, missa_id: i64) -> Result<String> {
    let missa = store.get::<Missa>(missa_id)?;
    let missa_type = store.get::<MissaType>(missa.missa_type_id)?;

    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", missa));
    output.push_str(&format!("**MissaType**: {}\n\n", missa_type));

    let mut by_type: BTreeMap<i64, Vec<&AntiphonaMissa>> = BTreeMap::new();
    for am in queries::assignments_of_missa(store, missa_id)? {
        by_type.entry(am.antiphona_type_id).or_default().push(am);
    }

    for antiphona_type in queries::ordered_antiphona_types(store, missa_type.id)? {
        output.push_str(&format!("## {}\n\n", antiphona_type));
        match by_type.remove(&antiphona_type.id) {
            Some(assignments) => {
                for am in assignments {
                    render_assignment(store, am, &mut output)?;
                }
            }
            None => output.push_str("_No antiphona assigned._\n\n"),
        }
    }

    for (antiphona_type_id, assignments) in by_type {
        let antiphona_type = store.get::<AntiphonaType>(antiphona_type_id)?;
        output.push_str(&format!("## {}\n\n", antiphona_type));
        for am in assignments {
            render_assignment(store, am, &mut output)?;
        }
    }

    Ok(output)
}

fn render_assignment(store: &Store, am: &AntiphonaMissa, output: &mut String) -> Result<()> {
    let antiphona = store.get::<Antiphona>(am.antiphona_id)?;
    let documentum = store.get::<Documentum>(am.documentum_id)?;

    output.push_str(&format!("### {}\n\n", antiphona));
    output.push_str(&format!("> {}\n\n", antiphona.text));

    if !am.psalm.is_empty() {
        output.push_str(&format!("- **Psalmus**: {}\n", am.psalm));
    }
    if !am.alt_psalm.is_empty() {
        output.push_str(&format!("- **Psalmus alter**: {}\n", am.alt_psalm));
    }
    if let Some(anno_id) = am.anno_id {
        output.push_str(&format!("- **{}**\n", store.get::<Anno>(anno_id)?));
    }
    if let Some(ref evangelium) = am.evangelium {
        output.push_str(&format!("- **Evangelium**: {}\n", evangelium));
    }
    output.push_str(&format!("- **Documentum**: {}\n", documentum));

    for s in queries::suggestions_of(store, am.id)? {
        let mut line = format!("- Suggestion: {}", s.song_name);
        if !s.author.is_empty() {
            line.push_str(&format!(" ({})", s.author));
        }
        line.push_str(&format!(", similarity {}", s.similarity));
        if !s.audio_link.is_empty() {
            line.push_str(&format!(", [audio]({})", s.audio_link));
        }
        if !s.sheet_link.is_empty() {
            line.push_str(&format!(", [sheet]({})", s.sheet_link));
        }
        output.push_str(&line);
        output.push('\n');
    }
    output.push('\n');
    Ok(())
}

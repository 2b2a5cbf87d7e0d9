//! Configuration for the LRIS keyword table.

use super::registry::KeywordRegistry;
use super::types::{KeywordCategory, KeywordDisposition, KeywordSpec};
use crate::error::Result;

/// Create the keyword registry for LRIS cultivator descriptions.
///
/// Descriptions follow the land record convention, relation leftmost and
/// residence rightmost:
///
/// ```text
/// [kasht] <name> <relation> <parent> kaum <caste> sakin <residence>
/// ```
///
/// Fields are therefore extracted right to left: residence, then caste,
/// then relation. The cultivation marker may sit anywhere.
pub fn create_lris_keywords() -> Result<KeywordRegistry> {
    let mut registry = KeywordRegistry::new();

    // Kasht: cultivation marker
    registry.register(
        KeywordSpec::new(KeywordCategory::Cultivation).with_variants(["kasht"]),
    )?;

    // Sakin: "resident of"
    registry.register(
        KeywordSpec::new(KeywordCategory::Residence).with_variants(["sakin", "sakindeh"]),
    )?;

    // Kaum: caste
    registry.register(KeywordSpec::new(KeywordCategory::Caste).with_variants(["kaum"]))?;

    // Pisar/dukhtar/zoja: son, daughter, wife (plus plural and English forms)
    registry.register(
        KeywordSpec::new(KeywordCategory::Relation)
            .with_variants([
                "pisar",
                "pisaran",
                "dukhtar",
                "dukhtaran",
                "zoja",
                "byuh",
                "w/o",
                "s/o",
                "d/o",
            ])
            .with_disposition(KeywordDisposition::Prefix),
    )?;

    Ok(registry)
}

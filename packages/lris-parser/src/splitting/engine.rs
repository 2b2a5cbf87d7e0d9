//! Field splitter that peels keyword-anchored fields off a cultivator description.

use std::sync::LazyLock;

use super::config::create_lris_keywords;
use super::registry::KeywordRegistry;
use super::text::{collapse_whitespace, normalize, title_case};
use super::types::{CompiledKeyword, KeywordCategory, KeywordDisposition};
use crate::types::{OwnershipType, ParsedPerson};

#[allow(clippy::expect_used)] // Static keyword table that is guaranteed to compile
static LRIS_SPLITTER: LazyLock<FieldSplitter> = LazyLock::new(|| {
    FieldSplitter::new(create_lris_keywords().expect("valid keyword table"))
});

/// Splits free-text cultivator descriptions into person fields.
///
/// Works right to left: each field category (in registry order) takes
/// everything from its earliest keyword match to the end of the working
/// text, and the text before the match becomes the new working text.
/// Whatever remains at the end is the name.
///
/// Input that does not follow the usual ordering (residence last,
/// relation first) is split best-effort without an error.
pub struct FieldSplitter {
    registry: KeywordRegistry,
}

impl FieldSplitter {
    /// Create a splitter over a keyword registry.
    #[must_use]
    pub fn new(registry: KeywordRegistry) -> Self {
        Self { registry }
    }

    /// Shared splitter for the LRIS keyword table, compiled once.
    #[must_use]
    pub fn lris() -> &'static FieldSplitter {
        &LRIS_SPLITTER
    }

    /// Split a cell that may be null.
    ///
    /// A null cell short-circuits to an empty person with no ownership type.
    #[must_use]
    pub fn split_cell(&self, cell: Option<&str>) -> ParsedPerson {
        match cell {
            Some(text) => self.split(text),
            None => ParsedPerson::default(),
        }
    }

    /// Split cultivator text into person fields.
    ///
    /// # Examples
    /// ```
    /// use lris_parser::splitting::FieldSplitter;
    /// use lris_parser::types::OwnershipType;
    ///
    /// let person = FieldSplitter::lris().split("kasht abdul s/o rahim kaum jat sakin lower town");
    /// assert_eq!(person.name, "Abdul");
    /// assert_eq!(person.parentage, "S/O Rahim");
    /// assert_eq!(person.caste, "Jat");
    /// assert_eq!(person.residence, "Lower Town");
    /// assert_eq!(person.ownership_type, Some(OwnershipType::Cultivator));
    /// ```
    #[must_use]
    pub fn split(&self, text: &str) -> ParsedPerson {
        let mut working = normalize(text);

        let mut ownership_type = OwnershipType::Owner;
        if let Some(marker) = self.registry.get(KeywordCategory::Cultivation) {
            if marker.is_match(&working) {
                ownership_type = OwnershipType::Cultivator;
                let stripped = collapse_whitespace(&marker.pattern().replace_all(&working, ""));
                working = stripped;
            }
        }

        let mut person = ParsedPerson {
            ownership_type: Some(ownership_type),
            ..ParsedPerson::default()
        };

        for keyword in self.registry.field_keywords() {
            let Some((field, remainder)) = extract_field(keyword, &working) else {
                continue;
            };
            let field = title_case(&field);
            match keyword.category() {
                KeywordCategory::Residence => person.residence = field,
                KeywordCategory::Caste => person.caste = field,
                KeywordCategory::Relation => person.parentage = field,
                KeywordCategory::Cultivation => {}
            }
            working = remainder;
        }

        person.name = title_case(&collapse_whitespace(&working));

        tracing::trace!(
            name = %person.name,
            parentage = %person.parentage,
            caste = %person.caste,
            residence = %person.residence,
            "Split cultivator text"
        );

        person
    }
}

/// Extract one field at the earliest keyword match.
///
/// Returns `(field, remainder)`, or `None` when no variant occurs.
fn extract_field(keyword: &CompiledKeyword, text: &str) -> Option<(String, String)> {
    let m = keyword.pattern().find(text)?;
    let tail = collapse_whitespace(&text[m.end()..]);

    let field = match keyword.spec().disposition {
        KeywordDisposition::Strip => tail,
        KeywordDisposition::Prefix if tail.is_empty() => m.as_str().to_string(),
        KeywordDisposition::Prefix => format!("{} {tail}", m.as_str()),
    };

    Some((field, text[..m.start()].trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(text: &str) -> ParsedPerson {
        FieldSplitter::lris().split(text)
    }

    #[test]
    fn test_split_full_description() {
        let person = split("kasht abdul s/o rahim kaum jat sakin lower town");
        assert_eq!(
            person,
            ParsedPerson {
                name: "Abdul".to_string(),
                parentage: "S/O Rahim".to_string(),
                caste: "Jat".to_string(),
                residence: "Lower Town".to_string(),
                ownership_type: Some(OwnershipType::Cultivator),
            }
        );
    }

    #[test]
    fn test_split_owner_without_marker() {
        let person = split("Ghulam Mohammad pisar Ali kaum Dar sakin Pattan");
        assert_eq!(person.name, "Ghulam Mohammad");
        assert_eq!(person.parentage, "Pisar Ali");
        assert_eq!(person.caste, "Dar");
        assert_eq!(person.residence, "Pattan");
        assert_eq!(person.ownership_type, Some(OwnershipType::Owner));
    }

    #[test]
    fn test_split_no_keywords() {
        let person = split("  mohd   ISMAIL ");
        assert_eq!(person.name, "Mohd Ismail");
        assert_eq!(person.parentage, "");
        assert_eq!(person.caste, "");
        assert_eq!(person.residence, "");
        assert_eq!(person.ownership_type, Some(OwnershipType::Owner));
    }

    #[test]
    fn test_split_marker_in_the_middle() {
        let person = split("abdul kasht s/o rahim");
        assert_eq!(person.name, "Abdul");
        assert_eq!(person.parentage, "S/O Rahim");
        assert_eq!(person.ownership_type, Some(OwnershipType::Cultivator));
    }

    #[test]
    fn test_split_marker_never_in_name() {
        for text in [
            "kasht abdul",
            "abdul kasht",
            "kasht kasht abdul",
            "KASHT Abdul Kasht s/o rahim",
            "kasht",
        ] {
            let person = split(text);
            assert_eq!(person.ownership_type, Some(OwnershipType::Cultivator));
            assert!(
                !person.name.to_lowercase().contains("kasht"),
                "marker left in name for {text:?}: {:?}",
                person.name
            );
        }
    }

    #[test]
    fn test_split_marker_inside_word_joins_pieces() {
        let person = split("rahimkashtali");
        assert_eq!(person.name, "Rahimali");
        assert_eq!(person.ownership_type, Some(OwnershipType::Cultivator));

        let person = split("abdul kasht s/o rahim");
        assert_eq!(person.name, "Abdul");
    }

    #[test]
    fn test_split_residence_only() {
        let person = split("fatima sakindeh sopore");
        assert_eq!(person.name, "Fatima");
        assert_eq!(person.residence, "Sopore");
        assert_eq!(person.caste, "");
        assert_eq!(person.parentage, "");
    }

    #[test]
    fn test_split_prefers_longer_relation_variant() {
        let person = split("ali pisaran karim");
        assert_eq!(person.name, "Ali");
        assert_eq!(person.parentage, "Pisaran Karim");
    }

    #[test]
    fn test_split_wife_of() {
        let person = split("haleema zoja bashir kaum lone sakin tangmarg");
        assert_eq!(person.name, "Haleema");
        assert_eq!(person.parentage, "Zoja Bashir");
        assert_eq!(person.caste, "Lone");
        assert_eq!(person.residence, "Tangmarg");
    }

    #[test]
    fn test_split_relation_keyword_without_parent() {
        let person = split("abdul s/o");
        assert_eq!(person.name, "Abdul");
        assert_eq!(person.parentage, "S/O");
    }

    #[test]
    fn test_split_earliest_match_wins() {
        // Both residence keywords appear; the first one starts the residence
        let person = split("abdul sakin uri sakindeh boniyar");
        assert_eq!(person.name, "Abdul");
        assert_eq!(person.residence, "Uri Sakindeh Boniyar");
    }

    #[test]
    fn test_split_reordered_input_is_best_effort() {
        // Residence before caste: caste is swallowed by the residence field
        let person = split("abdul sakin uri kaum jat");
        assert_eq!(person.name, "Abdul");
        assert_eq!(person.residence, "Uri Kaum Jat");
        assert_eq!(person.caste, "");

        // Relation after caste: relation stays inside the caste field
        let person = split("abdul kaum jat s/o rahim");
        assert_eq!(person.name, "Abdul");
        assert_eq!(person.caste, "Jat S/O Rahim");
        assert_eq!(person.parentage, "");
    }

    #[test]
    fn test_split_empty_text() {
        let person = split("   ");
        assert_eq!(person.name, "");
        assert_eq!(person.ownership_type, Some(OwnershipType::Owner));
    }

    #[test]
    fn test_split_cell_null() {
        let person = FieldSplitter::lris().split_cell(None);
        assert_eq!(person, ParsedPerson::default());
        assert_eq!(person.ownership_type, None);
    }

    #[test]
    fn test_split_resplit_reintroduces_no_keywords() {
        let person = split("kasht abdul s/o rahim kaum jat sakin lower town");
        let rebuilt = format!("{} {} {}", person.name, person.caste, person.residence).to_lowercase();
        let again = split(&rebuilt);

        assert_eq!(again.ownership_type, Some(OwnershipType::Owner));
        assert_eq!(again.parentage, "");
        assert_eq!(again.caste, "");
        assert_eq!(again.residence, "");
        assert_eq!(again.name, "Abdul Jat Lower Town");
    }

    #[test]
    fn test_split_custom_registry() {
        use crate::splitting::{KeywordRegistry, KeywordSpec};

        let mut registry = KeywordRegistry::new();
        registry
            .register(KeywordSpec::new(KeywordCategory::Residence).with_variants(["mauza"]))
            .unwrap();
        let splitter = FieldSplitter::new(registry);

        let person = splitter.split("kasht abdul mauza kheri");
        assert_eq!(person.name, "Kasht Abdul");
        assert_eq!(person.residence, "Kheri");
        assert_eq!(person.ownership_type, Some(OwnershipType::Owner));
    }
}

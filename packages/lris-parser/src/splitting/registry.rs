//! Keyword registry for field splitting.

use super::types::{CompiledKeyword, KeywordCategory, KeywordSpec};
use crate::error::Result;

/// Registry of compiled keyword categories.
///
/// Registration order is extraction order: field categories are peeled
/// off the working text in the order they were registered.
pub struct KeywordRegistry {
    keywords: Vec<CompiledKeyword>,
}

impl KeywordRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keywords: Vec::new(),
        }
    }

    /// Compile and register a keyword specification.
    ///
    /// Re-registering a category replaces it in place, keeping its position.
    pub fn register(&mut self, spec: KeywordSpec) -> Result<()> {
        let compiled = spec.compile()?;
        match self
            .keywords
            .iter_mut()
            .find(|k| k.category() == compiled.category())
        {
            Some(slot) => *slot = compiled,
            None => self.keywords.push(compiled),
        }
        Ok(())
    }

    /// Get the compiled keywords for a category.
    #[must_use]
    pub fn get(&self, category: KeywordCategory) -> Option<&CompiledKeyword> {
        self.keywords.iter().find(|k| k.category() == category)
    }

    /// Field-producing categories in extraction order.
    pub fn field_keywords(&self) -> impl Iterator<Item = &CompiledKeyword> {
        self.keywords
            .iter()
            .filter(|k| k.category() != KeywordCategory::Cultivation)
    }
}

impl Default for KeywordRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = KeywordRegistry::new();
        registry
            .register(KeywordSpec::new(KeywordCategory::Caste).with_variants(["kaum"]))
            .unwrap();

        let caste = registry.get(KeywordCategory::Caste);
        assert!(caste.is_some());
        assert!(caste.unwrap().is_match("kaum jat"));
        assert!(registry.get(KeywordCategory::Residence).is_none());
    }

    #[test]
    fn test_registry_field_keywords_order() {
        let mut registry = KeywordRegistry::new();
        registry
            .register(KeywordSpec::new(KeywordCategory::Cultivation).with_variants(["kasht"]))
            .unwrap();
        registry
            .register(KeywordSpec::new(KeywordCategory::Residence).with_variants(["sakin"]))
            .unwrap();
        registry
            .register(KeywordSpec::new(KeywordCategory::Caste).with_variants(["kaum"]))
            .unwrap();

        let order: Vec<_> = registry.field_keywords().map(|k| k.category()).collect();
        assert_eq!(order, vec![KeywordCategory::Residence, KeywordCategory::Caste]);
    }

    #[test]
    fn test_registry_replace_keeps_position() {
        let mut registry = KeywordRegistry::new();
        registry
            .register(KeywordSpec::new(KeywordCategory::Residence).with_variants(["sakin"]))
            .unwrap();
        registry
            .register(KeywordSpec::new(KeywordCategory::Caste).with_variants(["kaum"]))
            .unwrap();
        registry
            .register(KeywordSpec::new(KeywordCategory::Residence).with_variants(["mauza"]))
            .unwrap();

        let order: Vec<_> = registry.field_keywords().map(|k| k.category()).collect();
        assert_eq!(order, vec![KeywordCategory::Residence, KeywordCategory::Caste]);

        let residence = registry.get(KeywordCategory::Residence).unwrap();
        assert!(residence.is_match("mauza kheri"));
        assert!(!residence.is_match("sakin kheri"));
    }
}

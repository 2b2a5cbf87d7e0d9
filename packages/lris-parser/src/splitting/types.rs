//! Types for the keyword-anchored field splitter.

use regex::{Regex, RegexBuilder};

use crate::error::{LrisError, Result};

/// Category of a keyword marker in a cultivator description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Cultivation marker (kasht). Sets the ownership type, produces no field.
    Cultivation,

    /// Residence marker (sakin). Introduces the place of residence.
    Residence,

    /// Caste marker (kaum). Introduces the caste.
    Caste,

    /// Relation marker (s/o, pisar, zoja, ...). Introduces the parentage.
    Relation,
}

impl KeywordCategory {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cultivation => "cultivation",
            Self::Residence => "residence",
            Self::Caste => "caste",
            Self::Relation => "relation",
        }
    }
}

/// What happens to a matched keyword when its field is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordDisposition {
    /// Drop the keyword, keep only the text after it.
    Strip,

    /// Keep the keyword as a prefix of the extracted field.
    ///
    /// Used for relations, where the keyword itself says which relation applies.
    Prefix,
}

/// Declarative specification of one keyword category.
#[derive(Debug, Clone)]
pub struct KeywordSpec {
    /// Category this spec belongs to.
    pub category: KeywordCategory,

    /// Keyword variants, lower-case, as they appear in source text.
    pub variants: Vec<String>,

    /// Treatment of the matched keyword.
    pub disposition: KeywordDisposition,
}

impl KeywordSpec {
    /// Create a new keyword specification with no variants.
    #[must_use]
    pub fn new(category: KeywordCategory) -> Self {
        Self {
            category,
            variants: Vec::new(),
            disposition: KeywordDisposition::Strip,
        }
    }

    /// Set the keyword variants.
    #[must_use]
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    /// Set the keyword disposition.
    #[must_use]
    pub fn with_disposition(mut self, disposition: KeywordDisposition) -> Self {
        self.disposition = disposition;
        self
    }

    /// Compile the variants into a single case-insensitive alternation.
    ///
    /// Longer variants are tried first so that at an equal start position
    /// `pisaran` wins over `pisar`.
    pub fn compile(self) -> Result<CompiledKeyword> {
        let mut variants: Vec<&str> = self.variants.iter().map(String::as_str).collect();
        variants.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = variants
            .iter()
            .map(|v| regex::escape(v))
            .collect::<Vec<_>>()
            .join("|");

        // An empty alternation would match everywhere; use a pattern that never matches.
        let source = if alternation.is_empty() {
            r"[^\s\S]".to_string()
        } else {
            format!("(?:{alternation})")
        };

        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|source| LrisError::KeywordPattern {
                category: self.category.as_str(),
                source,
            })?;

        Ok(CompiledKeyword {
            spec: self,
            pattern,
        })
    }
}

/// A keyword spec with its compiled pattern.
#[derive(Debug, Clone)]
pub struct CompiledKeyword {
    spec: KeywordSpec,
    pattern: Regex,
}

impl CompiledKeyword {
    /// The underlying specification.
    #[must_use]
    pub fn spec(&self) -> &KeywordSpec {
        &self.spec
    }

    /// Category of this keyword set.
    #[must_use]
    pub fn category(&self) -> KeywordCategory {
        self.spec.category
    }

    /// The compiled alternation.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Whether any variant occurs in the text.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

//! Keyword-anchored splitting of cultivator descriptions.
//!
//! A description such as `kasht abdul s/o rahim kaum jat sakin lower town`
//! is decomposed into name, parentage, caste, residence and ownership type
//! using the fixed Urdu keyword markers of the land record.

mod config;
mod engine;
mod registry;
mod text;
mod types;

pub use config::create_lris_keywords;
pub use engine::FieldSplitter;
pub use registry::KeywordRegistry;
pub use text::{collapse_whitespace, normalize, title_case};
pub use types::{CompiledKeyword, KeywordCategory, KeywordDisposition, KeywordSpec};

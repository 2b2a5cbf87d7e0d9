//! LRIS Parser - Split land record rows into AgriStack-style plot records.
//!
//! Land record exports describe each cultivator in one free-text column
//! using fixed Urdu keyword markers (`kasht`, `s/o`, `kaum`, `sakin`) and
//! list the plots they hold in another. This crate splits the description
//! into normalized fields and expands every row into one record per plot,
//! each with freshly generated identifiers.
//!
//! # Example
//!
//! ```
//! use lris_parser::config::ColumnMap;
//! use lris_parser::expander::RowExpander;
//! use lris_parser::ids::{IdGenerator, IdPrefix};
//! use lris_parser::types::RawRow;
//!
//! let row = RawRow::new()
//!     .with_cell("5", Some("kasht abdul s/o rahim kaum jat sakin lower town"))
//!     .with_cell("7", Some("101, 102\n103"));
//!
//! let mut ids = IdGenerator::seeded(IdPrefix::default(), 42);
//! let records = RowExpander::lris(ColumnMap::default())
//!     .expand(&row, &mut ids)
//!     .into_records();
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].name, "Abdul");
//! assert_eq!(records[2].original_khasra, "103");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants, column mapping and validation
//! - [`types`]: Core data types (RawRow, ParsedPerson, PlotRecord, RowOutcome)
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Keyword-anchored field splitting
//! - [`ids`]: Farmer and farm identifier generation
//! - [`expander`]: Row-to-plot expansion
//! - [`source`]: CSV input
//! - [`sink`]: CSV output
//! - [`pipeline`]: End-to-end processing of an export
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod expander;
pub mod ids;
pub mod pipeline;
pub mod sink;
pub mod source;
pub mod splitting;
pub mod types;

// Re-export main functions
pub use pipeline::{expand_rows, process_file, PipelineOptions};

// Re-export commonly used items
pub use error::{LrisError, Result};
pub use expander::RowExpander;
pub use ids::{IdGenerator, IdPrefix};
pub use splitting::FieldSplitter;
pub use types::{
    OwnershipType, ParsedPerson, PlotRecord, RawRow, RowOutcome, RunSummary, SkipReason,
};

//! Core data types for the LRIS parser.
//!
//! These types represent land record rows as read from the source export
//! and the per-plot records produced from them.

use serde::Serialize;

/// One source row: an ordered mapping from column key to raw cell value.
///
/// A `None` value is the null-equivalent (an empty or missing cell).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, Option<String>)>,
}

impl RawRow {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Add a cell, replacing any previous value for the same key.
    #[must_use]
    pub fn with_cell(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.insert(key, value.map(Into::into));
        self
    }

    /// Insert a cell, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        if let Some(slot) = self.cells.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.cells.push((key, value));
        }
    }

    /// Get the text of a cell. Absent and null cells both yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Column keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

/// Ownership role of the person described in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OwnershipType {
    /// Land owner (no cultivation marker).
    Owner,

    /// Cultivator (text carries the cultivation marker).
    Cultivator,
}

impl OwnershipType {
    /// Get the string value for output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Cultivator => "Cultivator",
        }
    }
}

/// Structured person and ownership fields split out of a cultivator description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedPerson {
    /// Person name, title-cased.
    pub name: String,

    /// Relation keyword followed by the parent's or spouse's name, title-cased.
    pub parentage: String,

    /// Caste, title-cased.
    pub caste: String,

    /// Place of residence, title-cased.
    pub residence: String,

    /// Ownership role. `None` only when the source cell held no text.
    pub ownership_type: Option<OwnershipType>,
}

/// One expanded record per plot reference.
///
/// Field order matches the persisted column order. The ownership type is
/// kept for library consumers but is not part of the persisted columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotRecord {
    #[serde(rename = "Farmer_ID")]
    pub farmer_id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Parentage")]
    pub parentage: String,

    #[serde(rename = "Caste")]
    pub caste: String,

    #[serde(rename = "Residence")]
    pub residence: String,

    #[serde(rename = "Farm_ID")]
    pub farm_id: String,

    #[serde(rename = "Original_Khasra")]
    pub original_khasra: String,

    #[serde(rename = "Khewat")]
    pub khewat: String,

    #[serde(rename = "Khata")]
    pub khata: String,

    #[serde(rename = "Verification_Status")]
    pub verification_status: String,

    #[serde(skip_serializing)]
    pub ownership_type: Option<OwnershipType>,
}

impl PlotRecord {
    /// Persisted column order.
    pub const COLUMNS: [&'static str; 10] = [
        "Farmer_ID",
        "Name",
        "Parentage",
        "Caste",
        "Residence",
        "Farm_ID",
        "Original_Khasra",
        "Khewat",
        "Khata",
        "Verification_Status",
    ];
}

/// Why a row produced no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Cultivator cell absent, blank, or a null placeholder.
    MissingCultivator,

    /// Plot cell held no usable plot reference.
    NoPlotReferences,
}

impl SkipReason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCultivator => "missing cultivator",
            Self::NoPlotReferences => "no plot references",
        }
    }
}

/// Result of processing one source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Nothing to do for this row.
    Skipped(SkipReason),

    /// One record per plot reference, in plot order.
    Produced(Vec<PlotRecord>),

    /// The row could not be read from the source.
    SourceFailure {
        /// 1-based line in the source file, when known.
        line: Option<u64>,
        message: String,
    },
}

impl RowOutcome {
    /// Consume the outcome, yielding produced records (empty otherwise).
    #[must_use]
    pub fn into_records(self) -> Vec<PlotRecord> {
        match self {
            Self::Produced(records) => records,
            Self::Skipped(_) | Self::SourceFailure { .. } => Vec::new(),
        }
    }

    /// Borrow produced records (empty otherwise).
    #[must_use]
    pub fn records(&self) -> &[PlotRecord] {
        match self {
            Self::Produced(records) => records,
            Self::Skipped(_) | Self::SourceFailure { .. } => &[],
        }
    }
}

/// Tally of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows handed to the expander or rejected by the source.
    pub rows_read: usize,

    /// Rows that produced at least one record.
    pub rows_produced: usize,

    /// Rows skipped for a missing cultivator description.
    pub skipped_missing_cultivator: usize,

    /// Rows skipped for lacking plot references.
    pub skipped_no_plots: usize,

    /// Rows the source failed to decode.
    pub rows_failed: usize,

    /// Total records emitted.
    pub records_written: usize,
}

impl RunSummary {
    /// Fold one row outcome into the tally.
    pub fn record(&mut self, outcome: &RowOutcome) {
        self.rows_read += 1;
        match outcome {
            RowOutcome::Produced(records) => {
                self.rows_produced += 1;
                self.records_written += records.len();
            }
            RowOutcome::Skipped(SkipReason::MissingCultivator) => {
                self.skipped_missing_cultivator += 1;
            }
            RowOutcome::Skipped(SkipReason::NoPlotReferences) => self.skipped_no_plots += 1,
            RowOutcome::SourceFailure { .. } => self.rows_failed += 1,
        }
    }

    /// Total rows skipped for any reason.
    #[must_use]
    pub fn rows_skipped(&self) -> usize {
        self.skipped_missing_cultivator + self.skipped_no_plots
    }
}

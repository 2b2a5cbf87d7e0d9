//! Row-to-plot expansion.
//!
//! One source row carries one cultivator description and any number of
//! khasra (plot) references. The expander splits the description once and
//! emits one [`PlotRecord`] per plot, all sharing a farmer identifier.

use rand::Rng;

use crate::config::{is_null_placeholder, ColumnMap, VERIFICATION_STATUS};
use crate::ids::IdGenerator;
use crate::splitting::FieldSplitter;
use crate::types::{PlotRecord, RawRow, RowOutcome, SkipReason};

/// Expands source rows into per-plot records.
pub struct RowExpander<'a> {
    splitter: &'a FieldSplitter,
    columns: ColumnMap,
}

impl RowExpander<'static> {
    /// Expander over the shared LRIS keyword table.
    #[must_use]
    pub fn lris(columns: ColumnMap) -> Self {
        Self::new(FieldSplitter::lris(), columns)
    }
}

impl<'a> RowExpander<'a> {
    /// Create an expander.
    #[must_use]
    pub fn new(splitter: &'a FieldSplitter, columns: ColumnMap) -> Self {
        Self { splitter, columns }
    }

    /// Column keys this expander reads.
    #[must_use]
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Expand one row.
    ///
    /// Rows without a usable cultivator description or without plot
    /// references are skipped, never failed.
    pub fn expand<R: Rng>(&self, row: &RawRow, ids: &mut IdGenerator<R>) -> RowOutcome {
        let Some(cultivator) = row
            .get(&self.columns.cultivator)
            .filter(|text| !is_null_placeholder(text))
        else {
            return RowOutcome::Skipped(SkipReason::MissingCultivator);
        };

        let person = self.splitter.split(cultivator);
        let farmer_id = ids.new_farmer_id();

        let plots = split_plots(row.get(&self.columns.khasra).unwrap_or_default());
        if plots.is_empty() {
            return RowOutcome::Skipped(SkipReason::NoPlotReferences);
        }

        let khewat = row.get(&self.columns.khewat).unwrap_or_default();
        let khata = row.get(&self.columns.khata).unwrap_or_default();

        let records = plots
            .into_iter()
            .map(|plot| PlotRecord {
                farmer_id: farmer_id.clone(),
                name: person.name.clone(),
                parentage: person.parentage.clone(),
                caste: person.caste.clone(),
                residence: person.residence.clone(),
                farm_id: ids.new_farm_id(),
                original_khasra: plot.to_string(),
                khewat: khewat.to_string(),
                khata: khata.to_string(),
                verification_status: VERIFICATION_STATUS.to_string(),
                ownership_type: person.ownership_type,
            })
            .collect();

        RowOutcome::Produced(records)
    }
}

/// Split a khasra cell on newlines and commas into trimmed plot tokens.
///
/// Empty tokens and null placeholders are dropped; order is preserved.
///
/// # Examples
/// ```
/// use lris_parser::expander::split_plots;
///
/// assert_eq!(split_plots("101, 102\n103"), vec!["101", "102", "103"]);
/// assert!(split_plots(" , \n").is_empty());
/// ```
#[must_use]
pub fn split_plots(cell: &str) -> Vec<&str> {
    cell.split(['\n', ','])
        .map(str::trim)
        .filter(|plot| !plot.is_empty() && !is_null_placeholder(plot))
        .collect()
}

//! Main pipeline that ties source, expander and sink together.

use std::path::Path;

use rand::Rng;

use crate::config::{ColumnMap, DEFAULT_SKIP_ROWS};
use crate::error::Result;
use crate::expander::RowExpander;
use crate::ids::{IdGenerator, IdPrefix};
use crate::sink::save_csv;
use crate::source::CsvSource;
use crate::types::{PlotRecord, RawRow, RowOutcome, RunSummary};

/// Options for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Column keys to read.
    pub columns: ColumnMap,

    /// Metadata rows after the header to skip.
    pub skip_rows: usize,

    /// Stop after this many data rows.
    pub limit: Option<usize>,

    /// Identifier prefix.
    pub prefix: IdPrefix,

    /// Seed for reproducible identifiers. Entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            skip_rows: DEFAULT_SKIP_ROWS,
            limit: None,
            prefix: IdPrefix::default(),
            seed: None,
        }
    }
}

/// Expand a sequence of source rows.
///
/// Rows are processed independently; skipped and failed rows are logged
/// and counted, never fatal. Returns the concatenated records in source
/// order together with the run tally.
pub fn expand_rows<I, R>(
    rows: I,
    expander: &RowExpander<'_>,
    ids: &mut IdGenerator<R>,
) -> (Vec<PlotRecord>, RunSummary)
where
    I: IntoIterator<Item = csv::Result<RawRow>>,
    R: Rng,
{
    let mut records = Vec::new();
    let mut summary = RunSummary::default();

    for (index, row) in rows.into_iter().enumerate() {
        let outcome = match row {
            Ok(row) => expander.expand(&row, ids),
            Err(e) => RowOutcome::SourceFailure {
                line: e.position().map(csv::Position::line),
                message: e.to_string(),
            },
        };

        match &outcome {
            RowOutcome::Skipped(reason) => {
                tracing::debug!(row = index, reason = reason.as_str(), "Row skipped");
            }
            RowOutcome::SourceFailure { line, message } => {
                tracing::warn!(row = index, line = ?line, error = %message, "Unreadable row");
            }
            RowOutcome::Produced(produced) => {
                tracing::trace!(row = index, records = produced.len(), "Row expanded");
            }
        }

        summary.record(&outcome);
        records.extend(outcome.into_records());
    }

    (records, summary)
}

/// Process an LRIS export into a CSV of per-plot records.
///
/// # Arguments
/// * `input` - Source CSV export
/// * `output` - Destination CSV file
/// * `options` - Column mapping, identifier prefix and limits
///
/// # Returns
/// The run tally. Fails only when the source cannot be read at all or the
/// output cannot be written.
pub fn process_file(input: &Path, output: &Path, options: &PipelineOptions) -> Result<RunSummary> {
    tracing::info!(input = %input.display(), "Processing land record export");

    let source = CsvSource::open(input, options.skip_rows)?;
    let rows = source.take(options.limit.unwrap_or(usize::MAX));
    let expander = RowExpander::lris(options.columns.clone());

    let (records, summary) = match options.seed {
        Some(seed) => {
            let mut ids = IdGenerator::seeded(options.prefix.clone(), seed);
            expand_rows(rows, &expander, &mut ids)
        }
        None => {
            let mut ids = IdGenerator::from_entropy(options.prefix.clone());
            expand_rows(rows, &expander, &mut ids)
        }
    };

    save_csv(&records, output)?;

    tracing::info!(
        rows = summary.rows_read,
        produced = summary.rows_produced,
        skipped = summary.rows_skipped(),
        failed = summary.rows_failed,
        records = summary.records_written,
        "Pipeline finished"
    );

    Ok(summary)
}

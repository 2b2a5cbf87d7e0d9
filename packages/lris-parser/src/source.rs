//! CSV source reading land record exports into [`RawRow`]s.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::error::{LrisError, Result};
use crate::types::RawRow;

/// Iterator over the data rows of a CSV export.
///
/// The header row supplies column keys. Empty cells become null values.
/// A record that fails to decode is yielded as an `Err` and iteration
/// continues with the next record.
pub struct CsvSource<R: Read> {
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
}

impl CsvSource<File> {
    /// Open a CSV file, skipping `skip_rows` metadata rows after the header.
    ///
    /// Failing to open the file or read its header is fatal.
    pub fn open(path: &Path, skip_rows: usize) -> Result<Self> {
        let reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| LrisError::UnreadableSource {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_csv_reader(reader, skip_rows).map_err(|source| LrisError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<R: Read> CsvSource<R> {
    /// Read CSV from any reader, skipping `skip_rows` metadata rows after the header.
    pub fn from_reader(reader: R, skip_rows: usize) -> csv::Result<Self> {
        let reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::from_csv_reader(reader, skip_rows)
    }

    fn from_csv_reader(mut reader: csv::Reader<R>, skip_rows: usize) -> csv::Result<Self> {
        let headers = reader.headers()?.clone();
        tracing::debug!(columns = headers.len(), skip_rows, "Opened CSV source");

        let mut records = reader.into_records();
        for skipped in records.by_ref().take(skip_rows) {
            if let Err(e) = skipped {
                tracing::debug!(error = %e, "Unreadable metadata row skipped");
            }
        }

        Ok(Self { headers, records })
    }

    /// Column keys from the header row.
    #[must_use]
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    fn to_row(&self, record: &StringRecord) -> RawRow {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let value = record
                    .get(i)
                    .filter(|cell| !cell.is_empty())
                    .map(str::to_string);
                (key, value)
            })
            .collect()
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = csv::Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(record.map(|record| self.to_row(&record)))
    }
}

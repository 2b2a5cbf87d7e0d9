//! CSV output of expanded plot records.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::PlotRecord;

/// Write records as CSV to any writer.
///
/// The header follows [`PlotRecord::COLUMNS`]. Columns absent from every
/// record are left out, so an empty record set writes nothing at all.
pub fn write_records<W: Write>(writer: W, records: &[PlotRecord]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(PlotRecord::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Generate the CSV text for a set of records.
pub fn generate_csv(records: &[PlotRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Save records to a CSV file.
///
/// Writes to a temp file next to the target, then renames it into place.
pub fn save_csv(records: &[PlotRecord], output_file: &Path) -> Result<PathBuf> {
    if let Some(dir) = output_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let file_name = output_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = output_file.with_file_name(format!(".{file_name}.tmp"));

    // Write to temp file first, then sync and rename for atomicity
    {
        let file = File::create(&temp_file)?;
        write_records(&file, records)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;

    tracing::info!(
        path = %output_file.display(),
        records = records.len(),
        "Saved CSV"
    );

    Ok(output_file.to_path_buf())
}

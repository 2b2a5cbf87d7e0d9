//! Command-line interface for the LRIS parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    ColumnMap, DEFAULT_DISTRICT_CODE, DEFAULT_OUTPUT_FILE, DEFAULT_SKIP_ROWS, DEFAULT_STATE_CODE,
};
use crate::error::{LrisError, Result};
use crate::ids::IdPrefix;
use crate::pipeline::{process_file, PipelineOptions};
use crate::splitting::FieldSplitter;

/// LRIS Parser - Split land record cultivator descriptions into AgriStack records.
#[derive(Parser)]
#[command(name = "lris-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a land record CSV export into per-plot records.
    Process {
        /// Input CSV export
        input: PathBuf,

        /// Output CSV file (default: LRIS_Final_Output.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Metadata rows to skip after the header
        #[arg(long, default_value_t = DEFAULT_SKIP_ROWS)]
        skip_rows: usize,

        /// Stop after this many data rows
        #[arg(long)]
        limit: Option<usize>,

        /// Seed for reproducible identifiers
        #[arg(long)]
        seed: Option<u64>,

        /// Two-letter state code for identifiers
        #[arg(long, default_value = DEFAULT_STATE_CODE)]
        state_code: String,

        /// Three-letter district code for farm identifiers
        #[arg(long, default_value = DEFAULT_DISTRICT_CODE)]
        district_code: String,

        /// Column holding the cultivator description
        #[arg(long, default_value = "5")]
        cultivator_column: String,

        /// Column holding khasra references
        #[arg(long, default_value = "7")]
        khasra_column: String,

        /// Column holding the khewat number
        #[arg(long, default_value = "1")]
        khewat_column: String,

        /// Column holding the khata number
        #[arg(long, default_value = "2")]
        khata_column: String,
    },

    /// Split cultivator descriptions and print the parsed fields.
    Split {
        /// Description texts
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            skip_rows,
            limit,
            seed,
            state_code,
            district_code,
            cultivator_column,
            khasra_column,
            khewat_column,
            khata_column,
        } => {
            let options = PipelineOptions {
                columns: ColumnMap::default()
                    .with_cultivator(cultivator_column)
                    .with_khasra(khasra_column)
                    .with_khewat(khewat_column)
                    .with_khata(khata_column),
                skip_rows,
                limit,
                prefix: IdPrefix::new(&state_code, &district_code)?,
                seed,
            };
            let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
            process_command(&input, &output, &options)
        }
        Commands::Split { texts } => {
            split_command(&texts);
            Ok(())
        }
    }
}

/// Execute the process command.
fn process_command(input: &Path, output: &Path, options: &PipelineOptions) -> Result<()> {
    // Validate output directory exists before reading anything
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.is_dir() {
            return Err(LrisError::MissingOutputDir(dir.to_path_buf()));
        }
    }

    println!(
        "{} {}",
        style("Processing").bold(),
        style(input.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Splitting cultivator descriptions...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match process_file(input, output, options) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Rows read: {}", summary.rows_read);
    println!("  Rows expanded: {}", style(summary.rows_produced).green());
    if summary.rows_skipped() > 0 {
        println!("  Rows skipped: {}", style(summary.rows_skipped()).yellow());
    }
    if summary.rows_failed > 0 {
        println!("  Rows unreadable: {}", style(summary.rows_failed).red().bold());
    }
    println!("  Plot records: {}", summary.records_written);

    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}

/// Execute the split command.
fn split_command(texts: &[String]) {
    let splitter = FieldSplitter::lris();
    for text in texts {
        let person = splitter.split(text);
        println!("{}", style(text).cyan());
        println!("  Name: {}", person.name);
        println!("  Parentage: {}", person.parentage);
        println!("  Caste: {}", person.caste);
        println!("  Residence: {}", person.residence);
        println!(
            "  Ownership: {}",
            person.ownership_type.map(|o| o.as_str()).unwrap_or_default()
        );
    }
}

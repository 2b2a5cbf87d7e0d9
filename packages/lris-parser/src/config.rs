//! Configuration constants and validation functions for the LRIS parser.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{LrisError, Result};

/// Default state code (Jammu & Kashmir).
pub const DEFAULT_STATE_CODE: &str = "JK";

/// Default district code (Baramulla).
pub const DEFAULT_DISTRICT_CODE: &str = "BAR";

/// Literal prefix of every farmer identifier.
pub const FARMER_ID_PREFIX: &str = "FID";

/// Number of random digits in a farm identifier, before the checksum digit.
pub const FARM_ID_PAYLOAD_DIGITS: usize = 11;

/// Number of random characters in a farmer identifier suffix.
pub const FARMER_ID_SUFFIX_LEN: usize = 8;

/// Provenance tag attached to every emitted record.
pub const VERIFICATION_STATUS: &str = "AUTO_PARSED";

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "LRIS_Final_Output.csv";

/// Number of metadata rows following the header in a source export.
///
/// The exported sheets carry two sub-header rows (Urdu labels and column
/// numbers) before the first data row.
pub const DEFAULT_SKIP_ROWS: usize = 2;

/// Cell values treated as "no value", compared case-insensitively after trimming.
pub const NULL_PLACEHOLDERS: &[&str] = &["nan", "none", "null", "n/a", "-"];

/// State code pattern: two uppercase ASCII letters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static STATE_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("valid regex"));

/// District code pattern: three uppercase ASCII letters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DISTRICT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid regex"));

/// Validate a state code.
///
/// # Examples
/// ```
/// use lris_parser::config::validate_state_code;
///
/// assert!(validate_state_code("JK").is_ok());
/// assert!(validate_state_code("jk").is_err());
/// ```
pub fn validate_state_code(code: &str) -> Result<()> {
    if STATE_CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(LrisError::InvalidStateCode(code.to_string()))
    }
}

/// Validate a district code.
///
/// # Examples
/// ```
/// use lris_parser::config::validate_district_code;
///
/// assert!(validate_district_code("BAR").is_ok());
/// assert!(validate_district_code("BA").is_err());
/// ```
pub fn validate_district_code(code: &str) -> Result<()> {
    if DISTRICT_CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(LrisError::InvalidDistrictCode(code.to_string()))
    }
}

/// Check whether a cell value is a textual null placeholder or blank.
///
/// # Examples
/// ```
/// use lris_parser::config::is_null_placeholder;
///
/// assert!(is_null_placeholder("  NaN "));
/// assert!(is_null_placeholder("   "));
/// assert!(!is_null_placeholder("hasnan"));
/// ```
#[must_use]
pub fn is_null_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || NULL_PLACEHOLDERS
            .iter()
            .any(|p| trimmed.eq_ignore_ascii_case(p))
}

/// Column keys the expander reads from each row.
///
/// Keys are header labels of the source export. The defaults match the
/// numbered columns of the land record sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    /// Cultivator description (Nam Kashtakar).
    pub cultivator: String,

    /// Plot references (Khasra No).
    pub khasra: String,

    /// Khewat number, copied through.
    pub khewat: String,

    /// Khata number, copied through.
    pub khata: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            cultivator: "5".to_string(),
            khasra: "7".to_string(),
            khewat: "1".to_string(),
            khata: "2".to_string(),
        }
    }
}

impl ColumnMap {
    /// Override the cultivator column key.
    #[must_use]
    pub fn with_cultivator(mut self, key: impl Into<String>) -> Self {
        self.cultivator = key.into();
        self
    }

    /// Override the khasra column key.
    #[must_use]
    pub fn with_khasra(mut self, key: impl Into<String>) -> Self {
        self.khasra = key.into();
        self
    }

    /// Override the khewat column key.
    #[must_use]
    pub fn with_khewat(mut self, key: impl Into<String>) -> Self {
        self.khewat = key.into();
        self
    }

    /// Override the khata column key.
    #[must_use]
    pub fn with_khata(mut self, key: impl Into<String>) -> Self {
        self.khata = key.into();
        self
    }
}

//! AgriStack-style identifier generation.
//!
//! Identifiers are pure random draws from an explicitly passed generator.
//! Nothing is deduplicated or remembered between calls, so uniqueness is
//! probabilistic only.
//!
//! The farm identifier checksum is the digit sum modulo 10. It is not a
//! Verhoeff or Luhn check and does not detect tampering.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    validate_district_code, validate_state_code, DEFAULT_DISTRICT_CODE, DEFAULT_STATE_CODE,
    FARMER_ID_PREFIX, FARMER_ID_SUFFIX_LEN, FARM_ID_PAYLOAD_DIGITS,
};
use crate::error::Result;

/// Alphabet for farmer identifier suffixes.
const FARMER_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Jurisdiction prefix of generated identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPrefix {
    state_code: String,
    district_code: String,
}

impl IdPrefix {
    /// Create a validated prefix.
    pub fn new(state_code: &str, district_code: &str) -> Result<Self> {
        validate_state_code(state_code)?;
        validate_district_code(district_code)?;
        Ok(Self {
            state_code: state_code.to_string(),
            district_code: district_code.to_string(),
        })
    }

    #[must_use]
    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    #[must_use]
    pub fn district_code(&self) -> &str {
        &self.district_code
    }
}

impl Default for IdPrefix {
    fn default() -> Self {
        Self {
            state_code: DEFAULT_STATE_CODE.to_string(),
            district_code: DEFAULT_DISTRICT_CODE.to_string(),
        }
    }
}

/// Generator of farmer and farm identifiers over a random source.
pub struct IdGenerator<R: Rng> {
    prefix: IdPrefix,
    rng: R,
}

impl IdGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(prefix: IdPrefix) -> Self {
        Self::new(prefix, StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible runs.
    #[must_use]
    pub fn seeded(prefix: IdPrefix, seed: u64) -> Self {
        Self::new(prefix, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IdGenerator<R> {
    /// Create a generator over a random source.
    #[must_use]
    pub fn new(prefix: IdPrefix, rng: R) -> Self {
        Self { prefix, rng }
    }

    /// The jurisdiction prefix in use.
    #[must_use]
    pub fn prefix(&self) -> &IdPrefix {
        &self.prefix
    }

    /// Generate a farm identifier: state + district + 11 digits + checksum digit.
    pub fn new_farm_id(&mut self) -> String {
        let digits: Vec<u32> = (0..FARM_ID_PAYLOAD_DIGITS)
            .map(|_| self.rng.gen_range(0..10))
            .collect();
        let check = checksum_digit(&digits);

        let mut id = format!("{}{}", self.prefix.state_code, self.prefix.district_code);
        id.extend(digits.iter().filter_map(|d| char::from_digit(*d, 10)));
        id.extend(char::from_digit(check, 10));
        id
    }

    /// Generate a farmer identifier: `FID-<state>-` + 8 characters from A-Z0-9.
    pub fn new_farmer_id(&mut self) -> String {
        let suffix: String = (0..FARMER_ID_SUFFIX_LEN)
            .map(|_| {
                let idx = self.rng.gen_range(0..FARMER_ID_ALPHABET.len());
                char::from(FARMER_ID_ALPHABET[idx])
            })
            .collect();
        format!("{FARMER_ID_PREFIX}-{}-{suffix}", self.prefix.state_code)
    }
}

/// Digit sum modulo 10.
fn checksum_digit(digits: &[u32]) -> u32 {
    digits.iter().sum::<u32>() % 10
}

/// Check a farm identifier's shape and checksum digit against a prefix.
///
/// # Examples
/// ```
/// use lris_parser::ids::{verify_farm_id, IdPrefix};
///
/// let prefix = IdPrefix::default();
/// assert!(verify_farm_id("JKBAR123456789016", &prefix));
/// assert!(!verify_farm_id("JKBAR123456789010", &prefix));
/// ```
#[must_use]
pub fn verify_farm_id(id: &str, prefix: &IdPrefix) -> bool {
    let Some(rest) = id
        .strip_prefix(prefix.state_code())
        .and_then(|r| r.strip_prefix(prefix.district_code()))
    else {
        return false;
    };

    let digits: Vec<u32> = rest.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != FARM_ID_PAYLOAD_DIGITS + 1 || rest.chars().count() != digits.len() {
        return false;
    }

    let (payload, check) = digits.split_at(FARM_ID_PAYLOAD_DIGITS);
    check.first() == Some(&checksum_digit(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_id_prefix_validation() {
        assert!(IdPrefix::new("JK", "BAR").is_ok());
        assert!(IdPrefix::new("jk", "BAR").is_err());
        assert!(IdPrefix::new("JK", "BARA").is_err());
    }

    #[test]
    fn test_farm_id_shape_and_checksum() {
        let pattern = Regex::new(r"^[A-Z]{2}[A-Z]{3}\d{11}\d$").unwrap();
        let mut ids = IdGenerator::seeded(IdPrefix::default(), 42);

        for _ in 0..200 {
            let id = ids.new_farm_id();
            assert!(pattern.is_match(&id), "bad shape: {id}");
            assert!(id.starts_with("JKBAR"));

            let digits: Vec<u32> = id[5..].chars().map(|c| c.to_digit(10).unwrap()).collect();
            let sum: u32 = digits[..11].iter().sum();
            assert_eq!(digits[11], sum % 10, "bad checksum: {id}");
            assert!(verify_farm_id(&id, ids.prefix()));
        }
    }

    #[test]
    fn test_farmer_id_shape() {
        let pattern = Regex::new(r"^FID-JK-[A-Z0-9]{8}$").unwrap();
        let mut ids = IdGenerator::seeded(IdPrefix::default(), 7);

        for _ in 0..200 {
            let id = ids.new_farmer_id();
            assert!(pattern.is_match(&id), "bad shape: {id}");
        }
    }

    #[test]
    fn test_custom_prefix() {
        let prefix = IdPrefix::new("PB", "LDH").unwrap();
        let mut ids = IdGenerator::seeded(prefix, 1);

        assert!(ids.new_farm_id().starts_with("PBLDH"));
        assert!(ids.new_farmer_id().starts_with("FID-PB-"));
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let mut a = IdGenerator::seeded(IdPrefix::default(), 99);
        let mut b = IdGenerator::seeded(IdPrefix::default(), 99);

        assert_eq!(a.new_farmer_id(), b.new_farmer_id());
        assert_eq!(a.new_farm_id(), b.new_farm_id());
    }

    #[test]
    fn test_verify_farm_id_rejects_malformed() {
        let prefix = IdPrefix::default();
        assert!(!verify_farm_id("", &prefix));
        assert!(!verify_farm_id("PBBAR123456789015", &prefix)); // Wrong state
        assert!(!verify_farm_id("JKBAR12345678901", &prefix)); // Too short
        assert!(!verify_farm_id("JKBAR1234567890165", &prefix)); // Too long
        assert!(!verify_farm_id("JKBAR12345678A015", &prefix)); // Non-digit
    }

    #[test]
    fn test_checksum_digit() {
        assert_eq!(checksum_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]), 6);
        assert_eq!(checksum_digit(&[0; 11]), 0);
        assert_eq!(checksum_digit(&[9; 11]), 9);
    }
}

//! Text normalization helpers for field splitting.

use unicode_normalization::UnicodeNormalization;

/// Normalize raw cell text: NFC, lower-case, trimmed.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase().trim().to_string()
}

/// Collapse whitespace runs into single spaces and trim the ends.
///
/// Keyword removal leaves double spaces behind ("abdul  rahim").
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Title-case text.
///
/// A cased letter following a non-cased character is upper-cased, every
/// other cased letter is lower-cased. Word boundaries are any uncased
/// character, so `s/o rahim` becomes `S/O Rahim`.
///
/// # Examples
/// ```
/// use lris_parser::splitting::title_case;
///
/// assert_eq!(title_case("lower town"), "Lower Town");
/// assert_eq!(title_case("s/o rahim"), "S/O Rahim");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !previous_cased {
            result.extend(c.to_uppercase());
        } else if cased {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        previous_cased = cased;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Kasht ABDUL  "), "kasht abdul");
        assert_eq!(normalize("\tS/O Rahim\n"), "s/o rahim");
    }

    #[test]
    fn test_normalize_composes() {
        // "e" + combining acute accent composes to a single "é"
        assert_eq!(normalize("Re\u{301}sume\u{301}"), "r\u{e9}sum\u{e9}");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  abdul   rahim "), "abdul rahim");
        assert_eq!(collapse_whitespace("a\n\tb"), "a b");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("abdul"), "Abdul");
        assert_eq!(title_case("MOHD ALI"), "Mohd Ali");
        assert_eq!(title_case("w/o karim"), "W/O Karim");
        assert_eq!(title_case("ghulam-nabi"), "Ghulam-Nabi");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_digits_break_words() {
        // Digits are uncased, so the letter after them starts a new word
        assert_eq!(title_case("ward 2nd"), "Ward 2Nd");
    }

    #[test]
    fn test_title_case_uncased_script() {
        // Urdu script has no case and passes through untouched
        assert_eq!(title_case("عبدل s/o"), "عبدل S/O");
    }
}

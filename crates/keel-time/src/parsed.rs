//! The result record of a successful parse.

use chrono::NaiveDate;

/// A normalized date together with the pattern that produced it and
/// whether that pattern is ambiguous across regional conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedDate {
    date: NaiveDate,
    pattern: &'static str,
    ambiguous: bool,
}

impl ParsedDate {
    /// Bundle a parse result.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is empty; a parse result always comes from a
    /// registered pattern.
    #[must_use]
    pub fn new(date: NaiveDate, pattern: &'static str, ambiguous: bool) -> Self {
        assert!(!pattern.is_empty(), "pattern id must not be empty");
        Self {
            date,
            pattern,
            ambiguous,
        }
    }

    /// The normalized calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The id of the pattern that matched.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Whether the matching pattern reads differently under day-first and
    /// month-first conventions.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.ambiguous
    }

    /// Human-readable summary, for logs and diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.ambiguous {
            format!("{} (pattern {}, ambiguous)", self.date, self.pattern)
        } else {
            format!("{} (pattern {})", self.date, self.pattern)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_accessors() {
        let parsed = ParsedDate::new(date(2024, 2, 1), "dd/MM/yyyy", true);
        assert_eq!(parsed.date(), date(2024, 2, 1));
        assert_eq!(parsed.pattern(), "dd/MM/yyyy");
        assert!(parsed.is_ambiguous());
    }

    #[test]
    fn test_describe_flags_ambiguity() {
        let ambiguous = ParsedDate::new(date(2024, 2, 1), "dd/MM/yyyy", true);
        assert_eq!(ambiguous.describe(), "2024-02-01 (pattern dd/MM/yyyy, ambiguous)");

        let exact = ParsedDate::new(date(2024, 2, 1), "yyyy-MM-dd", false);
        assert_eq!(exact.describe(), "2024-02-01 (pattern yyyy-MM-dd)");
    }

    #[test]
    #[should_panic(expected = "pattern id must not be empty")]
    fn test_empty_pattern_panics() {
        let _ = ParsedDate::new(date(2024, 1, 1), "", false);
    }
}

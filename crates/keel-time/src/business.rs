//! Day-level helpers for business code.
//!
//! These helpers deliberately never fail: an input that cannot be
//! resolved falls back to the current moment (or a neutral answer for
//! the predicates), with the dropped error reported at debug level.
//! Callers that need the failure use the conversion layer directly.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};

use crate::convert::{DateInput, to_civil_date};
use crate::pattern::to_strftime;

// ============================================================================
// FORMATTING
// ============================================================================

/// A temporal value the formatter can render.
pub trait Temporal {
    /// Render with an strftime pattern; `None` when the pattern does not
    /// apply to this value.
    fn try_format(&self, strftime: &str) -> Option<String>;

    /// Default rendering used when a pattern cannot be applied.
    fn fallback_text(&self) -> String;
}

macro_rules! impl_temporal {
    ($($ty:ty),* $(,)?) => {$(
        impl Temporal for $ty {
            fn try_format(&self, strftime: &str) -> Option<String> {
                use std::fmt::Write;
                let mut out = String::new();
                // A pattern token the value has no field for surfaces as a
                // fmt error here instead of a panic.
                write!(out, "{}", self.format(strftime)).ok()?;
                Some(out)
            }

            fn fallback_text(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_temporal!(
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
    DateTime<Local>,
    DateTime<FixedOffset>,
);

/// Render a temporal value with a letter-token pattern.
///
/// Total: an absent value yields empty text, and a pattern that cannot
/// be translated or applied falls back to the value's default rendering.
pub fn format<T: Temporal>(value: Option<&T>, pattern: &str) -> String {
    let Some(value) = value else {
        return String::new();
    };
    to_strftime(pattern)
        .and_then(|strftime| value.try_format(&strftime))
        .unwrap_or_else(|| value.fallback_text())
}

// ============================================================================
// DAY-LEVEL HELPERS
// ============================================================================

/// Resolve to a date, substituting today when the input cannot be read.
fn resolve_date(input: impl Into<DateInput>) -> NaiveDate {
    to_civil_date(input)
        .peek_err(|e| tracing::debug!(error = %e, "unresolvable date input, substituting today"))
        .get_or_else_with(|| Local::now().date_naive())
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).expect("valid constant time")
}

/// The input's day at midnight.
pub fn at_start_of_day(input: impl Into<DateInput>) -> NaiveDateTime {
    resolve_date(input).and_time(NaiveTime::MIN)
}

/// The input's day at the last representable nanosecond.
pub fn at_end_of_day(input: impl Into<DateInput>) -> NaiveDateTime {
    resolve_date(input).and_time(end_of_day())
}

/// The input's day at a wall-clock time written as `HH` or `HH:mm`.
///
/// Unreadable or out-of-range time text falls back to midnight.
pub fn with_time(input: impl Into<DateInput>, time: &str) -> NaiveDateTime {
    let date = resolve_date(input);
    date.and_time(parse_wall_time(time).unwrap_or(NaiveTime::MIN))
}

fn parse_wall_time(text: &str) -> Option<NaiveTime> {
    let mut parts = text.trim().split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Whether the input falls on a Saturday or Sunday. Unresolvable input
/// answers `false`.
pub fn is_weekend(input: impl Into<DateInput>) -> bool {
    to_civil_date(input)
        .map(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .get_or_else(false)
}

/// Whether the input falls on a weekday. Unresolvable input answers
/// `true`, mirroring [`is_weekend`].
pub fn is_business_day(input: impl Into<DateInput>) -> bool {
    !is_weekend(input)
}

/// Whole days between two inputs, as a distance.
///
/// Symmetric in its arguments; any unresolvable side makes the answer 0.
pub fn days_between(a: impl Into<DateInput>, b: impl Into<DateInput>) -> i64 {
    to_civil_date(a)
        .zip(to_civil_date(b), |a, b| (a - b).num_days().abs())
        .get_or_else(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_with_patterns() {
        let d = date(2024, 3, 15);
        assert_eq!(format(Some(&d), "dd/MM/yyyy"), "15/03/2024");
        assert_eq!(format(Some(&d), "yyyy-MM-dd"), "2024-03-15");

        let dt = d.and_hms_opt(10, 30, 5).unwrap();
        assert_eq!(format(Some(&dt), "yyyy-MM-dd HH:mm:ss"), "2024-03-15 10:30:05");
    }

    #[test]
    fn test_format_absent_value_is_empty() {
        assert_eq!(format::<NaiveDate>(None, "yyyy-MM-dd"), "");
    }

    #[test]
    fn test_format_falls_back_on_bad_patterns() {
        let d = date(2024, 3, 15);
        // Untranslatable token.
        assert_eq!(format(Some(&d), "QQ-yyyy"), "2024-03-15");
        // Time token on a date-only value.
        assert_eq!(format(Some(&d), "yyyy-MM-dd HH:mm"), "2024-03-15");
    }

    #[test]
    fn test_day_boundaries() {
        let start = at_start_of_day("2024-03-15");
        assert_eq!(start, date(2024, 3, 15).and_hms_opt(0, 0, 0).unwrap());

        let end = at_end_of_day("2024-03-15");
        assert_eq!(end.date(), date(2024, 3, 15));
        assert_eq!(
            end.time(),
            NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap()
        );
    }

    #[test]
    fn test_unresolvable_input_substitutes_today() {
        let today = Local::now().date_naive();
        assert_eq!(at_start_of_day("not a date").date(), today);
    }

    #[test]
    fn test_with_time_variants() {
        let d = date(2024, 3, 15);
        assert_eq!(with_time(d, "14:30"), d.and_hms_opt(14, 30, 0).unwrap());
        assert_eq!(with_time(d, "9"), d.and_hms_opt(9, 0, 0).unwrap());
        // Unreadable or out-of-range time falls back to midnight.
        assert_eq!(with_time(d, "nope"), d.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(with_time(d, "25:00"), d.and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_weekend_predicates() {
        // 2024-03-16 is a Saturday, 2024-03-18 a Monday.
        assert!(is_weekend(date(2024, 3, 16)));
        assert!(is_weekend(date(2024, 3, 17)));
        assert!(!is_weekend(date(2024, 3, 18)));

        assert!(is_business_day(date(2024, 3, 18)));
        assert!(!is_business_day(date(2024, 3, 16)));

        // Unresolvable input is not a weekend.
        assert!(!is_weekend("garbage"));
        assert!(is_business_day("garbage"));
    }

    #[test]
    fn test_days_between_is_symmetric() {
        let a = date(2024, 3, 1);
        let b = date(2024, 3, 15);
        assert_eq!(days_between(a, b), 14);
        assert_eq!(days_between(b, a), 14);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_days_between_with_text_inputs() {
        assert_eq!(days_between("2024-03-01", "15/03/2024"), 14);
        // Any unresolvable side answers zero.
        assert_eq!(days_between("garbage", "2024-03-15"), 0);
    }
}

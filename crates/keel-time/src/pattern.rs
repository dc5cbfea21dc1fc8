//! Pattern registry and multi-format analysis.
//!
//! Patterns are tried in registry order and the first match wins, so
//! ordering encodes precedence: exact ISO shapes first, then the
//! regional human-entry shapes. Pattern ids use the conventional
//! letter-token notation (`yyyy`, `MM`, `dd`, `HH`, `mm`, `ss`).

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{TimeError, TimeOutcome};
use crate::parsed::ParsedDate;

// ============================================================================
// PATTERNS
// ============================================================================

/// How out-of-range calendar fields are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Proleptic-calendar validation; `2023-02-29` is rejected.
    Strict,
    /// Human-entry resolution; a day past the end of the month is clamped
    /// to the month's last day.
    Lenient,
}

/// One entry of the recognition table.
#[derive(Debug, Clone, Copy)]
pub struct DatePattern {
    id: &'static str,
    resolution: Resolution,
}

/// The recognition table, in trial order.
pub static PATTERNS: &[DatePattern] = &[
    DatePattern::strict("yyyy-MM-dd'T'HH:mm:ss"),
    DatePattern::strict("yyyy-MM-dd"),
    DatePattern::lenient("dd/MM/yyyy"),
    DatePattern::lenient("MM/dd/yyyy"),
    DatePattern::lenient("dd-MM-yyyy"),
    DatePattern::lenient("yyyy/MM/dd"),
    DatePattern::lenient("dd.MM.yyyy"),
];

impl DatePattern {
    const fn strict(id: &'static str) -> Self {
        Self {
            id,
            resolution: Resolution::Strict,
        }
    }

    const fn lenient(id: &'static str) -> Self {
        Self {
            id,
            resolution: Resolution::Lenient,
        }
    }

    /// Pattern id in letter-token notation.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Field-resolution mode of this pattern.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Whether the pattern reads differently under day-first and
    /// month-first conventions. `01/02/2024` is February 1st here and
    /// January 2nd elsewhere; the shape alone cannot tell.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.id.contains("dd/MM") || self.id.contains("MM/dd")
    }

    /// Try this single pattern against `text`, yielding the calendar date
    /// on a match. Time-of-day fields, when present, are parsed and then
    /// discarded.
    #[must_use]
    pub fn try_parse(&self, text: &str) -> Option<NaiveDate> {
        match self.resolution {
            Resolution::Strict => self.parse_strict(text),
            Resolution::Lenient => self.parse_lenient(text),
        }
    }

    fn parse_strict(&self, text: &str) -> Option<NaiveDate> {
        let strftime = to_strftime(self.id)?;
        if strftime.contains("%H") {
            NaiveDateTime::parse_from_str(text, &strftime)
                .ok()
                .map(|dt| dt.date())
        } else {
            NaiveDate::parse_from_str(text, &strftime).ok()
        }
    }

    fn parse_lenient(&self, text: &str) -> Option<NaiveDate> {
        let separator = self.id.chars().find(|c| !c.is_ascii_alphabetic())?;

        let tokens: Vec<&str> = self.id.split(separator).collect();
        let fields: Vec<&str> = text.split(separator).collect();
        if tokens.len() != fields.len() {
            return None;
        }

        let mut year: Option<i32> = None;
        let mut month: Option<u32> = None;
        let mut day: Option<u32> = None;
        for (token, field) in tokens.iter().zip(&fields) {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            match *token {
                // Human entry drops leading zeroes, so one digit is fine.
                "dd" if field.len() <= 2 => day = field.parse().ok(),
                "MM" if field.len() <= 2 => month = field.parse().ok(),
                "yyyy" if field.len() == 4 => year = field.parse().ok(),
                _ => return None,
            }
        }

        let (year, month, day) = (year?, month?, day?);
        if !(1..=12).contains(&month) || day == 0 {
            return None;
        }
        let day = day.min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ============================================================================
// TOKEN TRANSLATION
// ============================================================================

/// Translate a letter-token pattern into strftime notation.
///
/// Returns `None` when the pattern contains a letter token outside the
/// supported set, leaving the caller to fall back.
#[must_use]
pub(crate) fn to_strftime(pattern: &str) -> Option<String> {
    const TOKENS: &[(&str, &str)] = &[
        ("yyyy", "%Y"),
        ("HH", "%H"),
        ("MM", "%m"),
        ("dd", "%d"),
        ("mm", "%M"),
        ("ss", "%S"),
    ];

    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    'outer: while let Some(c) = rest.chars().next() {
        if c == '\'' {
            // Quoted literal; '' inside is an escaped quote.
            let body = &rest[1..];
            let Some(end) = body.find('\'') else {
                return None;
            };
            for lc in body[..end].chars() {
                push_literal(&mut out, lc);
            }
            if body[..end].is_empty() {
                out.push('\'');
            }
            rest = &body[end + 1..];
            continue;
        }
        if c.is_ascii_alphabetic() {
            for (token, strftime) in TOKENS {
                if let Some(tail) = rest.strip_prefix(token) {
                    out.push_str(strftime);
                    rest = tail;
                    continue 'outer;
                }
            }
            return None;
        }
        push_literal(&mut out, c);
        rest = &rest[c.len_utf8()..];
    }
    Some(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

// ============================================================================
// ANALYSIS
// ============================================================================

/// Run `text` through the recognition table and report the first match
/// along with its pattern and ambiguity.
///
/// Input is trimmed first; blank input fails with its own error so
/// callers can distinguish "nothing given" from "nothing matched".
pub fn analyze(text: &str) -> TimeOutcome<ParsedDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return TimeOutcome::err(TimeError::EmptyInput);
    }
    for pattern in PATTERNS {
        if let Some(date) = pattern.try_parse(trimmed) {
            tracing::trace!(input = trimmed, pattern = pattern.id(), "date pattern matched");
            return TimeOutcome::ok(ParsedDate::new(date, pattern.id(), pattern.is_ambiguous()));
        }
    }
    tracing::debug!(input = trimmed, "no date pattern matched");
    TimeOutcome::err(TimeError::unparseable(trimmed))
}

/// [`analyze`], keeping only the normalized date.
pub fn smart_parse(text: &str) -> TimeOutcome<NaiveDate> {
    analyze(text).map(|parsed| parsed.date())
}

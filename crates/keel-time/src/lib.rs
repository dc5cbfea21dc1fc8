//! Multi-format date normalization and universal temporal conversion.
//!
//! Date text arrives in many regional shapes; this crate recognizes them
//! through an ordered pattern registry, reports when a match is ambiguous
//! across conventions, and converts heterogeneous temporal inputs into
//! the chrono civil and timeline types. Failures travel through
//! [`keel_outcome::Outcome`] rather than panics.
//!
//! # Examples
//!
//! ```
//! use keel_time::{analyze, to_civil_date};
//!
//! let parsed = analyze("01/02/2024").unwrap();
//! assert_eq!(parsed.date().to_string(), "2024-02-01");
//! assert!(parsed.is_ambiguous());
//!
//! let date = to_civil_date(1_710_504_000_000_i64).unwrap();
//! assert_eq!(date.to_string(), "2024-03-15");
//! ```

pub mod business;
pub mod convert;
pub mod error;
pub mod parsed;
pub mod pattern;

pub use business::{
    Temporal, at_end_of_day, at_start_of_day, days_between, format, is_business_day, is_weekend,
    with_time,
};
pub use convert::{
    CalendarFields, DateInput, DayStamp, to_civil_date, to_civil_date_time, to_utc, to_zoned,
};
pub use error::{TimeError, TimeOutcome};
pub use parsed::ParsedDate;
pub use pattern::{DatePattern, PATTERNS, Resolution, analyze, smart_parse};

/// Common imports for working with the normalizer.
pub mod prelude {
    pub use crate::convert::{DateInput, to_civil_date, to_civil_date_time, to_utc, to_zoned};
    pub use crate::error::{TimeError, TimeOutcome};
    pub use crate::parsed::ParsedDate;
    pub use crate::pattern::{analyze, smart_parse};
}

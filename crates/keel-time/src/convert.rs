//! Universal conversion from heterogeneous temporal inputs.
//!
//! Every conversion accepts anything that coerces into [`DateInput`] and
//! reports failure through the outcome type instead of panicking. Epoch
//! milliseconds are read on the UTC timeline; instants are projected into
//! the local zone, matching how each kind is usually produced.

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

use crate::error::{TimeError, TimeOutcome};
use crate::pattern::smart_parse;

// ============================================================================
// INPUT KINDS
// ============================================================================

/// Civil date and time-of-day fields captured from a calendar-style
/// source, with no zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarFields {
    /// Date-only fields; the time-of-day is midnight.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Add a time-of-day to the fields.
    #[must_use]
    pub fn with_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    fn to_date(self) -> Result<NaiveDate, TimeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            TimeError::conversion(format!(
                "no such calendar date: {:04}-{:02}-{:02}",
                self.year, self.month, self.day
            ))
        })
    }

    fn to_date_time(self) -> Result<NaiveDateTime, TimeError> {
        let date = self.to_date()?;
        date.and_hms_opt(self.hour, self.minute, self.second)
            .ok_or_else(|| {
                TimeError::conversion(format!(
                    "no such time of day: {:02}:{:02}:{:02}",
                    self.hour, self.minute, self.second
                ))
            })
    }
}

/// A day-precision stamp: a calendar day with no time-of-day component.
///
/// Kept distinct from [`DateInput::Instant`] so that conversion never
/// routes it through a timeline projection, which could land on the
/// neighboring day in another zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayStamp(NaiveDate);

impl DayStamp {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar day, read directly.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// The input kinds the conversions understand.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DateInput {
    /// A civil date with no time or zone.
    CivilDate(NaiveDate),
    /// A civil date and time with no zone.
    CivilDateTime(NaiveDateTime),
    /// A date and time pinned to an offset.
    Zoned(DateTime<FixedOffset>),
    /// Raw calendar fields.
    Calendar(CalendarFields),
    /// A day-precision stamp.
    DayStamp(DayStamp),
    /// A point on the timeline.
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch, read in UTC.
    EpochMillis(i64),
    /// Date text, resolved through the pattern registry.
    Text(String),
}

impl DateInput {
    /// Kind name, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CivilDate(_) => "civil date",
            Self::CivilDateTime(_) => "civil date-time",
            Self::Zoned(_) => "zoned date-time",
            Self::Calendar(_) => "calendar fields",
            Self::DayStamp(_) => "day stamp",
            Self::Instant(_) => "instant",
            Self::EpochMillis(_) => "epoch millis",
            Self::Text(_) => "text",
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::CivilDate(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        Self::CivilDateTime(dt)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(zdt: DateTime<FixedOffset>) -> Self {
        Self::Zoned(zdt)
    }
}

impl From<CalendarFields> for DateInput {
    fn from(fields: CalendarFields) -> Self {
        Self::Calendar(fields)
    }
}

impl From<DayStamp> for DateInput {
    fn from(stamp: DayStamp) -> Self {
        Self::DayStamp(stamp)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(instant: DateTime<Local>) -> Self {
        Self::Instant(instant.with_timezone(&Utc))
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        Self::EpochMillis(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Convert any supported input to a civil date.
///
/// The day-stamp arm reads the calendar day directly and must stay ahead
/// of the instant arm: projecting a day stamp onto the timeline and back
/// can shift it to the neighboring day.
pub fn to_civil_date(input: impl Into<DateInput>) -> TimeOutcome<NaiveDate> {
    let input = input.into();
    let result = match &input {
        DateInput::CivilDate(date) => Ok(*date),
        DateInput::CivilDateTime(dt) => Ok(dt.date()),
        DateInput::Zoned(zdt) => Ok(zdt.date_naive()),
        DateInput::DayStamp(stamp) => Ok(stamp.date()),
        DateInput::Instant(instant) => Ok(instant.with_timezone(&Local).date_naive()),
        DateInput::Calendar(fields) => fields.to_date(),
        DateInput::EpochMillis(millis) => epoch_to_utc(*millis).map(|dt| dt.date_naive()),
        DateInput::Text(text) => return smart_parse(text),
    };
    result.into()
}

/// Convert any supported input to a civil date and time.
///
/// Date-only kinds land at the start of the day; text resolves through
/// the pattern registry first.
pub fn to_civil_date_time(input: impl Into<DateInput>) -> TimeOutcome<NaiveDateTime> {
    let input = input.into();
    let result = match &input {
        DateInput::CivilDateTime(dt) => Ok(*dt),
        DateInput::Zoned(zdt) => Ok(zdt.naive_local()),
        DateInput::DayStamp(stamp) => Ok(stamp.date().and_time(NaiveTime::MIN)),
        DateInput::Instant(instant) => Ok(instant.with_timezone(&Local).naive_local()),
        DateInput::Calendar(fields) => fields.to_date_time(),
        DateInput::EpochMillis(millis) => epoch_to_utc(*millis).map(|dt| dt.naive_utc()),
        DateInput::CivilDate(date) => Ok(date.and_time(NaiveTime::MIN)),
        DateInput::Text(text) => {
            return smart_parse(text).map(|date| date.and_time(NaiveTime::MIN));
        }
    };
    result.into()
}

/// Convert any supported input to a date-time at the given offset.
pub fn to_zoned(
    input: impl Into<DateInput>,
    offset: FixedOffset,
) -> TimeOutcome<DateTime<FixedOffset>> {
    to_civil_date_time(input).flat_map(|dt| {
        offset
            .from_local_datetime(&dt)
            .single()
            .ok_or_else(|| TimeError::conversion(format!("{dt} is not representable at {offset}")))
            .into()
    })
}

/// Convert any supported input to an instant on the UTC timeline.
pub fn to_utc(input: impl Into<DateInput>) -> TimeOutcome<DateTime<Utc>> {
    to_civil_date_time(input).map(|dt| dt.and_utc())
}

fn epoch_to_utc(millis: i64) -> Result<DateTime<Utc>, TimeError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| TimeError::conversion(format!("epoch millis out of range: {millis}")))
}

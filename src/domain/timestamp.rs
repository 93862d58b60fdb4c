// ============================================================================
// Timestamp Domain Model
// Tagged calendar value: date-only, naive datetime, or offset datetime
// ============================================================================

use crate::engine::{RoundError, RoundResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calendar timestamp in one of three shapes.
///
/// The shape is part of the value: operations never mix shapes and never
/// coerce one into another. A rounded `Date` is a `Date`, a rounded `Zoned`
/// keeps its UTC offset.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use dtround::prelude::*;
///
/// let day = Timestamp::from(NaiveDate::from_ymd_opt(2048, 4, 16).unwrap());
/// assert!(day.is_date_only());
/// assert_eq!(day.to_string(), "2048-04-16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Timestamp {
    /// Date-only value with day resolution
    Date(NaiveDate),
    /// Date and time-of-day without an offset
    Naive(NaiveDateTime),
    /// Date and time-of-day with a fixed UTC offset
    Zoned(DateTime<FixedOffset>),
}

// ============================================================================
// Duration Plumbing
// ============================================================================

pub(crate) const NANOS_PER_SEC: i128 = 1_000_000_000;
pub(crate) const NANOS_PER_DAY: i128 = 86_400 * NANOS_PER_SEC;

/// Exact total nanoseconds of a `TimeDelta`, without precision loss.
pub(crate) fn delta_total_nanos(delta: TimeDelta) -> i128 {
    delta.num_seconds() as i128 * NANOS_PER_SEC + delta.subsec_nanos() as i128
}

impl Timestamp {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// The calendar date component, for any shape.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        match self {
            Timestamp::Date(d) => *d,
            Timestamp::Naive(dt) => dt.date(),
            Timestamp::Zoned(dt) => dt.date_naive(),
        }
    }

    /// The time-of-day component, `None` for date-only values.
    #[inline]
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Timestamp::Date(_) => None,
            Timestamp::Naive(dt) => Some(dt.time()),
            Timestamp::Zoned(dt) => Some(dt.time()),
        }
    }

    /// The UTC offset, `None` unless the value is `Zoned`.
    #[inline]
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Timestamp::Zoned(dt) => Some(*dt.offset()),
            _ => None,
        }
    }

    /// Whether this is a date-only value.
    #[inline]
    pub fn is_date_only(&self) -> bool {
        matches!(self, Timestamp::Date(_))
    }

    /// Variant name for diagnostics.
    #[inline]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Timestamp::Date(_) => "date",
            Timestamp::Naive(_) => "naive datetime",
            Timestamp::Zoned(_) => "zoned datetime",
        }
    }

    /// Whether `other` has the same shape as `self`.
    #[inline]
    pub fn same_variant(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// The default reference point: the Unix epoch in the same shape as
    /// `self`. A `Zoned` value gets 1970-01-01T00:00:00 on its own local
    /// clock, so elapsed time against the default base is offset-neutral.
    pub fn epoch(&self) -> Self {
        let origin = NaiveDate::from_ymd_opt(1970, 1, 1)
            .expect("the Unix epoch is a representable date")
            .and_time(NaiveTime::MIN);
        match self {
            Timestamp::Date(_) => Timestamp::Date(origin.date()),
            Timestamp::Naive(_) => Timestamp::Naive(origin),
            Timestamp::Zoned(dt) => {
                let offset = *dt.offset();
                Timestamp::Zoned(DateTime::from_naive_utc_and_offset(origin - offset, offset))
            },
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Elapsed time from `other` to `self`.
    ///
    /// For `Date` values this is a whole number of days; for `Zoned` values
    /// it is the difference between instants, so two values with different
    /// offsets subtract correctly.
    ///
    /// # Errors
    /// Returns `VariantMismatch` when the shapes differ.
    pub fn checked_sub(&self, other: &Self) -> RoundResult<TimeDelta> {
        match (self, other) {
            (Timestamp::Date(a), Timestamp::Date(b)) => Ok(a.signed_duration_since(*b)),
            (Timestamp::Naive(a), Timestamp::Naive(b)) => Ok(a.signed_duration_since(*b)),
            (Timestamp::Zoned(a), Timestamp::Zoned(b)) => Ok(a.signed_duration_since(*b)),
            _ => Err(RoundError::VariantMismatch),
        }
    }

    /// `self` advanced by `delta`, staying in the same shape.
    ///
    /// A `Date` advances by the whole days of `delta`; fractional days are
    /// dropped toward negative infinity, matching day resolution.
    ///
    /// # Errors
    /// Returns `OutOfRange` when the result is outside chrono's range.
    pub fn checked_add(&self, delta: TimeDelta) -> RoundResult<Self> {
        match self {
            Timestamp::Date(d) => {
                let days = delta_total_nanos(delta).div_euclid(NANOS_PER_DAY);
                let days = i64::try_from(days).map_err(|_| RoundError::OutOfRange)?;
                let delta = TimeDelta::try_days(days).ok_or(RoundError::OutOfRange)?;
                d.checked_add_signed(delta)
                    .map(Timestamp::Date)
                    .ok_or(RoundError::OutOfRange)
            },
            Timestamp::Naive(dt) => dt
                .checked_add_signed(delta)
                .map(Timestamp::Naive)
                .ok_or(RoundError::OutOfRange),
            Timestamp::Zoned(dt) => dt
                .checked_add_signed(delta)
                .map(Timestamp::Zoned)
                .ok_or(RoundError::OutOfRange),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<NaiveDate> for Timestamp {
    #[inline]
    fn from(value: NaiveDate) -> Self {
        Timestamp::Date(value)
    }
}

impl From<NaiveDateTime> for Timestamp {
    #[inline]
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    #[inline]
    fn from(value: DateTime<FixedOffset>) -> Self {
        Timestamp::Zoned(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    #[inline]
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp::Zoned(value.fixed_offset())
    }
}

// Ordering is partial: values of different shapes do not compare.
impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Timestamp::Date(a), Timestamp::Date(b)) => Some(a.cmp(b)),
            (Timestamp::Naive(a), Timestamp::Naive(b)) => Some(a.cmp(b)),
            (Timestamp::Zoned(a), Timestamp::Zoned(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Timestamp::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Timestamp::Zoned(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f%:z")),
        }
    }
}

impl FromStr for Timestamp {
    type Err = RoundError;

    /// Parse an ISO-8601 string into the most specific matching shape.
    ///
    /// # Examples
    /// - "2048-04-16" -> `Date`
    /// - "2048-04-16T08:32:02.065536" -> `Naive`
    /// - "2048-04-16T08:32:02+09:00" -> `Zoned`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(zoned) = DateTime::parse_from_rfc3339(s) {
            return Ok(Timestamp::Zoned(zoned));
        }
        if let Ok(naive) = s.parse::<NaiveDateTime>() {
            return Ok(Timestamp::Naive(naive));
        }
        if let Ok(date) = s.parse::<NaiveDate>() {
            return Ok(Timestamp::Date(date));
        }
        Err(RoundError::InvalidInput)
    }
}

// ============================================================================
// Tests
// ============================================================================

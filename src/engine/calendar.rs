// ============================================================================
// Calendar Boundaries
// First-day-of-month / first-day-of-year helpers for anchoring grids
// ============================================================================

use crate::domain::Timestamp;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// The first day of `dt`'s month, in `dt`'s shape.
///
/// Time-of-day is reset to midnight for the datetime shapes; a zoned value
/// keeps its offset. These helpers exist to anchor grids at calendar
/// boundaries, e.g. weeks counted from the 1st of the month:
///
/// ```rust
/// use dtround::prelude::*;
/// use dtround::TimeDelta;
///
/// let dt: Timestamp = "2048-04-16T08:32:00".parse()?;
/// let base = first_day_of_month(dt);
/// assert_eq!(base.to_string(), "2048-04-01T00:00:00");
///
/// let week = floor(dt, TimeDelta::days(7), Some(base))?;
/// assert_eq!(week.to_string(), "2048-04-15T00:00:00");
/// # Ok::<(), RoundError>(())
/// ```
pub fn first_day_of_month(dt: Timestamp) -> Timestamp {
    rebuild(dt, month_start(dt.date()))
}

/// The first day of `dt`'s year, in `dt`'s shape.
///
/// Same contract as [`first_day_of_month`] with the month reset as well.
pub fn first_day_of_year(dt: Timestamp) -> Timestamp {
    rebuild(dt, year_start(dt.date()))
}

fn month_start(d: NaiveDate) -> NaiveDate {
    d.with_day(1).expect("day 1 exists in every month")
}

fn year_start(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), 1, 1).expect("January 1 exists in every year")
}

/// Reassemble `day` at midnight in the same shape as `shape`.
fn rebuild(shape: Timestamp, day: NaiveDate) -> Timestamp {
    match shape {
        Timestamp::Date(_) => Timestamp::Date(day),
        Timestamp::Naive(_) => Timestamp::Naive(NaiveDateTime::new(day, NaiveTime::MIN)),
        Timestamp::Zoned(dt) => {
            let offset: FixedOffset = *dt.offset();
            let local = NaiveDateTime::new(day, NaiveTime::MIN);
            Timestamp::Zoned(DateTime::from_naive_utc_and_offset(local - offset, offset))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        Timestamp::Naive(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(
            first_day_of_month(naive(2048, 4, 22, 16, 32)),
            naive(2048, 4, 1, 0, 0)
        );
        assert_eq!(first_day_of_month(date(2048, 4, 22)), date(2048, 4, 1));
    }

    #[test]
    fn test_first_day_of_year() {
        assert_eq!(
            first_day_of_year(naive(2048, 4, 22, 16, 32)),
            naive(2048, 1, 1, 0, 0)
        );
        assert_eq!(first_day_of_year(date(2048, 4, 22)), date(2048, 1, 1));
    }

    #[test]
    fn test_idempotence() {
        let dt = naive(2048, 4, 22, 16, 32);
        let month = first_day_of_month(dt);
        assert_eq!(first_day_of_month(month), month);
        let year = first_day_of_year(dt);
        assert_eq!(first_day_of_year(year), year);
    }

    #[test]
    fn test_zoned_keeps_offset() {
        let offset = FixedOffset::east_opt(-5 * 3600).unwrap();
        let dt = Timestamp::Zoned(offset.with_ymd_and_hms(2048, 4, 22, 16, 32, 0).unwrap());

        let month = first_day_of_month(dt);
        assert_eq!(month.offset(), Some(offset));
        assert_eq!(month.to_string(), "2048-04-01T00:00:00-05:00");

        let year = first_day_of_year(dt);
        assert_eq!(year.offset(), Some(offset));
        assert_eq!(year.to_string(), "2048-01-01T00:00:00-05:00");
    }

    #[test]
    fn test_leap_month_boundary() {
        assert_eq!(first_day_of_month(date(2048, 2, 29)), date(2048, 2, 1));
    }
}

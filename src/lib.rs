// ============================================================================
// dtround Library
// Deterministic rounding of dates and datetimes to a fixed duration grid
// ============================================================================

//! # dtround
//!
//! Round calendar timestamps down, up, or to the nearest point of a fixed
//! duration grid anchored at a configurable base.
//!
//! ## Features
//!
//! - **Three calendar shapes** (date-only, naive datetime, offset-carrying
//!   datetime) that never mix or coerce silently
//! - **Exact integer arithmetic** over nanoseconds; no floats anywhere
//! - **Deterministic nearest rounding** with a documented round-half-even
//!   tie-break, identical on every platform
//! - **Composable grids** via [`first_day_of_month`](engine::first_day_of_month)
//!   and [`first_day_of_year`](engine::first_day_of_year) as grid bases
//! - Pure functions over immutable values: no shared state, safe to call
//!   from any number of threads
//!
//! ## Example
//!
//! ```rust
//! use dtround::prelude::*;
//! use dtround::TimeDelta;
//!
//! let dt: Timestamp = "2048-04-16T08:32:02.065536".parse()?;
//!
//! // Snap to the quarter hour.
//! let lo = floor(dt, TimeDelta::minutes(15), None)?;
//! assert_eq!(lo.to_string(), "2048-04-16T08:30:00");
//!
//! // Weeks measured from the 1st of the month.
//! let base = first_day_of_month(dt);
//! let week = floor(dt, TimeDelta::days(7), Some(base))?;
//! assert_eq!(week.to_string(), "2048-04-15T00:00:00");
//! # Ok::<(), RoundError>(())
//! ```

pub mod domain;
pub mod engine;

pub use chrono::TimeDelta;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::Timestamp;
    pub use crate::engine::{
        ceil, first_day_of_month, first_day_of_year, floor, round, Grid, RoundError, RoundResult,
        RoundingMode,
    };
    pub use chrono::TimeDelta;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use chrono::NaiveDate;

    #[test]
    fn test_month_anchored_week_grid() {
        let dt = Timestamp::from(
            NaiveDate::from_ymd_opt(2048, 4, 16)
                .unwrap()
                .and_hms_opt(8, 32, 0)
                .unwrap(),
        );

        let base = first_day_of_month(dt);
        assert_eq!(
            base,
            Timestamp::from(
                NaiveDate::from_ymd_opt(2048, 4, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            )
        );

        let unit = TimeDelta::days(7);
        let lo = floor(dt, unit, Some(base)).unwrap();
        let hi = ceil(dt, unit, Some(base)).unwrap();
        let nearest = round(dt, unit, Some(base)).unwrap();

        assert_eq!(lo.to_string(), "2048-04-15T00:00:00");
        assert_eq!(hi.to_string(), "2048-04-22T00:00:00");
        assert!(lo <= dt && dt <= hi);
        assert!(nearest == lo || nearest == hi);
    }

    #[test]
    fn test_year_anchored_grid() {
        let dt: Timestamp = "2048-04-22T16:32:00".parse().unwrap();
        let base = first_day_of_year(dt);
        assert_eq!(base.to_string(), "2048-01-01T00:00:00");

        let lo = floor(dt, TimeDelta::days(30), Some(base)).unwrap();
        assert_eq!(lo.to_string(), "2048-03-31T00:00:00");
    }

    #[test]
    fn test_errors_surface_through_prelude() {
        let dt: Timestamp = "2048-04-16T08:32:00".parse().unwrap();
        let day: Timestamp = "2048-04-16".parse().unwrap();

        assert_eq!(
            floor(dt, TimeDelta::days(1), Some(day)),
            Err(RoundError::VariantMismatch)
        );
        assert_eq!(
            round(dt, TimeDelta::zero(), None),
            Err(RoundError::NonPositiveUnit)
        );
    }
}

// ============================================================================
// Duration Grid Engine
// Floor/ceil/nearest snapping of timestamps onto a fixed duration grid
// ============================================================================

use super::errors::{RoundError, RoundResult};
use crate::domain::{delta_total_nanos, Timestamp, NANOS_PER_SEC};
use chrono::TimeDelta;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a timestamp is snapped onto the grid.
///
/// All three modes run through the same subtraction/division path; only the
/// integer chosen from the exact quotient differs, so they cannot drift
/// apart on edge cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Greatest grid point not exceeding the input
    Floor,
    /// Smallest grid point not less than the input
    Ceil,
    /// Closest grid point. Exact halfway points resolve to the even
    /// multiple of the unit (round-half-even), decided in integer
    /// arithmetic rather than inherited from any platform float rounding.
    Nearest,
}

// ============================================================================
// Grid
// ============================================================================

/// A rounding grid: every point of the form `base + k * unit` for integer
/// `k`.
///
/// # Example
/// ```rust
/// use dtround::prelude::*;
/// use dtround::TimeDelta;
///
/// let grid = Grid::new(TimeDelta::minutes(15))?;
/// let dt: Timestamp = "2048-04-16T08:32:02.065536".parse()?;
/// assert_eq!(grid.floor(dt)?.to_string(), "2048-04-16T08:30:00");
/// assert_eq!(grid.ceil(dt)?.to_string(), "2048-04-16T08:45:00");
/// # Ok::<(), RoundError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    unit: TimeDelta,
    base: Option<Timestamp>,
}

impl Grid {
    /// Create a grid with the given unit, anchored at the default epoch
    /// base until [`with_base`](Self::with_base) is called.
    ///
    /// # Errors
    /// Returns `NonPositiveUnit` when `unit` is zero or negative.
    pub fn new(unit: TimeDelta) -> RoundResult<Self> {
        if delta_total_nanos(unit) <= 0 {
            return Err(RoundError::NonPositiveUnit);
        }
        Ok(Self { unit, base: None })
    }

    /// Builder method: anchor the grid at `base` instead of the epoch.
    ///
    /// `base` must have the same shape as the timestamps rounded against
    /// this grid; the mismatch is reported at rounding time.
    pub fn with_base(mut self, base: Timestamp) -> Self {
        self.base = Some(base);
        self
    }

    /// The rounding unit.
    #[inline]
    pub fn unit(&self) -> TimeDelta {
        self.unit
    }

    /// The explicit base, if one was set.
    #[inline]
    pub fn base(&self) -> Option<Timestamp> {
        self.base
    }

    /// Snap `dt` down to the grid.
    pub fn floor(&self, dt: Timestamp) -> RoundResult<Timestamp> {
        self.snap(dt, RoundingMode::Floor)
    }

    /// Snap `dt` up to the grid.
    pub fn ceil(&self, dt: Timestamp) -> RoundResult<Timestamp> {
        self.snap(dt, RoundingMode::Ceil)
    }

    /// Snap `dt` to the nearest grid point.
    pub fn round(&self, dt: Timestamp) -> RoundResult<Timestamp> {
        self.snap(dt, RoundingMode::Nearest)
    }

    /// Snap `dt` with an explicit mode, for callers that select the mode
    /// from data.
    pub fn snap(&self, dt: Timestamp, mode: RoundingMode) -> RoundResult<Timestamp> {
        snap(dt, self.unit, self.base, mode)
    }
}

impl Default for Grid {
    /// A one-day grid anchored at the epoch.
    fn default() -> Self {
        Self {
            unit: TimeDelta::days(1),
            base: None,
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Round `dt` down to the greatest grid point not exceeding it.
///
/// The grid is `base + k * unit` for integer `k`; `base` defaults to the
/// Unix epoch in `dt`'s shape (inheriting `dt`'s offset for zoned values).
///
/// # Errors
/// - `NonPositiveUnit` when `unit` is zero or negative
/// - `VariantMismatch` when `base` has a different shape than `dt`
/// - `OutOfRange` when the grid point cannot be represented
///
/// # Example
/// ```rust
/// use dtround::prelude::*;
/// use dtround::TimeDelta;
///
/// let dt: Timestamp = "2048-04-16T08:32:02.065536".parse()?;
/// let lo = floor(dt, TimeDelta::minutes(15), None)?;
/// assert_eq!(lo.to_string(), "2048-04-16T08:30:00");
///
/// // A week grid anchored away from the epoch.
/// let base: Timestamp = "2048-04-10T00:00:00".parse()?;
/// let dt: Timestamp = "2048-04-22T16:32:00".parse()?;
/// let lo = floor(dt, TimeDelta::days(7), Some(base))?;
/// assert_eq!(lo.to_string(), "2048-04-17T00:00:00");
/// # Ok::<(), RoundError>(())
/// ```
pub fn floor(dt: Timestamp, unit: TimeDelta, base: Option<Timestamp>) -> RoundResult<Timestamp> {
    snap(dt, unit, base, RoundingMode::Floor)
}

/// Round `dt` up to the smallest grid point not less than it.
///
/// Same grid and errors as [`floor`].
pub fn ceil(dt: Timestamp, unit: TimeDelta, base: Option<Timestamp>) -> RoundResult<Timestamp> {
    snap(dt, unit, base, RoundingMode::Ceil)
}

/// Round `dt` to the nearest grid point, halfway cases to the even
/// multiple of `unit` (see [`RoundingMode::Nearest`]).
///
/// Same grid and errors as [`floor`]. The result is always one of
/// `floor(dt, ..)` and `ceil(dt, ..)`.
///
/// # Example
/// ```rust
/// use dtround::prelude::*;
/// use dtround::TimeDelta;
///
/// let base: Timestamp = "2048-04-10T00:00:00".parse()?;
/// let dt: Timestamp = "2048-04-22T16:32:00".parse()?;
/// let snapped = round(dt, TimeDelta::days(7), Some(base))?;
/// assert_eq!(snapped.to_string(), "2048-04-24T00:00:00");
/// # Ok::<(), RoundError>(())
/// ```
pub fn round(dt: Timestamp, unit: TimeDelta, base: Option<Timestamp>) -> RoundResult<Timestamp> {
    snap(dt, unit, base, RoundingMode::Nearest)
}

// ============================================================================
// Shared Routine
// ============================================================================

/// Build a `TimeDelta` from exact total nanoseconds.
fn delta_from_nanos(nanos: i128) -> RoundResult<TimeDelta> {
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SEC)).map_err(|_| RoundError::OutOfRange)?;
    let subsec = nanos.rem_euclid(NANOS_PER_SEC) as u32;
    TimeDelta::new(secs, subsec).ok_or(RoundError::OutOfRange)
}

/// Pick the grid index for an exact quotient `q + r/unit`, `0 <= r < unit`.
fn select_index(q: i128, r: i128, unit: i128, mode: RoundingMode) -> i128 {
    match mode {
        RoundingMode::Floor => q,
        RoundingMode::Ceil => {
            if r == 0 {
                q
            } else {
                q + 1
            }
        },
        RoundingMode::Nearest => match (2 * r).cmp(&unit) {
            std::cmp::Ordering::Less => q,
            std::cmp::Ordering::Greater => q + 1,
            // Exact tie: take whichever neighbor is even.
            std::cmp::Ordering::Equal => {
                if q % 2 == 0 {
                    q
                } else {
                    q + 1
                }
            },
        },
    }
}

/// The single subtraction/division/reconstruction path shared by all three
/// entry points.
fn snap(
    dt: Timestamp,
    unit: TimeDelta,
    base: Option<Timestamp>,
    mode: RoundingMode,
) -> RoundResult<Timestamp> {
    let unit_nanos = delta_total_nanos(unit);
    if unit_nanos <= 0 {
        return Err(RoundError::NonPositiveUnit);
    }

    let base = base.unwrap_or_else(|| dt.epoch());
    let elapsed = delta_total_nanos(dt.checked_sub(&base)?);

    let q = elapsed.div_euclid(unit_nanos);
    let r = elapsed.rem_euclid(unit_nanos);
    let k = select_index(q, r, unit_nanos, mode);

    tracing::trace!(
        "grid snap: dt={} variant={} mode={:?} unit={}ns k={}",
        dt,
        dt.variant_name(),
        mode,
        unit_nanos,
        k
    );

    base.checked_add(delta_from_nanos(k * unit_nanos)?)
}

// ============================================================================
// Tests
// ============================================================================

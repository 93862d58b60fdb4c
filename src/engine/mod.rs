// ============================================================================
// Engine Module
// Contains the grid rounding core and calendar-boundary helpers
// ============================================================================

mod calendar;
mod errors;
mod grid;

pub use calendar::{first_day_of_month, first_day_of_year};
pub use errors::{RoundError, RoundResult};
pub use grid::{ceil, floor, round, Grid, RoundingMode};

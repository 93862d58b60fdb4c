// ============================================================================
// Domain Models Module
// Calendar value types shared by the rounding engine
// ============================================================================

mod timestamp;

pub use timestamp::Timestamp;

pub(crate) use timestamp::{delta_total_nanos, NANOS_PER_SEC};

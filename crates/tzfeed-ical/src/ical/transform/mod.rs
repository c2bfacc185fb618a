//! Feed transformation: date-time rewriting, VTIMEZONE synthesis, and
//! event normalization.

pub mod datetime;
pub mod event;
mod pipeline;
pub mod timezone;

pub use pipeline::transform;

/// Timezone policy for one transform call.
///
/// Passed explicitly so the transform stays pure and independently
/// testable; nothing is read from ambient process state.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Target zone identifier, e.g. `Europe/Berlin`.
    pub timezone: String,
    /// When set, values that already carry a TZID are re-anchored to
    /// the target zone. When unset they are left alone.
    pub override_tzid: bool,
}

impl TransformOptions {
    /// Creates options for the given target zone.
    #[must_use]
    pub fn new(timezone: impl Into<String>, override_tzid: bool) -> Self {
        Self {
            timezone: timezone.into(),
            override_tzid,
        }
    }
}

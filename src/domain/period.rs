//! Interval value types for scheduled work periods.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-second UNIX timestamp carried by a [`Period`].
///
/// The wire format stores timestamps as native-width integers, so the domain
/// keeps whole seconds rather than a full [`DateTime`] to guarantee that a
/// value survives an encode/decode round trip exactly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from raw seconds since the UNIX epoch.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Creates a timestamp from a UTC moment, truncating sub-second
    /// precision.
    #[must_use]
    pub fn from_utc(moment: DateTime<Utc>) -> Self {
        Self(moment.timestamp())
    }

    /// Reads the current time from the given clock.
    #[must_use]
    pub fn now(clock: &impl Clock) -> Self {
        Self::from_utc(clock.utc())
    }

    /// Returns the wrapped seconds value.
    #[must_use]
    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// Converts back to a UTC moment, or `None` when the seconds value is
    /// outside the range `chrono` can represent.
    #[must_use]
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Returns this timestamp shifted by `secs`, saturating at the numeric
    /// limits.
    #[must_use]
    pub const fn offset_by(self, secs: i64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time interval with a start and an end.
///
/// No ordering is enforced between the endpoints; a period whose end
/// precedes its start is accepted as given, not validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    start: Timestamp,
    end: Timestamp,
}

impl Period {
    /// Creates a period from its endpoints.
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn start(self) -> Timestamp {
        self.start
    }

    /// Returns the end timestamp.
    #[must_use]
    pub const fn end(self) -> Timestamp {
        self.end
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Period) {{ .start = {}, .end = {} }}", self.start, self.end)
    }
}

/// Renders an optional period, using `(Period) NULL` for the absent case so
/// it stays distinguishable from any populated value.
#[must_use]
pub fn render_period(period: Option<&Period>) -> String {
    period.map_or_else(|| "(Period) NULL".to_owned(), ToString::to_string)
}

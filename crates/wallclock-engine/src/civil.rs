//! Core value types: the millisecond instant and civil wall-clock components.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::Serialize;

use crate::error::{ClockError, Result};

/// An absolute point in time: signed milliseconds since the Unix epoch, UTC.
///
/// No timezone is attached — a zone is applied only when an instant is
/// rendered to or recovered from wall-clock components.
pub type Instant = i64;

/// A decomposed calendar/clock reading in some specific zone.
///
/// These are always *local* wall-clock values; a `CivilComponents` on its own
/// does not identify an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CivilComponents {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// 1-31.
    pub day: u32,
    /// 0-23.
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilComponents {
    /// Read components off any chrono datetime-like value.
    ///
    /// An hour of 24 reported by the calendar lookup is normalized to 0; the
    /// day rollover it implies is already carried by the instant itself.
    pub(crate) fn read<T: Datelike + Timelike>(dt: &T) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour() % 24,
            minute: dt.minute(),
            second: dt.second(),
        }
    }

    /// Reinterpret these numbers as a naive datetime, validating the date.
    pub(crate) fn to_naive(self) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second))
            .ok_or_else(|| {
                ClockError::InvalidDate(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02} is not a real calendar reading",
                    self.year, self.month, self.day, self.hour, self.minute, self.second
                ))
            })
    }
}

/// Lift a millisecond instant into a UTC datetime.
pub(crate) fn utc_datetime(instant: Instant) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(instant).ok_or_else(|| {
        ClockError::InvalidInstant(format!("{instant} ms is outside the representable range"))
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! An immutable fluent value wrapper over a single instant.
//!
//! Every operation returns a new `Timepoint`; nothing mutates in place, so a
//! value can be shared freely across arithmetic and boundary chains without
//! aliasing surprises. Civil reads (month arithmetic, boundaries, setters) go
//! through the host's local calendar and are therefore fallible; plain
//! instant arithmetic and comparisons are not.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};

use crate::civil::{utc_datetime, CivilComponents, Instant};
use crate::error::{ClockError, Result};
use crate::format::{format, FormatOptions};
use crate::parse::{local_instant, parse};

/// An immutable point in time with fluent arithmetic, boundary, and
/// comparison operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timepoint {
    instant: Instant,
}

impl Timepoint {
    // ── factories ───────────────────────────────────────────────────────

    /// The current moment.
    pub fn now() -> Self {
        Self {
            instant: Utc::now().timestamp_millis(),
        }
    }

    /// Wrap a raw millisecond instant.
    pub fn from_instant(instant: Instant) -> Self {
        Self { instant }
    }

    /// Build from local wall-clock components.
    ///
    /// # Errors
    ///
    /// [`ClockError::InvalidDate`] if the components do not name a real local
    /// reading (impossible date, or a time skipped by a DST transition).
    pub fn from_components(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let components = CivilComponents {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        Ok(Self {
            instant: local_instant(components.to_naive()?)?,
        })
    }

    /// Parse a string, with an optional pattern (see [`crate::parse`]).
    pub fn parse(text: &str, pattern: Option<&str>) -> Result<Self> {
        Ok(Self {
            instant: parse(text, pattern, None)?,
        })
    }

    // ── accessors ───────────────────────────────────────────────────────

    /// The raw millisecond instant — a detached copy, never a shared handle.
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// The instant decomposed in the host's local zone.
    pub fn components(&self) -> Result<CivilComponents> {
        Ok(CivilComponents::read(&self.local()?))
    }

    /// Render with a pattern; see [`crate::format`].
    pub fn format(&self, pattern: &str, options: &FormatOptions) -> Result<String> {
        format(self.instant, pattern, options)
    }

    // ── fixed-length arithmetic ─────────────────────────────────────────

    pub fn add_seconds(&self, n: i64) -> Self {
        Self {
            instant: self.instant + n * 1_000,
        }
    }

    pub fn add_minutes(&self, n: i64) -> Self {
        Self {
            instant: self.instant + n * 60_000,
        }
    }

    pub fn add_hours(&self, n: i64) -> Self {
        Self {
            instant: self.instant + n * 3_600_000,
        }
    }

    pub fn add_days(&self, n: i64) -> Self {
        Self {
            instant: self.instant + n * 86_400_000,
        }
    }

    pub fn add_weeks(&self, n: i64) -> Self {
        self.add_days(n * 7)
    }

    pub fn sub_seconds(&self, n: i64) -> Self {
        self.add_seconds(-n)
    }

    pub fn sub_minutes(&self, n: i64) -> Self {
        self.add_minutes(-n)
    }

    pub fn sub_hours(&self, n: i64) -> Self {
        self.add_hours(-n)
    }

    pub fn sub_days(&self, n: i64) -> Self {
        self.add_days(-n)
    }

    pub fn sub_weeks(&self, n: i64) -> Self {
        self.add_weeks(-n)
    }

    // ── calendar arithmetic ─────────────────────────────────────────────

    /// Add calendar months in the local zone.
    ///
    /// A day of month with no counterpart in the target month overflows into
    /// the following month (Jan 31 + 1 month lands in early March). That is
    /// the underlying civil-calendar arithmetic, deliberately not clamped to
    /// the last valid day; callers must not assume end-of-month clamping.
    pub fn add_months(&self, n: i64) -> Result<Self> {
        let local = self.local()?;
        let total = local.year() as i64 * 12 + local.month() as i64 - 1 + n;
        let year = i32::try_from(total.div_euclid(12))
            .map_err(|_| ClockError::InvalidDate(format!("year overflow adding {n} months")))?;
        let month = (total.rem_euclid(12) + 1) as u32;

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            ClockError::InvalidDate(format!("{year:04}-{month:02} is out of range"))
        })?;
        // Day overflow rolls forward naturally from the first of the month.
        let date = first + Duration::days(local.day() as i64 - 1);
        local_instant(date.and_time(local.time())).map(Self::from_instant)
    }

    /// Add calendar years; same overflow behavior as [`Self::add_months`]
    /// (Feb 29 + 1 year lands on Mar 1).
    pub fn add_years(&self, n: i64) -> Result<Self> {
        self.add_months(n * 12)
    }

    pub fn sub_months(&self, n: i64) -> Result<Self> {
        self.add_months(-n)
    }

    pub fn sub_years(&self, n: i64) -> Result<Self> {
        self.add_years(-n)
    }

    // ── setters ─────────────────────────────────────────────────────────

    pub fn with_year(&self, year: i32) -> Result<Self> {
        self.map_components(|c| c.year = year)
    }

    pub fn with_month(&self, month: u32) -> Result<Self> {
        self.map_components(|c| c.month = month)
    }

    pub fn with_day(&self, day: u32) -> Result<Self> {
        self.map_components(|c| c.day = day)
    }

    pub fn with_hour(&self, hour: u32) -> Result<Self> {
        self.map_components(|c| c.hour = hour)
    }

    pub fn with_minute(&self, minute: u32) -> Result<Self> {
        self.map_components(|c| c.minute = minute)
    }

    pub fn with_second(&self, second: u32) -> Result<Self> {
        self.map_components(|c| c.second = second)
    }

    // ── boundaries ──────────────────────────────────────────────────────

    /// Local midnight of the instant's day.
    pub fn start_of_day(&self) -> Result<Self> {
        self.map_components(|c| {
            c.hour = 0;
            c.minute = 0;
            c.second = 0;
        })
    }

    /// 23:59:59 local of the instant's day.
    pub fn end_of_day(&self) -> Result<Self> {
        self.map_components(|c| {
            c.hour = 23;
            c.minute = 59;
            c.second = 59;
        })
    }

    pub fn start_of_month(&self) -> Result<Self> {
        self.map_components(|c| {
            c.day = 1;
            c.hour = 0;
            c.minute = 0;
            c.second = 0;
        })
    }

    pub fn end_of_month(&self) -> Result<Self> {
        let local = self.local()?;
        let last_day = days_in_month(local.year(), local.month());
        self.map_components(|c| {
            c.day = last_day;
            c.hour = 23;
            c.minute = 59;
            c.second = 59;
        })
    }

    pub fn start_of_year(&self) -> Result<Self> {
        self.map_components(|c| {
            c.month = 1;
            c.day = 1;
            c.hour = 0;
            c.minute = 0;
            c.second = 0;
        })
    }

    pub fn end_of_year(&self) -> Result<Self> {
        self.map_components(|c| {
            c.month = 12;
            c.day = 31;
            c.hour = 23;
            c.minute = 59;
            c.second = 59;
        })
    }

    // ── comparisons ─────────────────────────────────────────────────────

    pub fn is_before(&self, other: &Self) -> bool {
        self.instant < other.instant
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.instant > other.instant
    }

    pub fn is_same(&self, other: &Self) -> bool {
        self.instant == other.instant
    }

    /// Strictly between `start` and `end` (both bounds exclusive).
    pub fn is_between(&self, start: &Self, end: &Self) -> bool {
        self.instant > start.instant && self.instant < end.instant
    }

    pub fn is_past(&self) -> bool {
        self.instant < Utc::now().timestamp_millis()
    }

    pub fn is_future(&self) -> bool {
        self.instant > Utc::now().timestamp_millis()
    }

    /// Same local calendar date as `other`.
    pub fn is_same_day(&self, other: &Self) -> Result<bool> {
        Ok(self.local()?.date_naive() == other.local()?.date_naive())
    }

    /// Same local calendar date as now.
    pub fn is_today(&self) -> Result<bool> {
        self.is_same_day(&Self::now())
    }

    /// Whether the instant's local year is a leap year (4/100/400 rule).
    pub fn is_leap_year(&self) -> Result<bool> {
        Ok(leap_year(self.local()?.year()))
    }

    // ── differences ─────────────────────────────────────────────────────

    /// Whole seconds from `other` to `self`, floored (sign-preserving).
    pub fn diff_in_seconds(&self, other: &Self) -> i64 {
        (self.instant - other.instant).div_euclid(1_000)
    }

    pub fn diff_in_minutes(&self, other: &Self) -> i64 {
        (self.instant - other.instant).div_euclid(60_000)
    }

    pub fn diff_in_hours(&self, other: &Self) -> i64 {
        (self.instant - other.instant).div_euclid(3_600_000)
    }

    pub fn diff_in_days(&self, other: &Self) -> i64 {
        (self.instant - other.instant).div_euclid(86_400_000)
    }

    // ── internal ────────────────────────────────────────────────────────

    fn local(&self) -> Result<DateTime<Local>> {
        Ok(utc_datetime(self.instant)?.with_timezone(&Local))
    }

    /// Rebuild from the local components after an edit. Sub-second precision
    /// is intentionally dropped; component edits land on whole seconds.
    fn map_components(&self, edit: impl FnOnce(&mut CivilComponents)) -> Result<Self> {
        let mut components = self.components()?;
        edit(&mut components);
        local_instant(components.to_naive()?).map(Self::from_instant)
    }
}

/// The standard Gregorian leap-year rule.
pub fn leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

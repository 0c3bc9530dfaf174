//! Timezone offset resolution without a bundled timezone database.
//!
//! The offset of a zone at an instant is derived by diffing wall clocks: read
//! the instant's civil components in the target zone and in UTC via the host
//! calendar lookup, reinterpret both readings as if they were UTC instants,
//! and take the difference. DST transitions make the answer a function of the
//! instant, so nothing is memoized across instants.

use chrono_tz::Tz;
use serde::Serialize;

use crate::civil::{utc_datetime, CivilComponents, Instant};
use crate::error::{ClockError, Result};

/// A zone's UTC offset at one specific instant, plus the wall-clock reading
/// an observer in that zone would make.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZoneOffset {
    /// Signed minutes east of UTC. `+330` for UTC+5:30.
    pub offset_minutes: i32,
    /// The instant decomposed in the target zone.
    pub local: CivilComponents,
}

/// Resolve `timezone`'s UTC offset at `instant`.
///
/// `timezone` is an IANA name (or `"UTC"`). Fractional-hour zones resolve to
/// the exact minute.
///
/// # Errors
///
/// [`ClockError::UnknownTimezone`] if the zone identifier is not recognized —
/// never a silent fall-back to UTC. [`ClockError::InvalidInstant`] if the
/// instant is outside the representable range.
pub fn resolve_offset(instant: Instant, timezone: &str) -> Result<ZoneOffset> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| ClockError::UnknownTimezone(format!("'{timezone}'")))?;

    let utc = utc_datetime(instant)?;
    let local = CivilComponents::read(&utc.with_timezone(&tz));
    let civil_utc = CivilComponents::read(&utc);

    // Both readings reinterpreted as naive-UTC instants; their difference is
    // the zone's offset. Sub-second parts cancel (both readings drop them).
    let local_ms = local.to_naive()?.and_utc().timestamp_millis();
    let utc_ms = civil_utc.to_naive()?.and_utc().timestamp_millis();

    Ok(ZoneOffset {
        offset_minutes: round_to_minutes(local_ms - utc_ms),
        local,
    })
}

/// Round a millisecond difference to the nearest whole minute (half-up,
/// correct for negative differences).
fn round_to_minutes(diff_ms: i64) -> i32 {
    (diff_ms + 30_000).div_euclid(60_000) as i32
}

// ── Tests ───────────────────────────────────────────────────────────────────

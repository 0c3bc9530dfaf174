//! Rendering an instant into a string according to a token pattern.

use chrono::{Datelike, Local, Offset};

use crate::civil::{utc_datetime, CivilComponents, Instant};
use crate::error::Result;
use crate::locale::{self, WeekdayForm};
use crate::offset::resolve_offset;
use crate::token::{tokenize, PatternItem, Token};

/// Rendering options. Both fields are optional: no timezone means the host's
/// local zone, no locale means English.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions<'a> {
    /// Locale identifier for month/weekday names (e.g., `"en"`).
    pub locale: Option<&'a str>,
    /// IANA timezone name (e.g., `"Asia/Tokyo"`) or `"UTC"`.
    pub timezone: Option<&'a str>,
}

/// Render `instant` according to `pattern`.
///
/// With a timezone in `options`, the offset resolver is consulted once and
/// every token renders from the zone's wall clock; the `Z` token renders the
/// resolved offset as `±HHMM` (`+0000` for UTC). Without one, the host's
/// local zone supplies the wall clock and the offset.
///
/// Deterministic for identical inputs; the input instant is never mutated.
///
/// # Errors
///
/// [`crate::ClockError::UnknownTimezone`] for an unrecognized zone name,
/// [`crate::ClockError::InvalidInstant`] for an out-of-range instant.
pub fn format(instant: Instant, pattern: &str, options: &FormatOptions) -> Result<String> {
    let (local, offset_minutes) = match options.timezone {
        Some(tz) => {
            let resolved = resolve_offset(instant, tz)?;
            (resolved.local, resolved.offset_minutes)
        }
        None => {
            let dt = utc_datetime(instant)?.with_timezone(&Local);
            let minutes = dt.offset().fix().local_minus_utc() / 60;
            (CivilComponents::read(&dt), minutes)
        }
    };
    let weekday = local.to_naive()?.weekday();

    let mut out = String::with_capacity(pattern.len());
    for item in tokenize(pattern) {
        match item {
            PatternItem::Literal(lit) => out.push_str(&lit),
            PatternItem::Token(token) => {
                render_token(&mut out, token, &local, weekday, offset_minutes, options)
            }
        }
    }
    Ok(out)
}

fn render_token(
    out: &mut String,
    token: Token,
    local: &CivilComponents,
    weekday: chrono::Weekday,
    offset_minutes: i32,
    options: &FormatOptions,
) {
    use std::fmt::Write;

    // Infallible: writing to a String cannot fail.
    let _ = match token {
        Token::YearFull => write!(out, "{:04}", local.year),
        Token::YearTwoDigit => write!(out, "{:02}", local.year.rem_euclid(100)),
        Token::MonthNameFull => {
            out.push_str(locale::month_name(options.locale, local.month, false));
            Ok(())
        }
        Token::MonthNameShort => {
            out.push_str(locale::month_name(options.locale, local.month, true));
            Ok(())
        }
        Token::MonthPadded => write!(out, "{:02}", local.month),
        Token::Month => write!(out, "{}", local.month),
        Token::DayPadded => write!(out, "{:02}", local.day),
        Token::Day => write!(out, "{}", local.day),
        Token::WeekdayFull => {
            out.push_str(locale::weekday_name(options.locale, weekday, WeekdayForm::Full));
            Ok(())
        }
        Token::WeekdayShort => {
            out.push_str(locale::weekday_name(options.locale, weekday, WeekdayForm::Short));
            Ok(())
        }
        Token::WeekdayNarrow => {
            out.push_str(locale::weekday_name(options.locale, weekday, WeekdayForm::Narrow));
            Ok(())
        }
        Token::Hour24Padded => write!(out, "{:02}", local.hour),
        Token::Hour24 => write!(out, "{}", local.hour),
        Token::Hour12Padded => write!(out, "{:02}", hour_12(local.hour)),
        Token::Hour12 => write!(out, "{}", hour_12(local.hour)),
        Token::MinutePadded => write!(out, "{:02}", local.minute),
        Token::Minute => write!(out, "{}", local.minute),
        Token::SecondPadded => write!(out, "{:02}", local.second),
        Token::Second => write!(out, "{}", local.second),
        Token::MeridiemUpper => {
            out.push_str(if local.hour >= 12 { "PM" } else { "AM" });
            Ok(())
        }
        Token::MeridiemLower => {
            out.push_str(if local.hour >= 12 { "pm" } else { "am" });
            Ok(())
        }
        Token::Offset => {
            out.push_str(&render_offset(offset_minutes));
            Ok(())
        }
    };
}

/// 12-hour clock value: 12 at both midnight and noon, never 0.
fn hour_12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// `±HHMM`, always four digits and signed; zero renders as `+0000`.
fn render_offset(offset_minutes: i32) -> String {
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let abs = offset_minutes.unsigned_abs();
    format!("{sign}{:02}{:02}", abs / 60, abs % 60)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn millis(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            .timestamp_millis()
    }

    fn in_zone(tz: &str) -> FormatOptions<'_> {
        FormatOptions {
            timezone: Some(tz),
            ..Default::default()
        }
    }

    #[test]
    fn test_iso_pattern_in_utc() {
        let s = format(
            millis(2024, 3, 15, 14, 30, 45),
            "YYYY-MM-DD HH:mm:ss",
            &in_zone("UTC"),
        )
        .unwrap();
        assert_eq!(s, "2024-03-15 14:30:45");
    }

    #[test]
    fn test_tokyo_rendering_with_offset() {
        let s = format(
            millis(2024, 3, 15, 14, 30, 45),
            "YYYY-MM-DD HH:mm:ss Z",
            &in_zone("Asia/Tokyo"),
        )
        .unwrap();
        assert_eq!(s, "2024-03-15 23:30:45 +0900");
    }

    #[test]
    fn test_offset_token_shapes() {
        let i = millis(2024, 1, 15, 12, 0, 0);
        assert_eq!(format(i, "Z", &in_zone("UTC")).unwrap(), "+0000");
        assert_eq!(format(i, "Z", &in_zone("Asia/Tokyo")).unwrap(), "+0900");
        assert_eq!(format(i, "Z", &in_zone("Asia/Kolkata")).unwrap(), "+0530");
        assert_eq!(
            format(i, "Z", &in_zone("America/New_York")).unwrap(),
            "-0500"
        );
    }

    #[test]
    fn test_twelve_hour_boundaries() {
        let midnight = millis(2024, 6, 1, 0, 0, 0);
        let noon = millis(2024, 6, 1, 12, 0, 0);
        assert_eq!(
            format(midnight, "h:mm A", &in_zone("UTC")).unwrap(),
            "12:00 AM"
        );
        assert_eq!(format(noon, "h:mm A", &in_zone("UTC")).unwrap(), "12:00 PM");
    }

    #[test]
    fn test_lowercase_meridiem() {
        let s = format(millis(2024, 6, 1, 15, 5, 0), "h:mm a", &in_zone("UTC")).unwrap();
        assert_eq!(s, "3:05 pm");
    }

    #[test]
    fn test_unpadded_tokens() {
        let s = format(
            millis(2024, 6, 5, 7, 8, 9),
            "M/D/YYYY H:m:s",
            &in_zone("UTC"),
        )
        .unwrap();
        assert_eq!(s, "6/5/2024 7:8:9");
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(
            format(millis(2024, 1, 1, 0, 0, 0), "YY", &in_zone("UTC")).unwrap(),
            "24"
        );
        assert_eq!(
            format(millis(2005, 1, 1, 0, 0, 0), "YY", &in_zone("UTC")).unwrap(),
            "05"
        );
    }

    #[test]
    fn test_full_month_name_never_splits() {
        // MMMM renders a name, never a 2-digit month followed by literal MM.
        let s = format(millis(2024, 6, 15, 0, 0, 0), "MMMM", &in_zone("UTC")).unwrap();
        assert_eq!(s, "June");
    }

    #[test]
    fn test_named_parts_scenario() {
        let s = format(
            millis(2024, 6, 15, 0, 0, 0),
            "dddd, MMMM D, YYYY",
            &in_zone("UTC"),
        )
        .unwrap();
        assert_eq!(s, "Saturday, June 15, 2024");
    }

    #[test]
    fn test_weekday_short_and_narrow() {
        let i = millis(2024, 6, 15, 0, 0, 0); // Saturday
        assert_eq!(format(i, "ddd", &in_zone("UTC")).unwrap(), "Sat");
        assert_eq!(format(i, "d", &in_zone("UTC")).unwrap(), "S");
    }

    #[test]
    fn test_leap_day_renders() {
        let s = format(millis(2024, 2, 29, 0, 0, 0), "YYYY-MM-DD", &in_zone("UTC")).unwrap();
        assert_eq!(s, "2024-02-29");
    }

    #[test]
    fn test_literals_pass_through() {
        let s = format(millis(2024, 3, 15, 0, 0, 0), "DD.MM.YYYY!", &in_zone("UTC")).unwrap();
        assert_eq!(s, "15.03.2024!");
    }

    #[test]
    fn test_unknown_timezone_propagates() {
        assert!(format(0, "YYYY", &in_zone("Not/AZone")).is_err());
    }

    #[test]
    fn test_local_zone_roundtrip_components() {
        // Without a timezone the local wall clock is used; reading the same
        // instant back through chrono::Local must agree token by token.
        let i = millis(2024, 6, 15, 12, 0, 0);
        let rendered = format(i, "YYYY-MM-DD HH:mm:ss", &FormatOptions::default()).unwrap();
        let local = utc_datetime(i).unwrap().with_timezone(&Local);
        let expected = local.format("%Y-%m-%d %H:%M:%S").to_string();
        assert_eq!(rendered, expected);
    }
}

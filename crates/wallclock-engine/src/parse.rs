//! Recovering an instant from a string and a token pattern.
//!
//! The pattern path walks the tokenized pattern against the input with an
//! explicit matcher (fixed-width digits, greedy 1-2 digit runs, word runs for
//! names, `±HHMM` for the offset token), anchored at both ends. The
//! no-pattern path is a small generic calendar-string parser.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::civil::Instant;
use crate::error::{ClockError, Result};
use crate::locale;
use crate::token::{tokenize, PatternItem, Token};

/// Parse `text` into a millisecond instant.
///
/// With a `pattern`, the input must match it exactly from start to end. If
/// the pattern contains a `Z` token, the parsed fields are read as UTC wall
/// clock and the parsed offset is subtracted — the exact inverse of the
/// formatter's offset application. Without a `Z` token, fields are read as
/// host-local wall clock.
///
/// Without a `pattern`, a generic fallback accepts RFC 3339 strings,
/// `YYYY-MM-DD HH:MM:SS` (local), and bare `YYYY-MM-DD` — deliberately
/// interpreted as **local** midnight rather than UTC midnight, so a date does
/// not shift by a day in negative-offset zones.
///
/// # Errors
///
/// [`ClockError::Parse`] on a pattern mismatch (naming input and pattern),
/// [`ClockError::UnknownMonthName`] / [`ClockError::UnknownWeekdayName`] on
/// unresolvable name text, [`ClockError::InvalidDate`] on a calendrically
/// impossible reading, and [`ClockError::InvalidInstant`] when the fallback
/// cannot interpret the input at all.
pub fn parse(text: &str, pattern: Option<&str>, locale: Option<&str>) -> Result<Instant> {
    match pattern {
        Some(p) => parse_with_pattern(text, p, locale),
        None => parse_fallback(text),
    }
}

/// Fields recovered from the input, before resolution into an instant.
#[derive(Debug, Default)]
struct ParsedFields {
    year: Option<i32>,
    short_year: Option<u32>,
    month: Option<u32>,
    month_name: Option<u32>,
    day: Option<u32>,
    hour24: Option<u32>,
    hour12: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    meridiem_pm: Option<bool>,
    offset_minutes: Option<i32>,
}

fn parse_with_pattern(text: &str, pattern: &str, locale: Option<&str>) -> Result<Instant> {
    let mut fields = ParsedFields::default();
    let mut rest = text;

    for item in tokenize(pattern) {
        rest = match item {
            PatternItem::Literal(lit) => rest
                .strip_prefix(lit.as_str())
                .ok_or_else(|| mismatch(text, pattern))?,
            PatternItem::Token(token) => {
                match_token(token, rest, text, pattern, locale, &mut fields)?
            }
        };
    }

    // Anchored at the end as well: leftover input is a mismatch.
    if !rest.is_empty() {
        return Err(mismatch(text, pattern));
    }

    resolve_fields(&fields)
}

fn mismatch(input: &str, pattern: &str) -> ClockError {
    ClockError::Parse {
        input: input.to_string(),
        pattern: pattern.to_string(),
    }
}

/// Consume one token's worth of input, recording the field it carries.
/// Returns the remaining input.
fn match_token<'a>(
    token: Token,
    rest: &'a str,
    text: &str,
    pattern: &str,
    locale_id: Option<&str>,
    fields: &mut ParsedFields,
) -> Result<&'a str> {
    let fail = || mismatch(text, pattern);

    match token {
        Token::YearFull => {
            let (value, rest) = take_fixed_digits(rest, 4).ok_or_else(fail)?;
            fields.year = Some(value as i32);
            Ok(rest)
        }
        Token::YearTwoDigit => {
            let (value, rest) = take_fixed_digits(rest, 2).ok_or_else(fail)?;
            fields.short_year = Some(value);
            Ok(rest)
        }
        Token::MonthPadded => {
            let (value, rest) = take_fixed_digits(rest, 2).ok_or_else(fail)?;
            fields.month = Some(value);
            Ok(rest)
        }
        Token::Month => {
            let (value, rest) = take_variable_digits(rest, 2).ok_or_else(fail)?;
            fields.month = Some(value);
            Ok(rest)
        }
        Token::MonthNameFull | Token::MonthNameShort => {
            let (word, rest) = take_word(rest);
            if word.is_empty() {
                return Err(fail());
            }
            let month = locale::parse_month_name(locale_id, word)
                .ok_or_else(|| ClockError::UnknownMonthName(word.to_string()))?;
            fields.month_name = Some(month);
            Ok(rest)
        }
        Token::DayPadded => {
            let (value, rest) = take_fixed_digits(rest, 2).ok_or_else(fail)?;
            fields.day = Some(value);
            Ok(rest)
        }
        Token::Day => {
            let (value, rest) = take_variable_digits(rest, 2).ok_or_else(fail)?;
            fields.day = Some(value);
            Ok(rest)
        }
        Token::WeekdayFull | Token::WeekdayShort => {
            // The weekday is derived from the date, so the name is validated
            // and consumed but contributes no field.
            let (word, rest) = take_word(rest);
            if word.is_empty() {
                return Err(fail());
            }
            locale::parse_weekday_name(locale_id, word)
                .ok_or_else(|| ClockError::UnknownWeekdayName(word.to_string()))?;
            Ok(rest)
        }
        Token::WeekdayNarrow => {
            let mut chars = rest.char_indices();
            let (_, ch) = chars.next().filter(|(_, c)| c.is_alphabetic()).ok_or_else(fail)?;
            if !locale::is_narrow_weekday(locale_id, &ch.to_string()) {
                return Err(ClockError::UnknownWeekdayName(ch.to_string()));
            }
            Ok(&rest[ch.len_utf8()..])
        }
        Token::Hour24Padded => {
            let (value, rest) = take_fixed_digits(rest, 2).ok_or_else(fail)?;
            fields.hour24 = Some(value);
            Ok(rest)
        }
        Token::Hour24 => {
            let (value, rest) = take_variable_digits(rest, 2).ok_or_else(fail)?;
            fields.hour24 = Some(value);
            Ok(rest)
        }
        Token::Hour12Padded => {
            let (value, rest) = take_fixed_digits(rest, 2).ok_or_else(fail)?;
            fields.hour12 = Some(value);
            Ok(rest)
        }
        Token::Hour12 => {
            let (value, rest) = take_variable_digits(rest, 2).ok_or_else(fail)?;
            fields.hour12 = Some(value);
            Ok(rest)
        }
        Token::MinutePadded => {
            let (value, rest) = take_fixed_digits(rest, 2).ok_or_else(fail)?;
            fields.minute = Some(value);
            Ok(rest)
        }
        Token::Minute => {
            let (value, rest) = take_variable_digits(rest, 2).ok_or_else(fail)?;
            fields.minute = Some(value);
            Ok(rest)
        }
        Token::SecondPadded => {
            let (value, rest) = take_fixed_digits(rest, 2).ok_or_else(fail)?;
            fields.second = Some(value);
            Ok(rest)
        }
        Token::Second => {
            let (value, rest) = take_variable_digits(rest, 2).ok_or_else(fail)?;
            fields.second = Some(value);
            Ok(rest)
        }
        Token::MeridiemUpper | Token::MeridiemLower => {
            let prefix = rest.get(0..2).ok_or_else(fail)?;
            match prefix.to_lowercase().as_str() {
                "am" => fields.meridiem_pm = Some(false),
                "pm" => fields.meridiem_pm = Some(true),
                _ => return Err(fail()),
            }
            Ok(&rest[2..])
        }
        Token::Offset => {
            let (minutes, rest) = take_offset(rest).ok_or_else(fail)?;
            fields.offset_minutes = Some(minutes);
            Ok(rest)
        }
    }
}

/// Exactly `n` ASCII digits.
fn take_fixed_digits(rest: &str, n: usize) -> Option<(u32, &str)> {
    let bytes = rest.as_bytes();
    if bytes.len() < n || !bytes[..n].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = rest[..n].parse().ok()?;
    Some((value, &rest[n..]))
}

/// One to `max` ASCII digits, greedy.
fn take_variable_digits(rest: &str, max: usize) -> Option<(u32, &str)> {
    let count = rest
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();
    if count == 0 {
        return None;
    }
    let value = rest[..count].parse().ok()?;
    Some((value, &rest[count..]))
}

/// A run of alphabetic characters.
fn take_word(rest: &str) -> (&str, &str) {
    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    (&rest[..end], &rest[end..])
}

/// `±HHMM`, with a tolerated optional colon (`±HH:MM`). Returns signed minutes.
fn take_offset(rest: &str) -> Option<(i32, &str)> {
    let sign = match rest.as_bytes().first() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return None,
    };

    let (hours, after) = take_fixed_digits(&rest[1..], 2)?;
    let after = after.strip_prefix(':').unwrap_or(after);
    let (minutes, after) = take_fixed_digits(after, 2)?;

    Some((sign * (hours * 60 + minutes) as i32, after))
}

/// Century pivot for 2-digit years: 00-69 land in 2000-2069, 70-99 in
/// 1970-1999. Fixed policy, not configurable.
fn pivot_two_digit_year(yy: u32) -> i32 {
    if yy <= 69 {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// Merge the recovered fields into an instant.
fn resolve_fields(fields: &ParsedFields) -> Result<Instant> {
    let year = fields
        .year
        .or_else(|| fields.short_year.map(pivot_two_digit_year))
        .unwrap_or_else(|| Local::now().year());
    // A numeric month field wins over a month name if both were present.
    let month = fields.month.or(fields.month_name).unwrap_or(1);
    let day = fields.day.unwrap_or(1);

    let hour = match (fields.hour24, fields.hour12) {
        (Some(h), _) => h,
        (None, Some(h)) => match fields.meridiem_pm {
            Some(true) if h != 12 => h + 12,
            Some(false) if h == 12 => 0,
            _ => h,
        },
        (None, None) => 0,
    };
    let minute = fields.minute.unwrap_or(0);
    let second = fields.second.unwrap_or(0);

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ClockError::InvalidDate(format!(
            "{year:04}-{month:02}-{day:02} is not a real calendar date"
        ))
    })?;
    let naive = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
        ClockError::InvalidDate(format!("{hour:02}:{minute:02}:{second:02} is not a valid time"))
    })?;

    match fields.offset_minutes {
        // Fields were the zone's wall clock: read as UTC, then undo the offset.
        Some(offset) => Ok(naive.and_utc().timestamp_millis() - offset as i64 * 60_000),
        None => local_instant(naive),
    }
}

/// Map a local wall-clock reading to an instant via the host's local zone.
/// An ambiguous reading (DST fall-back) resolves to the earlier instant.
pub(crate) fn local_instant(naive: NaiveDateTime) -> Result<Instant> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| {
            ClockError::InvalidDate(format!("{naive} does not exist in the local timezone"))
        })
}

/// The no-pattern fallback calendar parser.
fn parse_fallback(text: &str) -> Result<Instant> {
    let s = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_instant(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        // Local midnight, not UTC midnight.
        return local_instant(date.and_time(NaiveTime::MIN));
    }

    Err(ClockError::InvalidInstant(format!(
        "'{s}' is not a recognized calendar string"
    )))
}

// ── Tests ───────────────────────────────────────────────────────────────────

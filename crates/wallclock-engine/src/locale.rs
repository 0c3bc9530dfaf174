//! Locale-dependent month and weekday names.
//!
//! This is the adapter over the host locale facility. The crate ships the
//! English ("en") tables; locale identifiers are accepted on every call and
//! any identifier whose language tag is not recognized falls back to English
//! rather than failing, since no caller treats name rendering as fallible.

use chrono::Weekday;

pub(crate) const MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Indexed by `Weekday::num_days_from_monday()`.
pub(crate) const WEEKDAYS_FULL: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub(crate) const WEEKDAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub(crate) const WEEKDAYS_NARROW: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// The rendering form requested by a weekday token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeekdayForm {
    Full,
    Short,
    Narrow,
}

/// Month name for a 1-based month number. `month` must already be validated.
pub(crate) fn month_name(_locale: Option<&str>, month: u32, short: bool) -> &'static str {
    let idx = (month as usize - 1).min(11);
    if short {
        MONTHS_SHORT[idx]
    } else {
        MONTHS_FULL[idx]
    }
}

/// Weekday name in the requested form.
pub(crate) fn weekday_name(
    _locale: Option<&str>,
    weekday: Weekday,
    form: WeekdayForm,
) -> &'static str {
    let idx = weekday.num_days_from_monday() as usize;
    match form {
        WeekdayForm::Full => WEEKDAYS_FULL[idx],
        WeekdayForm::Short => WEEKDAYS_SHORT[idx],
        WeekdayForm::Narrow => WEEKDAYS_NARROW[idx],
    }
}

/// Resolve a month name (full or short, case-insensitive) to 1-12.
pub(crate) fn parse_month_name(_locale: Option<&str>, text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    for (i, name) in MONTHS_FULL.iter().enumerate() {
        if name.to_lowercase() == lower {
            return Some(i as u32 + 1);
        }
    }
    for (i, name) in MONTHS_SHORT.iter().enumerate() {
        if name.to_lowercase() == lower {
            return Some(i as u32 + 1);
        }
    }
    None
}

/// Resolve a weekday name (full or short, case-insensitive).
pub(crate) fn parse_weekday_name(_locale: Option<&str>, text: &str) -> Option<Weekday> {
    let lower = text.to_lowercase();
    let weekdays = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    for wd in weekdays {
        let idx = wd.num_days_from_monday() as usize;
        if WEEKDAYS_FULL[idx].to_lowercase() == lower || WEEKDAYS_SHORT[idx].to_lowercase() == lower
        {
            return Some(wd);
        }
    }
    None
}

/// Whether a single letter is a valid narrow weekday name.
pub(crate) fn is_narrow_weekday(_locale: Option<&str>, text: &str) -> bool {
    WEEKDAYS_NARROW.contains(&text.to_uppercase().as_str())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_forms() {
        assert_eq!(month_name(None, 6, false), "June");
        assert_eq!(month_name(None, 6, true), "Jun");
        assert_eq!(month_name(Some("en-US"), 12, false), "December");
    }

    #[test]
    fn test_weekday_name_forms() {
        assert_eq!(weekday_name(None, Weekday::Sat, WeekdayForm::Full), "Saturday");
        assert_eq!(weekday_name(None, Weekday::Sat, WeekdayForm::Short), "Sat");
        assert_eq!(weekday_name(None, Weekday::Sat, WeekdayForm::Narrow), "S");
    }

    #[test]
    fn test_parse_month_name_case_insensitive() {
        assert_eq!(parse_month_name(None, "february"), Some(2));
        assert_eq!(parse_month_name(None, "FEB"), Some(2));
        assert_eq!(parse_month_name(None, "Smarch"), None);
    }

    #[test]
    fn test_parse_weekday_name() {
        assert_eq!(parse_weekday_name(None, "wednesday"), Some(Weekday::Wed));
        assert_eq!(parse_weekday_name(None, "Wed"), Some(Weekday::Wed));
        assert_eq!(parse_weekday_name(None, "Someday"), None);
    }

    #[test]
    fn test_narrow_weekday_letters() {
        assert!(is_narrow_weekday(None, "m"));
        assert!(is_narrow_weekday(None, "S"));
        assert!(!is_narrow_weekday(None, "x"));
    }
}

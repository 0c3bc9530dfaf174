//! The format-token vocabulary shared by the formatter and the parser.
//!
//! A pattern string is scanned once into tokens and literal runs. Matching is
//! longest-token-first: `MMMM` must be tried before `MMM`, `MM`, `M` at a
//! given position, otherwise an ambiguous prefix mis-tokenizes (`MM`
//! swallowing half of `MMMM`). The ordering of [`TOKEN_TABLE`] enforces this
//! explicitly rather than leaning on any regex engine's alternation order.

/// A format directive. The set is closed; tokens do not compose and are not
/// user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `YYYY` — zero-padded 4-digit year.
    YearFull,
    /// `YY` — last two digits of the year; parses via the century pivot.
    YearTwoDigit,
    /// `MMMM` — full month name.
    MonthNameFull,
    /// `MMM` — short month name.
    MonthNameShort,
    /// `MM` — zero-padded month.
    MonthPadded,
    /// `M` — unpadded month.
    Month,
    /// `DD` — zero-padded day of month.
    DayPadded,
    /// `D` — unpadded day of month.
    Day,
    /// `dddd` — full weekday name.
    WeekdayFull,
    /// `ddd` — short weekday name.
    WeekdayShort,
    /// `d` — narrow (single-letter) weekday name.
    WeekdayNarrow,
    /// `HH` — zero-padded 24-hour clock hour.
    Hour24Padded,
    /// `H` — unpadded 24-hour clock hour.
    Hour24,
    /// `hh` — zero-padded 12-hour clock hour (12 at midnight and noon).
    Hour12Padded,
    /// `h` — unpadded 12-hour clock hour.
    Hour12,
    /// `mm` — zero-padded minute.
    MinutePadded,
    /// `m` — unpadded minute.
    Minute,
    /// `ss` — zero-padded second.
    SecondPadded,
    /// `s` — unpadded second.
    Second,
    /// `A` — `AM`/`PM`.
    MeridiemUpper,
    /// `a` — `am`/`pm`.
    MeridiemLower,
    /// `Z` — UTC offset as `±HHMM`.
    Offset,
}

/// One element of a scanned pattern: a token or a verbatim literal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternItem {
    Token(Token),
    Literal(String),
}

/// Trial order for the scanner. Longer spellings strictly precede their
/// prefixes; this ordering is a correctness invariant.
const TOKEN_TABLE: &[(&str, Token)] = &[
    ("YYYY", Token::YearFull),
    ("MMMM", Token::MonthNameFull),
    ("dddd", Token::WeekdayFull),
    ("MMM", Token::MonthNameShort),
    ("ddd", Token::WeekdayShort),
    ("YY", Token::YearTwoDigit),
    ("MM", Token::MonthPadded),
    ("DD", Token::DayPadded),
    ("HH", Token::Hour24Padded),
    ("hh", Token::Hour12Padded),
    ("mm", Token::MinutePadded),
    ("ss", Token::SecondPadded),
    ("M", Token::Month),
    ("D", Token::Day),
    ("d", Token::WeekdayNarrow),
    ("H", Token::Hour24),
    ("h", Token::Hour12),
    ("m", Token::Minute),
    ("s", Token::Second),
    ("A", Token::MeridiemUpper),
    ("a", Token::MeridiemLower),
    ("Z", Token::Offset),
];

/// Scan a format string into tokens and literal runs.
///
/// Total: any text that is not a token is carried through as a literal, so
/// tokenization never fails. Pure string processing, no I/O.
pub fn tokenize(pattern: &str) -> Vec<PatternItem> {
    let mut items = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    'outer: while !rest.is_empty() {
        for (spelling, token) in TOKEN_TABLE {
            if let Some(after) = rest.strip_prefix(spelling) {
                if !literal.is_empty() {
                    items.push(PatternItem::Literal(std::mem::take(&mut literal)));
                }
                items.push(PatternItem::Token(*token));
                rest = after;
                continue 'outer;
            }
        }
        // Not a token at this position: consume one char into the literal run.
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            literal.push(ch);
        }
        rest = chars.as_str();
    }

    if !literal.is_empty() {
        items.push(PatternItem::Literal(literal));
    }
    items
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_iso_pattern() {
        let items = tokenize("YYYY-MM-DD");
        assert_eq!(
            items,
            vec![
                PatternItem::Token(Token::YearFull),
                PatternItem::Literal("-".to_string()),
                PatternItem::Token(Token::MonthPadded),
                PatternItem::Literal("-".to_string()),
                PatternItem::Token(Token::DayPadded),
            ]
        );
    }

    #[test]
    fn test_tokenize_longest_match_wins() {
        // MMMM must never split into MM + MM.
        assert_eq!(
            tokenize("MMMM"),
            vec![PatternItem::Token(Token::MonthNameFull)]
        );
        assert_eq!(
            tokenize("MMM"),
            vec![PatternItem::Token(Token::MonthNameShort)]
        );
        assert_eq!(
            tokenize("dddd"),
            vec![PatternItem::Token(Token::WeekdayFull)]
        );
    }

    #[test]
    fn test_tokenize_adjacent_literals_coalesce() {
        let items = tokenize("[at] h");
        assert_eq!(
            items,
            vec![
                PatternItem::Literal("[at] ".to_string()),
                PatternItem::Token(Token::Hour12),
            ]
        );
    }

    #[test]
    fn test_tokenize_is_total_on_arbitrary_text() {
        // No token letters at all: one verbatim literal run.
        assert_eq!(
            tokenize("!@# 123 ××"),
            vec![PatternItem::Literal("!@# 123 ××".to_string())]
        );
        assert_eq!(tokenize(""), Vec::<PatternItem>::new());
    }

    #[test]
    fn test_tokenize_full_datetime_with_offset() {
        let items = tokenize("YYYY-MM-DD HH:mm:ss Z");
        let tokens: Vec<_> = items
            .iter()
            .filter_map(|i| match i {
                PatternItem::Token(t) => Some(*t),
                PatternItem::Literal(_) => None,
            })
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::YearFull,
                Token::MonthPadded,
                Token::DayPadded,
                Token::Hour24Padded,
                Token::MinutePadded,
                Token::SecondPadded,
                Token::Offset,
            ]
        );
    }
}

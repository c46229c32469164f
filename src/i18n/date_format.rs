//! Date-format patterns: the letter-code templates stored in each locale.
//!
//! A pattern such as `"D, M d"` is split into runs of word characters and
//! runs of everything else. A word run that is exactly one of the
//! placeholder codes below is replaced; any other text is copied as-is.
//! This matches the calendar widget, which only substitutes a code when it
//! stands between non-word characters or the ends of the pattern.
//!
//! | code | meaning                         | example  |
//! |------|---------------------------------|----------|
//! | `d`  | day of month                    | `5`      |
//! | `dd` | day of month, two digits        | `05`     |
//! | `m`  | month number                    | `3`      |
//! | `mm` | month number, two digits        | `03`     |
//! | `y`  | year                            | `2024`   |
//! | `yy` | year, last two digits           | `24`     |
//! | `w`  | ISO week number                 | `9`      |
//! | `ww` | ISO week number, two digits     | `09`     |
//! | `D`  | weekday, first three letters    | `Tue`    |
//! | `DD` | weekday                         | `Tuesday`|
//! | `M`  | month name, first three letters | `Mar`    |
//! | `MM` | month name                      | `March`  |

use crate::i18n::record::LocaleRecord;
use chrono::{Datelike, NaiveDate};

/// A letter code recognized inside a date-format pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Day,
    DayPadded,
    Month,
    MonthPadded,
    Year,
    YearShort,
    Week,
    WeekPadded,
    WeekdayShort,
    Weekday,
    MonthNameShort,
    MonthName,
}

impl Placeholder {
    /// Match a whole word run against the placeholder codes.
    pub fn from_code(code: &str) -> Option<Placeholder> {
        let placeholder = match code {
            "d" => Placeholder::Day,
            "dd" => Placeholder::DayPadded,
            "m" => Placeholder::Month,
            "mm" => Placeholder::MonthPadded,
            "y" => Placeholder::Year,
            "yy" => Placeholder::YearShort,
            "w" => Placeholder::Week,
            "ww" => Placeholder::WeekPadded,
            "D" => Placeholder::WeekdayShort,
            "DD" => Placeholder::Weekday,
            "M" => Placeholder::MonthNameShort,
            "MM" => Placeholder::MonthName,
            _ => return None,
        };
        Some(placeholder)
    }

    fn render(self, record: &LocaleRecord, date: NaiveDate) -> String {
        match self {
            Placeholder::Day => date.day().to_string(),
            Placeholder::DayPadded => format!("{:02}", date.day()),
            Placeholder::Month => date.month().to_string(),
            Placeholder::MonthPadded => format!("{:02}", date.month()),
            Placeholder::Year => date.year().to_string(),
            Placeholder::YearShort => format!("{:02}", date.year().rem_euclid(100)),
            Placeholder::Week => date.iso_week().week().to_string(),
            Placeholder::WeekPadded => format!("{:02}", date.iso_week().week()),
            Placeholder::WeekdayShort => abbreviate(record.day_name(date.weekday())),
            Placeholder::Weekday => record.day_name(date.weekday()).to_string(),
            Placeholder::MonthNameShort => abbreviate(record.month_name(date.month())),
            Placeholder::MonthName => record.month_name(date.month()).to_string(),
        }
    }
}

/// One piece of a parsed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder),
}

/// Split a pattern into literal text and placeholders.
pub fn parse_pattern(pattern: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_word: Option<bool> = None;

    for (index, ch) in pattern.char_indices() {
        let word = is_word_char(ch);
        if in_word.is_some_and(|current| current != word) {
            segments.push(classify(&pattern[start..index]));
            start = index;
        }
        in_word = Some(word);
    }
    if start < pattern.len() {
        segments.push(classify(&pattern[start..]));
    }

    segments
}

/// Whether `pattern` contains at least one placeholder.
pub fn has_placeholder(pattern: &str) -> bool {
    parse_pattern(pattern)
        .iter()
        .any(|segment| matches!(segment, Segment::Placeholder(_)))
}

/// Render `date` through `pattern`, taking names from `record`.
///
/// # Arguments
/// * `record` - Locale supplying day and month names
/// * `pattern` - Date-format pattern (e.g. `"DD, d MM y"`)
/// * `date` - Calendar date to render
///
/// # Returns
/// The formatted string. Names missing from a malformed record render as
/// empty text rather than failing.
pub fn format_date(record: &LocaleRecord, pattern: &str, date: NaiveDate) -> String {
    parse_pattern(pattern)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.to_string(),
            Segment::Placeholder(placeholder) => placeholder.render(record, date),
        })
        .collect()
}

// JavaScript's \w: ASCII letters, digits and underscore only.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn classify(run: &str) -> Segment<'_> {
    match Placeholder::from_code(run) {
        Some(placeholder) => Segment::Placeholder(placeholder),
        None => Segment::Literal(run),
    }
}

fn abbreviate(name: &str) -> String {
    name.chars().take(3).collect()
}

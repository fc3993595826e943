//! Date formats and date extraction from titles.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

static TITLE_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\p{L}+)\s+(\d{1,2}),\s+(\d{4})").expect("valid title date regex")
});

const MONTHS: [(&str, u32); 25] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// Accepted date layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Day,
    /// `YYYY-MM`
    Month,
}

impl DateFormat {
    pub const ORDER: [DateFormat; 2] = [DateFormat::Day, DateFormat::Month];

    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Day => "%Y-%m-%d",
            Self::Month => "%Y-%m",
        }
    }

    /// Parse `value` in exactly this layout.
    ///
    /// The value must be written the canonical way: zero-padded fields and
    /// no surrounding text.
    pub fn parse(&self, value: &str) -> Option<ParsedDate> {
        let value = value.trim();
        let date = match self {
            Self::Day => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?,
            Self::Month => NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()?,
        };
        let parsed = ParsedDate { format: *self, date };
        (parsed.to_string() == value).then_some(parsed)
    }
}

/// A date cell parsed in one of the accepted layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub format: DateFormat,
    date: NaiveDate,
}

impl ParsedDate {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of month, only for full dates.
    pub fn day(&self) -> Option<u32> {
        match self.format {
            DateFormat::Day => Some(self.date.day()),
            DateFormat::Month => None,
        }
    }

    /// The full date, only for `YYYY-MM-DD` values.
    pub fn full_date(&self) -> Option<NaiveDate> {
        match self.format {
            DateFormat::Day => Some(self.date),
            DateFormat::Month => None,
        }
    }
}

impl fmt::Display for ParsedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(self.format.pattern()))
    }
}

/// Try every accepted layout in order.
pub fn parse_date(value: &str) -> Option<ParsedDate> {
    DateFormat::ORDER.iter().find_map(|format| format.parse(value))
}

/// Month number for an English or Spanish month name.
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

/// First `<Month> <day>, <year>` date written in a title.
pub fn date_from_title(title: &str) -> Option<NaiveDate> {
    TITLE_DATE_RE.captures_iter(title).find_map(|captures| {
        let month = month_number(&captures[1])?;
        let day = captures[2].parse().ok()?;
        let year = captures[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_tried_in_order() {
        let day = parse_date("1898-01-21").unwrap();
        assert_eq!(day.format, DateFormat::Day);
        assert_eq!(day.day(), Some(21));

        let month = parse_date("1898-01").unwrap();
        assert_eq!(month.format, DateFormat::Month);
        assert_eq!(month.year(), 1898);
        assert_eq!(month.day(), None);
        assert_eq!(month.to_string(), "1898-01");
    }

    #[test]
    fn rejects_non_canonical_dates() {
        assert!(parse_date("1898-1-21").is_none());
        assert!(parse_date("21/01/1898").is_none());
        assert!(parse_date("1898-02-30").is_none());
        assert!(parse_date("1898").is_none());
    }

    #[test]
    fn title_dates_in_both_languages() {
        assert_eq!(
            date_from_title("Letter from Juan Pérez, January 21, 1898"),
            NaiveDate::from_ymd_opt(1898, 1, 21)
        );
        assert_eq!(
            date_from_title("Carta de Juan Pérez, Marzo 5, 1902"),
            NaiveDate::from_ymd_opt(1902, 3, 5)
        );
        assert_eq!(
            date_from_title("Carta, setiembre 9, 1910"),
            NaiveDate::from_ymd_opt(1910, 9, 9)
        );
    }

    #[test]
    fn title_without_date() {
        assert_eq!(date_from_title("Letter to Pedro"), None);
        assert_eq!(date_from_title("Letter, Smarch 3, 1900"), None);
    }
}

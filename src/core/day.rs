//! Calendar-day keys
//!
//! A `DayKey` scopes both the answer of the day and the saved game. It is the
//! local calendar date, formatted `YYYY-MM-DD`.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const FORMAT: &str = "%Y-%m-%d";

/// Local calendar date used to scope daily state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Today's key in local time
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Build a key from year, month and day; `None` if the date does not exist
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Days since 0001-01-01, used as the seed for the answer of the day
    #[must_use]
    pub fn day_number(self) -> u64 {
        u64::try_from(self.0.num_days_from_ce()).unwrap_or_default()
    }

    /// The key for the day before, if representable
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl std::str::FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, FORMAT).map(Self)
    }
}

impl TryFrom<String> for DayKey {
    type Error = chrono::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_iso_date() {
        let key = DayKey::from_ymd(2026, 3, 7).unwrap();
        assert_eq!(key.to_string(), "2026-03-07");
    }

    #[test]
    fn parses_iso_date() {
        let key: DayKey = "2026-10-18".parse().unwrap();
        assert_eq!(key, DayKey::from_ymd(2026, 10, 18).unwrap());
        assert!("18/10/2026".parse::<DayKey>().is_err());
        assert!("2026-02-30".parse::<DayKey>().is_err());
    }

    #[test]
    fn previous_day_crosses_month() {
        let key = DayKey::from_ymd(2026, 3, 1).unwrap();
        assert_eq!(key.previous(), DayKey::from_ymd(2026, 2, 28));
    }

    #[test]
    fn day_number_increases_by_one_per_day() {
        let today = DayKey::from_ymd(2026, 1, 1).unwrap();
        let yesterday = today.previous().unwrap();
        assert_eq!(today.day_number(), yesterday.day_number() + 1);
    }

    #[test]
    fn serde_uses_string_form() {
        let key = DayKey::from_ymd(2026, 10, 18).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2026-10-18\"");

        let parsed: DayKey = serde_json::from_str("\"2026-10-18\"").unwrap();
        assert_eq!(parsed, key);
        assert!(serde_json::from_str::<DayKey>("\"yesterday\"").is_err());
    }
}

//! Month arithmetic for revenue bucketing
//!
//! The dashboard groups received payments into year-month buckets and
//! renders a trailing window of months ending at the current one. `MonthKey`
//! is the bucket key: it serializes as `"YYYY-MM"` (the same key obtained by
//! truncating an ISO date to its first 7 characters) and knows how to walk
//! backwards through the calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to month handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month {month} in year {year}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Unparseable month key: {0}")]
    Unparseable(String),
}

/// A calendar year-month, used as a revenue bucket key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

/// pt-BR short month names, indexed by month - 1
const SHORT_MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

impl MonthKey {
    /// Creates a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The previous calendar month
    pub fn pred(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The bucket key, e.g. `"2024-03"`
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Localized short month label (pt-BR), e.g. `"mar"`
    pub fn label(&self) -> &'static str {
        SHORT_MONTHS_PT[(self.month - 1) as usize]
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for MonthKey {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| TemporalError::Unparseable(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| TemporalError::Unparseable(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| TemporalError::Unparseable(s.to_string()))?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("{e}")))
    }
}

/// The trailing window of `len` months ending at the month containing `end`,
/// in chronological order. The current month is computed first, iterated
/// backwards, then reversed.
pub fn trailing_months(end: NaiveDate, len: usize) -> Vec<MonthKey> {
    let mut months = Vec::with_capacity(len);
    let mut current = MonthKey::from_date(end);
    for _ in 0..len {
        months.push(current);
        current = current.pred();
    }
    months.reverse();
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_matches_iso_date_prefix() {
        let d = date(2024, 3, 15);
        let iso = d.to_string();
        assert_eq!(MonthKey::from_date(d).key(), &iso[..7]);
    }

    #[test]
    fn pred_crosses_year_boundary() {
        let jan = MonthKey::new(2024, 1).unwrap();
        assert_eq!(jan.pred(), MonthKey::new(2023, 12).unwrap());
    }

    #[test]
    fn trailing_window_is_chronological() {
        let window = trailing_months(date(2024, 2, 10), 6);
        let keys: Vec<String> = window.iter().map(MonthKey::key).collect();
        assert_eq!(
            keys,
            ["2023-09", "2023-10", "2023-11", "2023-12", "2024-01", "2024-02"]
        );
    }

    #[test]
    fn labels_are_pt_br() {
        assert_eq!(MonthKey::new(2024, 1).unwrap().label(), "jan");
        assert_eq!(MonthKey::new(2024, 12).unwrap().label(), "dez");
    }

    #[test]
    fn rejects_invalid_month() {
        assert_eq!(
            MonthKey::new(2024, 13),
            Err(TemporalError::InvalidMonth {
                year: 2024,
                month: 13
            })
        );
    }

    #[test]
    fn parses_its_own_key() {
        let key = MonthKey::new(2023, 7).unwrap();
        assert_eq!(key.key().parse::<MonthKey>().unwrap(), key);
    }
}

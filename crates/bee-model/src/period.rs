//! Reporting periods.
//!
//! USDA releases label observations by quarter (`2023-Q1`) while the
//! processed exports carry month or day dates (`2023-01`, `2023-01-01`,
//! `2023-01-01 00:00:00`). All of them parse into a [`Period`] that is
//! identified by the first calendar day it covers: `2015-01`, `2015-01-01` and
//! `2015-Q1` are the same period and the label keeps the spelling first seen.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::ModelError;

/// Granularity of a period label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKind {
    Year,
    Quarter,
    Month,
    Day,
}

#[derive(Debug, Clone, Copy)]
pub struct Period {
    start: NaiveDate,
    kind: PeriodKind,
}

impl Period {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let trimmed = raw.trim();
        let invalid = || ModelError::InvalidPeriod(raw.to_string());
        if trimmed.is_empty() {
            return Err(invalid());
        }
        if let Some(period) = parse_quarter(trimmed) {
            return Ok(period);
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::day(date));
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
            return Ok(Self::day(datetime.date()));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
            return Ok(Self {
                start: date,
                kind: PeriodKind::Month,
            });
        }
        if trimmed.len() == 4
            && let Ok(year) = trimmed.parse::<i32>()
        {
            let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
            return Ok(Self {
                start,
                kind: PeriodKind::Year,
            });
        }
        Err(invalid())
    }

    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            kind: PeriodKind::Day,
        }
    }

    pub fn month(year: i32, month: u32) -> Result<Self, ModelError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ModelError::InvalidPeriod(format!("{year}-{month:02}")))?;
        Ok(Self {
            start,
            kind: PeriodKind::Month,
        })
    }

    pub fn quarter(year: i32, quarter: u32) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidPeriod(format!("{year}-Q{quarter}"));
        if !(1..=4).contains(&quarter) {
            return Err(invalid());
        }
        let start = NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1).ok_or_else(invalid)?;
        Ok(Self {
            start,
            kind: PeriodKind::Quarter,
        })
    }

    /// First calendar day covered by the period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    pub fn label(&self) -> String {
        match self.kind {
            PeriodKind::Year => format!("{}", self.start.year()),
            PeriodKind::Quarter => {
                format!("{}-Q{}", self.start.year(), (self.start.month() - 1) / 3 + 1)
            }
            PeriodKind::Month => self.start.format("%Y-%m").to_string(),
            PeriodKind::Day => self.start.format("%Y-%m-%d").to_string(),
        }
    }
}

fn parse_quarter(value: &str) -> Option<Period> {
    let upper = value.to_ascii_uppercase();
    let (year, quarter) = upper
        .split_once("-Q")
        .or_else(|| upper.split_once(" Q"))?;
    if year.len() != 4 {
        return None;
    }
    let year = year.parse::<i32>().ok()?;
    let quarter = quarter.trim().parse::<u32>().ok()?;
    Period::quarter(year, quarter).ok()
}

impl PartialEq for Period {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl Eq for Period {}

impl Hash for Period {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start)
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Period {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl serde::Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

//! Date selection and the zero-padded month/day key derived from it.

use std::fmt;

use chrono::{Datelike, NaiveDate};

const LABEL_FORMAT: &str = "%B %-d";
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Two-character, zero-padded month (1-based) and day of month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthDay {
    pub month: String,
    pub day: String,
}

impl MonthDay {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: pad2(date.month()),
            day: pad2(date.day()),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

fn pad2(value: u32) -> String {
    format!("{value:02}")
}

/// The currently chosen calendar date together with everything derived from
/// it. Built in one step so the key and label never disagree with the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSelection {
    pub date: NaiveDate,
    pub key: MonthDay,
    pub label: String,
}

impl DateSelection {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            key: MonthDay::from_date(date),
            label: date.format(LABEL_FORMAT).to_string(),
        }
    }

    /// Parses `YYYY-MM-DD` or `MM/DD/YYYY`. Anything else is a cleared
    /// selection.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
            .map(Self::new)
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;

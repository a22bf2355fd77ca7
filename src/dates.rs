use chrono::{DateTime, Local, Months, NaiveDate, TimeZone};
use std::fmt;

/// Wire format for `start-date` / `end-date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A report boundary: either a calendar date or a string passed through as-is.
///
/// Strings are never validated, so relative values the API understands
/// (`"today"`, `"30daysAgo"`) work alongside explicit dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    Text(String),
}

impl DateValue {
    /// Collapse a date into its `YYYY-MM-DD` text form; text stays untouched.
    pub fn normalized(self) -> Self {
        match self {
            DateValue::Date(date) => DateValue::Text(format_date(date)),
            text => text,
        }
    }

    pub fn as_wire(&self) -> String {
        match self {
            DateValue::Date(date) => format_date(*date),
            DateValue::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_wire())
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Date(date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateValue {
    fn from(datetime: DateTime<Tz>) -> Self {
        DateValue::Date(datetime.date_naive())
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        DateValue::Text(text.to_string())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        DateValue::Text(text)
    }
}

/// Format a date as zero-padded `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn default_start() -> DateValue {
    DateValue::Date(Local::now().date_naive())
}

pub fn default_end() -> DateValue {
    DateValue::Date(one_month_before(Local::now().date_naive()))
}

/// Shift back one calendar month, clamping to the end of a shorter month.
pub fn one_month_before(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Four-digit year, one or two digit month and day, nothing around them.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("valid regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Date must be YYYY-MM-DD (got '{0}')")]
    InvalidDate(String),
    #[error("Start date must be before end date ({start} > {end})")]
    StartAfterEnd { start: String, end: String },
}

/// A validated `start..=end` range.
///
/// The literal strings are kept because synthetic reviews echo them back
/// verbatim rather than reformatting the parsed dates.
#[derive(Debug, Clone)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn parse(start: &str, end: &str) -> Result<Self, InputError> {
        let start_date = parse_date(start)?;
        let end_date = parse_date(end)?;

        if start_date > end_date {
            return Err(InputError::StartAfterEnd {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(DateRange {
            start: start.to_string(),
            end: end.to_string(),
            start_date,
            end_date,
        })
    }
}

pub fn parse_date(text: &str) -> Result<NaiveDate, InputError> {
    if !DATE_SHAPE.is_match(text) {
        return Err(InputError::InvalidDate(text.to_string()));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(text.to_string()))
}

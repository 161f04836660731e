// Row types passed between the loader, the parser and the event builder.
use chrono::{NaiveDate, NaiveTime};

/// One (section, meeting pattern) pair read from the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScheduleRow {
    pub section: String,
    pub pattern: String,
}

impl RawScheduleRow {
    pub fn new(section: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            pattern: pattern.into(),
        }
    }
}

/// A meeting pattern broken into its structured fields.
///
/// `start_date <= end_date`, `start_time < end_time` and `days` is non-empty
/// for every row produced by the parser. Weekday tokens are kept as written
/// ("Mon", "Wed", ...) and only validated when events are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScheduleRow {
    pub section: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<String>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
}

// Splits meeting-pattern text ("Period | Days | Time | Location") into structured fields.
use crate::error::{Result, ScheduleError};
use crate::model::{ParsedScheduleRow, RawScheduleRow};
use chrono::{NaiveDate, NaiveTime};

const FIELD_SEPARATOR: char = '|';
const PERIOD_SEPARATOR: &str = " - ";
const TIME_SEPARATOR: char = '-';

/// Parses one expanded row. The section identifier is carried through as-is.
pub fn parse_row(row: &RawScheduleRow) -> Result<ParsedScheduleRow> {
    parse_pattern(&row.section, &row.pattern)
}

pub fn parse_rows(rows: &[RawScheduleRow]) -> Result<Vec<ParsedScheduleRow>> {
    rows.iter().map(parse_row).collect()
}

/// Parses e.g. `2024-01-16 - 2024-05-06 | Mon Wed Fri | 10:00 a.m.-10:50 a.m. | Room 101`.
pub fn parse_pattern(section: &str, pattern: &str) -> Result<ParsedScheduleRow> {
    let fields: Vec<&str> = pattern.split(FIELD_SEPARATOR).collect();
    let [period, days, time, location] = fields[..] else {
        return Err(ScheduleError::format(
            pattern,
            format!(
                "expected 4 '|'-separated fields (period, days, time, location), found {}",
                fields.len()
            ),
        ));
    };

    let (start_date, end_date) = parse_period(pattern, period)?;
    let (start_time, end_time) = parse_time_range(pattern, time)?;

    let days: Vec<String> = days.split_whitespace().map(str::to_string).collect();
    if days.is_empty() {
        return Err(ScheduleError::format(pattern, "no meeting days given"));
    }

    Ok(ParsedScheduleRow {
        section: section.trim().to_string(),
        start_date,
        end_date,
        days,
        start_time,
        end_time,
        location: location.trim().to_string(),
    })
}

fn parse_period(pattern: &str, period: &str) -> Result<(NaiveDate, NaiveDate)> {
    let parts: Vec<&str> = period.split(PERIOD_SEPARATOR).collect();
    let [start, end] = parts[..] else {
        return Err(ScheduleError::format(
            pattern,
            format!("period '{}' is not 'YYYY-MM-DD - YYYY-MM-DD'", period.trim()),
        ));
    };

    let start = parse_date(pattern, start)?;
    let end = parse_date(pattern, end)?;
    if end < start {
        return Err(ScheduleError::format(
            pattern,
            format!("period ends ({end}) before it starts ({start})"),
        ));
    }
    Ok((start, end))
}

fn parse_date(pattern: &str, s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        ScheduleError::format(pattern, format!("invalid date '{}': {}", s.trim(), e))
    })
}

fn parse_time_range(pattern: &str, time: &str) -> Result<(NaiveTime, NaiveTime)> {
    let parts: Vec<&str> = time.split(TIME_SEPARATOR).collect();
    let [start, end] = parts[..] else {
        return Err(ScheduleError::format(
            pattern,
            format!("time range '{}' is not 'start-end'", time.trim()),
        ));
    };

    let start = normalize_time(start).map_err(|reason| ScheduleError::format(pattern, reason))?;
    let end = normalize_time(end).map_err(|reason| ScheduleError::format(pattern, reason))?;
    if end <= start {
        return Err(ScheduleError::format(
            pattern,
            format!(
                "class ends ({}) no later than it starts ({})",
                end.format("%H:%M"),
                start.format("%H:%M")
            ),
        ));
    }
    Ok((start, end))
}

/// Reads a 12-hour clock time as printed in course exports ("1:05 p.m.", "10:00 AM").
///
/// Only the exact markers "a.m." and "p.m." are rewritten; anything else must
/// already be in "h:mm AM/PM" form, with whitespace before the marker.
pub fn normalize_time(raw: &str) -> std::result::Result<NaiveTime, String> {
    let normalized = raw.replace("a.m.", "AM").replace("p.m.", "PM");

    // chrono treats the space in "%I:%M %p" as optional; "10:00AM" must not pass.
    let mut parts = normalized.split_whitespace();
    let (Some(clock), Some(marker), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!(
            "invalid time '{}': expected 'h:mm AM/PM'",
            raw.trim()
        ));
    };

    NaiveTime::parse_from_str(&format!("{clock} {marker}"), "%I:%M %p")
        .map_err(|e| format!("invalid time '{}': {}", raw.trim(), e))
}

/// `normalize_time` rendered in 24-hour "HH:MM" form.
pub fn to_24h(raw: &str) -> std::result::Result<String, String> {
    normalize_time(raw).map(|t| t.format("%H:%M").to_string())
}

// Turns parsed meeting patterns into weekly recurring calendar events.
use crate::error::{Result, ScheduleError};
use crate::model::{CalendarEventRecord, ParsedScheduleRow, Recurrence, Weekday};
use chrono::Days;

/// Builds the recurring event for one meeting pattern.
///
/// Both occurrence timestamps sit on the schedule's start date; the BYDAY list
/// supplies the remaining weekdays. UNTIL is pushed one day past the end date
/// so the final class day is still generated.
pub fn build_event(row: &ParsedScheduleRow) -> Result<CalendarEventRecord> {
    let days = row
        .days
        .iter()
        .map(|token| Weekday::from_abbrev(token))
        .collect::<Result<Vec<_>>>()?;

    let until = row.end_date.checked_add_days(Days::new(1)).ok_or_else(|| {
        ScheduleError::format(
            &format!("{} - {}", row.start_date, row.end_date),
            format!("no calendar day follows end date {}", row.end_date),
        )
    })?;

    Ok(CalendarEventRecord {
        title: row.section.trim().to_string(),
        start: row.start_date.and_time(row.start_time),
        end: row.start_date.and_time(row.end_time),
        location: row.location.trim().to_string(),
        recurrence: Recurrence { days, until },
    })
}

/// One event per row, in input order. Rows of the same section are never merged.
pub fn build_events(rows: &[ParsedScheduleRow]) -> Result<Vec<CalendarEventRecord>> {
    rows.iter().map(build_event).collect()
}

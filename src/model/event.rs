// Calendar event records produced by the event builder.
use crate::model::weekday::Weekday;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rrule::RRuleSet;
use std::str::FromStr;

/// Weekly recurrence of a meeting pattern.
///
/// `until` is the first day that is no longer part of the course
/// (last class day + 1), so the last class day stays inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    pub days: Vec<Weekday>,
    pub until: NaiveDate,
}

impl Recurrence {
    /// RRULE value, without the `RRULE:` prefix.
    ///
    /// UNTIL is written as a floating date-time so its value type matches the
    /// floating DTSTART of the event.
    pub fn to_rrule_value(&self) -> String {
        self.format_rule("")
    }

    fn format_rule(&self, until_suffix: &str) -> String {
        let byday: Vec<&str> = self.days.iter().map(|d| d.byday_code()).collect();
        format!(
            "FREQ=WEEKLY;BYDAY={};UNTIL={}T000000{}",
            byday.join(","),
            self.until.format("%Y%m%d"),
            until_suffix
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventRecord {
    pub title: String,
    /// First occurrence, anchored on the schedule's start date.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: String,
    pub recurrence: Recurrence,
}

impl CalendarEventRecord {
    /// Expands the recurrence rule into concrete start times, at most `limit` of them.
    ///
    /// The first occurrence is always `start`, as calendar clients show it,
    /// even when its weekday is not in the BYDAY list.
    ///
    /// Times carry no timezone; they are fed to the rrule engine as UTC and
    /// read back as naive wall-clock values.
    pub fn occurrences(&self, limit: usize) -> Result<Vec<NaiveDateTime>> {
        let dtstart_str = self.start.format("%Y%m%dT%H%M%SZ").to_string();
        // The engine requires UNTIL to be UTC when DTSTART is.
        let rule = self.recurrence.format_rule("Z");
        let rrule_string = format!("DTSTART:{}\nRRULE:{}", dtstart_str, rule);

        let rrule_set = RRuleSet::from_str(&rrule_string)
            .with_context(|| format!("Invalid recurrence rule for '{}'", self.title))?;

        let generated = rrule_set
            .into_iter()
            .map(|d| d.naive_utc())
            .filter(|d| *d != self.start);

        Ok(std::iter::once(self.start)
            .chain(generated)
            .take(limit)
            .collect())
    }
}

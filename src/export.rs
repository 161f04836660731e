// Serializes event records into an iCalendar document and writes it to disk.
use crate::model::CalendarEventRecord;
use anyhow::{Context, Result};
use chrono::Utc;
use icalendar::{Calendar, Component, Event, EventLike};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const OUTPUT_FILENAME: &str = "courses.ics";

pub fn to_event(record: &CalendarEventRecord) -> Event {
    let mut event = Event::new();
    event
        .uid(&Uuid::new_v4().to_string())
        .timestamp(Utc::now())
        .summary(&record.title)
        .starts(record.start)
        .ends(record.end)
        .location(&record.location)
        .add_property("RRULE", record.recurrence.to_rrule_value());
    event.done()
}

pub fn to_calendar(records: &[CalendarEventRecord], name: Option<&str>) -> Calendar {
    let mut calendar = Calendar::new();
    if let Some(name) = name {
        calendar.name(name);
    }
    for record in records {
        calendar.push(to_event(record));
    }
    calendar.done()
}

pub fn to_ics_string(records: &[CalendarEventRecord], name: Option<&str>) -> String {
    to_calendar(records, name).to_string()
}

/// Writes `courses.ics` into `output_dir`, replacing any previous file, and
/// returns its path. The directory itself is not created.
pub fn write_calendar(
    records: &[CalendarEventRecord],
    output_dir: &Path,
    name: Option<&str>,
) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        anyhow::bail!(
            "Output directory '{}' does not exist or is not a directory",
            output_dir.display()
        );
    }

    let path = output_dir.join(OUTPUT_FILENAME);
    let ics = to_ics_string(records, name);
    atomic_write(&path, ics)
        .with_context(|| format!("Failed to write calendar to '{}'", path.display()))?;

    log::info!("Wrote {} events to {}", records.len(), path.display());
    Ok(path)
}

/// Write to a sibling temp file, then rename over the target.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

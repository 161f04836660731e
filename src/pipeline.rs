// Runs the loader, parser, builder and serializer in order.
use crate::builder::build_event;
use crate::config::{Config, ErrorPolicy};
use crate::error::{Result as ScheduleResult, ScheduleError};
use crate::export::write_calendar;
use crate::loader::{ScheduleTable, expand_rows, load_workbook};
use crate::model::{CalendarEventRecord, RawScheduleRow};
use crate::parser::parse_row;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A meeting pattern that was left out of the calendar under `ErrorPolicy::Skip`.
#[derive(Debug)]
pub struct RowFailure {
    pub row: RawScheduleRow,
    pub error: ScheduleError,
}

#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub events: Vec<CalendarEventRecord>,
    pub skipped: Vec<RowFailure>,
}

#[derive(Debug)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub event_count: usize,
    pub skipped: Vec<RowFailure>,
}

/// Parses and builds every expanded row. Under `Abort` the first row-level
/// error is returned; under `Skip` it is recorded and the row dropped.
pub fn build_from_rows(rows: &[RawScheduleRow], policy: ErrorPolicy) -> ScheduleResult<BuildOutcome> {
    let mut outcome = BuildOutcome::default();

    for row in rows {
        match parse_row(row).and_then(|parsed| build_event(&parsed)) {
            Ok(event) => outcome.events.push(event),
            Err(error) if policy == ErrorPolicy::Skip && error.is_row_level() => {
                log::warn!("Skipping row for section '{}': {}", row.section, error);
                outcome.skipped.push(RowFailure {
                    row: row.clone(),
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }

    log::debug!(
        "Built {} events ({} rows skipped)",
        outcome.events.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}

pub fn build_from_table(table: &ScheduleTable, policy: ErrorPolicy) -> ScheduleResult<BuildOutcome> {
    let rows = expand_rows(table)?;
    build_from_rows(&rows, policy)
}

/// Loads the workbook named in `config` and builds its events without writing anything.
pub fn plan(config: &Config) -> Result<BuildOutcome> {
    let table = load_workbook(&config.input_path).with_context(|| {
        format!(
            "Failed to load schedule from '{}'",
            config.input_path.display()
        )
    })?;
    Ok(build_from_table(&table, config.error_policy)?)
}

/// Builds events from `table` and writes `courses.ics` into `output_dir`.
pub fn convert_table(
    table: &ScheduleTable,
    output_dir: &Path,
    policy: ErrorPolicy,
    calendar_name: Option<&str>,
) -> Result<ConversionReport> {
    let outcome = build_from_table(table, policy)?;
    write_outcome(outcome, output_dir, calendar_name)
}

/// Full run: read `config.input_path`, write `<config.output_dir>/courses.ics`.
pub fn convert(config: &Config) -> Result<ConversionReport> {
    log::info!(
        "Converting {} (error policy: {})",
        config.input_path.display(),
        config.error_policy
    );
    let outcome = plan(config)?;
    write_outcome(
        outcome,
        &config.output_dir,
        config.calendar_name.as_deref(),
    )
}

fn write_outcome(
    outcome: BuildOutcome,
    output_dir: &Path,
    calendar_name: Option<&str>,
) -> Result<ConversionReport> {
    let output_path = write_calendar(&outcome.events, output_dir, calendar_name)?;
    Ok(ConversionReport {
        output_path,
        event_count: outcome.events.len(),
        skipped: outcome.skipped,
    })
}

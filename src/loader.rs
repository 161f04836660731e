// Reads the schedule spreadsheet and expands meeting-pattern cells into rows.
use crate::error::{Result, ScheduleError};
use crate::model::RawScheduleRow;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

pub const SECTION_COLUMN: &str = "Section";
pub const MEETING_PATTERNS_COLUMN: &str = "Meeting Patterns";

/// How far down the sheet the header row may sit. Course exports put a
/// title row above it, so the header is usually the second row.
const HEADER_SEARCH_ROWS: usize = 10;

/// A sheet's cells rendered as text, row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleTable {
    pub rows: Vec<Vec<String>>,
}

/// Location of the two columns the converter needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderSchema {
    header_row: usize,
    section_col: usize,
    patterns_col: usize,
}

impl ScheduleTable {
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn locate_header(&self) -> Result<HeaderSchema> {
        for (idx, row) in self.rows.iter().take(HEADER_SEARCH_ROWS).enumerate() {
            let find = |name: &str| row.iter().position(|c| c.trim() == name);
            if let (Some(section_col), Some(patterns_col)) =
                (find(SECTION_COLUMN), find(MEETING_PATTERNS_COLUMN))
            {
                return Ok(HeaderSchema {
                    header_row: idx,
                    section_col,
                    patterns_col,
                });
            }
        }

        // Report the first column that never shows up in any candidate header row.
        let seen = |name: &str| {
            self.rows
                .iter()
                .take(HEADER_SEARCH_ROWS)
                .any(|row| row.iter().any(|c| c.trim() == name))
        };
        let column = if seen(SECTION_COLUMN) {
            MEETING_PATTERNS_COLUMN
        } else {
            SECTION_COLUMN
        };
        Err(ScheduleError::MissingColumn {
            column: column.to_string(),
        })
    }
}

/// Opens a workbook (xlsx, xlsm, xls or ods) and renders its first sheet as text.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<ScheduleTable> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    let Some(first) = sheet_names.first() else {
        log::warn!("Workbook {} has no sheets", path.display());
        return Ok(ScheduleTable::default());
    };

    let range = workbook.worksheet_range(first)?;
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(format_cell).collect())
        .collect();

    log::debug!(
        "Read {} rows from sheet '{}' of {}",
        rows.len(),
        first,
        path.display()
    );
    Ok(ScheduleTable { rows })
}

/// Selects the section and meeting-pattern columns and emits one row per
/// non-blank meeting-pattern line.
pub fn expand_rows(table: &ScheduleTable) -> Result<Vec<RawScheduleRow>> {
    let schema = table.locate_header()?;
    let mut out = Vec::new();

    for row_idx in (schema.header_row + 1)..table.rows.len() {
        let section = section_id(table.cell(row_idx, schema.section_col));
        let patterns = table.cell(row_idx, schema.patterns_col);

        for line in patterns.lines().filter(|l| !l.trim().is_empty()) {
            out.push(RawScheduleRow::new(section.clone(), line));
        }
    }

    log::info!(
        "Expanded {} data rows into {} meeting patterns",
        table.rows.len().saturating_sub(schema.header_row + 1),
        out.len()
    );
    Ok(out)
}

/// "CS101-001 - Intro to Programming" -> "CS101-001"
fn section_id(cell: &str) -> String {
    cell.split(" - ").next().unwrap_or(cell).trim().to_string()
}

/// Format a cell value as a string
fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Format float, removing unnecessary trailing zeros
            let s = f.to_string();
            if s.contains('.') {
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                s
            }
        }
        Data::String(s) => s.clone(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format!("{dt}"),
        Data::DateTimeIso(dt) => dt.clone(),
        Data::DurationIso(d) => d.clone(),
        Data::Error(e) => format!("ERROR: {e:?}"),
        Data::Empty => String::new(),
    }
}

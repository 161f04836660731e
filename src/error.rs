// Error types for schedule loading, parsing and event building.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A meeting pattern does not have the `Period | Days | Time | Location` shape,
    /// or one of its dates/times could not be read.
    #[error("malformed meeting pattern '{pattern}': {reason}")]
    Format { pattern: String, reason: String },

    #[error("unknown weekday '{token}' (expected one of Mon Tue Wed Thu Fri Sat Sun)")]
    UnknownWeekday { token: String },

    #[error("required column '{column}' not found in the spreadsheet header")]
    MissingColumn { column: String },

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    pub fn format(pattern: &str, reason: impl Into<String>) -> Self {
        ScheduleError::Format {
            pattern: pattern.trim().to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors tied to a single meeting pattern, which the skip policy may step over.
    pub fn is_row_level(&self) -> bool {
        matches!(
            self,
            ScheduleError::Format { .. } | ScheduleError::UnknownWeekday { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

// File: ./src/model/mod.rs
pub mod event;
pub mod row;
pub mod weekday;

pub use event::{CalendarEventRecord, Recurrence};
pub use row::{ParsedScheduleRow, RawScheduleRow};
pub use weekday::Weekday;

// Weekday abbreviations as they appear in meeting patterns.
use crate::error::{Result, ScheduleError};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Parses the exact three-letter English abbreviation. Case-sensitive:
    /// "mon" and "Monday" are rejected.
    pub fn from_abbrev(token: &str) -> Result<Self> {
        match token {
            "Mon" => Ok(Weekday::Mon),
            "Tue" => Ok(Weekday::Tue),
            "Wed" => Ok(Weekday::Wed),
            "Thu" => Ok(Weekday::Thu),
            "Fri" => Ok(Weekday::Fri),
            "Sat" => Ok(Weekday::Sat),
            "Sun" => Ok(Weekday::Sun),
            _ => Err(ScheduleError::UnknownWeekday {
                token: token.to_string(),
            }),
        }
    }

    /// Two-letter BYDAY code used in RRULE values.
    pub fn byday_code(self) -> &'static str {
        match self {
            Weekday::Mon => "MO",
            Weekday::Tue => "TU",
            Weekday::Wed => "WE",
            Weekday::Thu => "TH",
            Weekday::Fri => "FR",
            Weekday::Sat => "SA",
            Weekday::Sun => "SU",
        }
    }
}

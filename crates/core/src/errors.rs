use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid time format: '{0}'. Use 'HH:MM am/pm' or 'HH am/pm'")]
    InvalidTimeFormat(String),

    #[error("Invalid time interval: '{0}'. Use 'HH:MM am/pm - HH:MM am/pm'")]
    InvalidInterval(String),

    #[error("Invalid date-time: '{0}'. Must provide a valid date-time string")]
    InvalidDateTime(String),
}

pub type HoursResult<T> = Result<T, HoursError>;

use fc_core::FcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FcError> for ScheduleError {
    fn from(e: FcError) -> Self {
        match e {
            FcError::Io(io) => ScheduleError::Io(io),
            other => ScheduleError::Parse(other.to_string()),
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

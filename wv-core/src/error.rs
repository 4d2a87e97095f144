//! Rejections raised at the data-entry boundary.

use thiserror::Error;

/// Why a candidate record was refused before reaching the weather log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("temperature {0:?} is not a number")]
    InvalidTemperature(String),
    #[error("humidity {0:?} is not a number")]
    InvalidHumidity(String),
    #[error("humidity {0}% is outside 0-100")]
    HumidityOutOfRange(i64),
    #[error("unknown weather condition {0:?}")]
    UnknownCondition(String),
}

use ulid::Ulid;

use crate::model::Ms;

/// Every failure is deterministic for a given input — none are transient, the
/// caller never gains anything by retrying unchanged.
#[derive(Debug)]
pub enum EngineError {
    NotFound(Ulid),
    NotAvailable(Ulid),
    InvalidTime { start: Ms, end: Ms },
    Forbidden(&'static str),
    Conflict(Ulid),
    InvalidState(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound(id) => write!(f, "not found: {id}"),
            EngineError::NotAvailable(id) => {
                write!(f, "item {id} is not available for booking")
            }
            EngineError::InvalidTime { start, end } => {
                write!(f, "invalid booking time: start {start} is not before end {end}")
            }
            EngineError::Forbidden(msg) => write!(f, "forbidden: {msg}"),
            EngineError::Conflict(id) => {
                write!(f, "booking {id} is not awaiting a decision")
            }
            EngineError::InvalidState(token) => {
                write!(f, "unrecognized state: {token}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

//! Monitor error types.

use thiserror::Error;

use super::state::Generation;
use crate::position::MalformedPosition;

/// Errors returned to callers that feed the monitor directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MonitorError {
    #[error("Malformed position: {0}")]
    MalformedPosition(#[from] MalformedPosition),

    #[error("Monitor is not running a simulated session")]
    NotSimulating,

    #[error("Input belongs to session {held}, current session is {current}")]
    StaleSession {
        held: Generation,
        current: Generation,
    },
}

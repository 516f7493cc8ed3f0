//! Positioning provider interface.
//!
//! A provider is the device-side source of real positions. It is consumed,
//! never implemented, by the engine: the session driver asks it for
//! permission, a one-shot fix, and a continuous watch stream.
//!
//! Dropping a [`PositionStream`] unsubscribes from the provider.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;

use super::state::ErrorCause;
use crate::position::Position;

/// Errors reported by a positioning provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("Timed out waiting for a position")]
    Timeout,
}

impl ProviderError {
    /// Session error state this failure maps to.
    pub fn cause(&self) -> ErrorCause {
        match self {
            Self::PermissionDenied => ErrorCause::PermissionDenied,
            Self::PositionUnavailable(_) => ErrorCause::PositionUnavailable,
            Self::Timeout => ErrorCause::Timeout,
        }
    }
}

/// Options passed to the provider for a fix or a watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    /// Prefer a precise (slower, more power hungry) fix.
    pub high_accuracy: bool,

    /// Time budget the provider should respect for each fix.
    pub timeout: Duration,

    /// Oldest cached fix the provider may return. Zero forces a fresh fix.
    pub maximum_age: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(20),
            maximum_age: Duration::ZERO,
        }
    }
}

/// Continuous stream of samples from a provider.
pub type PositionStream = mpsc::Receiver<Result<Position, ProviderError>>;

/// Trait for device positioning sources.
///
/// Implementations must be cheap to share behind an `Arc`; the session driver
/// calls them from a spawned task.
pub trait PositioningProvider: Send + Sync + 'static {
    /// Ask for location access.
    fn request_permission(&self) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Obtain a single fix.
    fn current_position(
        &self,
        options: &WatchOptions,
    ) -> impl Future<Output = Result<Position, ProviderError>> + Send;

    /// Start a continuous watch.
    fn watch(&self, options: &WatchOptions) -> Result<PositionStream, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_cause_mapping() {
        assert_eq!(
            ProviderError::PermissionDenied.cause(),
            ErrorCause::PermissionDenied
        );
        assert_eq!(
            ProviderError::PositionUnavailable("no satellites".into()).cause(),
            ErrorCause::PositionUnavailable
        );
        assert_eq!(ProviderError::Timeout.cause(), ErrorCause::Timeout);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ProviderError::PositionUnavailable("no satellites".into()).to_string(),
            "Position unavailable: no satellites"
        );
    }
}

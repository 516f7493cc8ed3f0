//! Events produced by a monitor session.

use serde::Serialize;
use tokio::sync::broadcast;

use super::state::Generation;
use crate::accuracy::AccuracyTier;
use crate::position::Position;
use crate::resolver::ZoneStatus;
use crate::throttle::AlertEvent;

/// Emitted for every processed sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingUpdate {
    pub position: Position,
    pub status: ZoneStatus,
    pub accuracy: AccuracyTier,
    pub generation: Generation,
}

/// Result of processing one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOutcome {
    pub update: TrackingUpdate,
    /// Present when the throttler let an alert through.
    pub alert: Option<AlertEvent>,
}

/// Trait for subscribing to monitor output (push API).
pub trait GeofenceBroadcaster: Send + Sync {
    /// Subscribe to every tracking update.
    fn subscribe_updates(&self) -> broadcast::Receiver<TrackingUpdate>;

    /// Subscribe to throttled zone alerts.
    fn subscribe_alerts(&self) -> broadcast::Receiver<AlertEvent>;
}

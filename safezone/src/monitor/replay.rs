//! Replay positioning provider.
//!
//! Plays back a scripted track as if it came from a device: the first point
//! answers one-shot fix requests, the rest are streamed by the watch at a
//! fixed interval. Useful for demos and for exercising the full GPS session
//! path without hardware.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::provider::{PositionStream, PositioningProvider, ProviderError, WatchOptions};
use crate::position::{Position, PositionSource};

/// Default delay between streamed samples.
pub const DEFAULT_REPLAY_INTERVAL: Duration = Duration::from_millis(1000);

/// One scripted sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayFix {
    pub lat: f64,
    pub lng: f64,
    pub accuracy_meters: Option<f64>,
}

impl ReplayFix {
    pub fn new(lat: f64, lng: f64, accuracy_meters: Option<f64>) -> Self {
        Self {
            lat,
            lng,
            accuracy_meters,
        }
    }

    /// Build a GPS sample captured now.
    ///
    /// Coordinates are passed through unvalidated, the monitor checks them.
    fn to_position(self) -> Position {
        Position {
            lat: self.lat,
            lng: self.lng,
            accuracy_meters: self.accuracy_meters,
            source: PositionSource::Gps,
            captured_at: Instant::now(),
        }
    }
}

/// Provider that replays a fixed track.
#[derive(Debug, Clone)]
pub struct ReplayProvider {
    track: Vec<ReplayFix>,
    interval: Duration,
    deny_permission: bool,
    hold_open: bool,
}

impl ReplayProvider {
    pub fn new(track: Vec<ReplayFix>) -> Self {
        Self {
            track,
            interval: DEFAULT_REPLAY_INTERVAL,
            deny_permission: false,
            hold_open: false,
        }
    }

    /// Sets the delay between streamed samples.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Refuse the permission request.
    pub fn with_permission_denied(mut self) -> Self {
        self.deny_permission = true;
        self
    }

    /// Keep the stream open after the last sample instead of closing it.
    pub fn with_hold_open(mut self) -> Self {
        self.hold_open = true;
        self
    }

    pub fn track(&self) -> &[ReplayFix] {
        &self.track
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl PositioningProvider for ReplayProvider {
    async fn request_permission(&self) -> Result<(), ProviderError> {
        if self.deny_permission {
            Err(ProviderError::PermissionDenied)
        } else {
            Ok(())
        }
    }

    async fn current_position(&self, options: &WatchOptions) -> Result<Position, ProviderError> {
        trace!(high_accuracy = options.high_accuracy, "Replay fix requested");
        self.track
            .first()
            .map(|fix| fix.to_position())
            .ok_or_else(|| ProviderError::PositionUnavailable("replay track is empty".into()))
    }

    fn watch(&self, _options: &WatchOptions) -> Result<PositionStream, ProviderError> {
        let (tx, rx) = mpsc::channel(16);
        let remaining: Vec<ReplayFix> = self.track.iter().skip(1).copied().collect();
        let interval = self.interval;
        let hold_open = self.hold_open;

        tokio::spawn(async move {
            for fix in remaining {
                tokio::time::sleep(interval).await;
                if tx.send(Ok(fix.to_position())).await.is_err() {
                    debug!("Replay stream released by subscriber");
                    return;
                }
            }
            if hold_open {
                tx.closed().await;
                debug!("Replay stream released by subscriber");
            } else {
                debug!("Replay track finished");
            }
        });

        Ok(rx)
    }
}

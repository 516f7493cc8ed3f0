//! Async session driver.
//!
//! [`GeofenceTracker`] wraps a [`LocationMonitor`] behind a mutex and runs the
//! provider side of a GPS session in a spawned task:
//!
//! 1. Request permission (bounded by `permission_timeout`)
//! 2. Coarse first fix (bounded by `acquire_timeout`); a malformed one ends
//!    the session as position unavailable
//! 3. Continuous watch until the session ends, with a precise refinement fix
//!    requested alongside it (same bound; its failure is non-fatal)
//!
//! The task is tied to a [`CancellationToken`] whose drop guard lives in the
//! session. Stopping, replacing or failing the session cancels the task,
//! which drops the provider stream.
//!
//! The monitor lock is only taken for synchronous transitions and is never
//! held across an `.await`.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::events::{GeofenceBroadcaster, TrackingUpdate};
use super::machine::{EventOutcome, LocationMonitor, MonitorConfig, MonitorEvent};
use super::provider::{PositioningProvider, ProviderError};
use super::simulated::SimulatedInput;
use super::state::{Generation, InputMode, MonitorSnapshot, MonitorState};
use crate::throttle::AlertEvent;
use crate::zone::ZoneRegistry;

/// Shared handle to a location monitor and its provider task.
///
/// Dropping the tracker stops the active session.
pub struct GeofenceTracker {
    monitor: Arc<Mutex<LocationMonitor>>,
}

impl GeofenceTracker {
    /// Create a tracker with default configuration.
    pub fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self::with_config(registry, MonitorConfig::default())
    }

    /// Create a tracker with custom configuration.
    pub fn with_config(registry: Arc<ZoneRegistry>, config: MonitorConfig) -> Self {
        Self {
            monitor: Arc::new(Mutex::new(LocationMonitor::with_config(registry, config))),
        }
    }

    /// Start a session fed by a real positioning provider.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_gps<P>(&self, provider: Arc<P>) -> Generation
    where
        P: PositioningProvider,
    {
        let token = CancellationToken::new();
        let (generation, config) = {
            let mut monitor = self.monitor.lock();
            let generation = monitor.start(InputMode::Gps);
            monitor.attach_subscription(generation, token.clone().drop_guard());
            (generation, monitor.config().clone())
        };

        let driver = SessionDriver {
            provider,
            monitor: Arc::clone(&self.monitor),
            generation,
            config,
        };
        tokio::spawn(driver.run(token));
        generation
    }

    /// Start a simulated session and return its input handle.
    pub fn start_simulated(&self) -> SimulatedInput {
        let generation = self.monitor.lock().start(InputMode::Simulated);
        SimulatedInput::new(Arc::clone(&self.monitor), generation)
    }

    /// Stop the active session. Idempotent.
    pub fn stop(&self) {
        self.monitor.lock().stop();
    }

    pub fn state(&self) -> MonitorState {
        self.monitor.lock().state()
    }

    pub fn generation(&self) -> Generation {
        self.monitor.lock().generation()
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        self.monitor.lock().snapshot()
    }

    /// Watch session state changes.
    pub fn subscribe_state(&self) -> watch::Receiver<MonitorState> {
        self.monitor.lock().subscribe_state()
    }
}

impl GeofenceBroadcaster for GeofenceTracker {
    fn subscribe_updates(&self) -> broadcast::Receiver<TrackingUpdate> {
        self.monitor.lock().subscribe_updates()
    }

    fn subscribe_alerts(&self) -> broadcast::Receiver<AlertEvent> {
        self.monitor.lock().subscribe_alerts()
    }
}

impl Drop for GeofenceTracker {
    fn drop(&mut self) {
        self.monitor.lock().stop();
    }
}

/// Provider side of one GPS session.
struct SessionDriver<P> {
    provider: Arc<P>,
    monitor: Arc<Mutex<LocationMonitor>>,
    generation: Generation,
    config: MonitorConfig,
}

impl<P: PositioningProvider> SessionDriver<P> {
    async fn run(self, token: CancellationToken) {
        tokio::select! {
            biased;

            _ = token.cancelled() => {
                debug!(generation = %self.generation, "Session driver cancelled");
            }

            _ = self.drive() => {
                debug!(generation = %self.generation, "Session driver finished");
            }
        }
    }

    async fn drive(&self) {
        let permission = match timeout(
            self.config.permission_timeout,
            self.provider.request_permission(),
        )
        .await
        {
            Ok(Ok(())) => MonitorEvent::PermissionGranted,
            Ok(Err(error)) => MonitorEvent::Failed(error),
            Err(_) => MonitorEvent::Failed(ProviderError::Timeout),
        };
        if !self.deliver(permission) {
            return;
        }

        let options = self.config.first_fix_options();
        let first_fix =
            match timeout(options.timeout, self.provider.current_position(&options)).await {
                Ok(Ok(position)) => MonitorEvent::Fix(position),
                Ok(Err(error)) => MonitorEvent::Failed(error),
                Err(_) => MonitorEvent::Failed(ProviderError::Timeout),
            };
        let live = {
            let mut monitor = self.monitor.lock();
            if let EventOutcome::Rejected(error) = monitor.handle(self.generation, first_fix) {
                // No valid first fix means no position to track from.
                monitor.handle(
                    self.generation,
                    MonitorEvent::Failed(ProviderError::PositionUnavailable(format!(
                        "malformed first fix: {}",
                        error
                    ))),
                );
            }
            monitor.is_live(self.generation)
        };
        if !live {
            return;
        }

        tokio::join!(self.refine(), self.watch());
    }

    async fn refine(&self) {
        let options = self.config.refinement_options();
        match timeout(options.timeout, self.provider.current_position(&options)).await {
            Ok(Ok(position)) => {
                self.deliver(MonitorEvent::Refinement(position));
            }
            Ok(Err(error)) => {
                debug!(error = %error, "High-accuracy refinement failed");
            }
            Err(_) => {
                debug!("High-accuracy refinement timed out");
            }
        }
    }

    async fn watch(&self) {
        let mut stream = match self.provider.watch(&self.config.watch_options()) {
            Ok(stream) => stream,
            Err(error) => {
                self.deliver(MonitorEvent::Failed(error));
                return;
            }
        };
        info!(generation = %self.generation, "Watching position stream");

        loop {
            let event = match stream.recv().await {
                Some(Ok(position)) => MonitorEvent::Fix(position),
                Some(Err(error)) => MonitorEvent::Failed(error),
                None => MonitorEvent::StreamClosed,
            };
            let closed = matches!(event, MonitorEvent::StreamClosed);
            if !self.deliver(event) || closed {
                break;
            }
        }
    }

    /// Feed an event to the monitor. Returns whether the session is still live.
    fn deliver(&self, event: MonitorEvent) -> bool {
        let mut monitor = self.monitor.lock();
        let outcome = monitor.handle(self.generation, event);
        outcome != EventOutcome::Stale && monitor.is_live(self.generation)
    }
}

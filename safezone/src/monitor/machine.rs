//! Location monitor state machine.
//!
//! The monitor owns at most one session at a time. All transitions are
//! synchronous; the async side (provider calls, timeouts) lives in
//! [`super::GeofenceTracker`], which feeds generation-tagged
//! [`MonitorEvent`]s into [`LocationMonitor::handle`].
//!
//! # Transitions
//!
//! ```text
//! Idle --start()--> RequestingPermission --granted--> Acquiring --fix--> Tracking
//!                          |                             |                 |
//!                          +--denied / timeout-----------+--failure--------+--> Error(cause)
//!
//! any --stop()--> Idle
//! ```
//!
//! Simulated sessions are granted immediately and wait in `Acquiring` until
//! the first `push`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio_util::sync::DropGuard;
use tracing::{debug, info, trace, warn};

use super::error::MonitorError;
use super::events::{GeofenceBroadcaster, SampleOutcome, TrackingUpdate};
use super::provider::{ProviderError, WatchOptions};
use super::state::{ErrorCause, Generation, InputMode, MonitorSnapshot, MonitorState};
use crate::accuracy;
use crate::position::{MalformedPosition, Position};
use crate::resolver::{ZoneResolver, ZoneStatus};
use crate::throttle::{AlertEvent, AlertThrottler, ThrottleConfig, DEFAULT_DEBOUNCE};
use crate::zone::ZoneRegistry;

/// Default time allowed for a permission request.
pub const DEFAULT_PERMISSION_TIMEOUT: Duration = Duration::from_secs(30);

/// Default time allowed for the first fix.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(20);

/// Default capacity of the update and alert channels.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Monitor configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Minimum time between two alerts of the same kind.
    pub debounce: Duration,

    /// Bound on the permission request.
    pub permission_timeout: Duration,

    /// Bound on the first fix and on the refinement fix.
    pub acquire_timeout: Duration,

    /// Ask the provider for precise fixes while watching.
    pub high_accuracy: bool,

    /// Oldest cached fix accepted for the first fix and the watch.
    pub maximum_age: Duration,

    /// Capacity of the update and alert broadcast channels.
    pub channel_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            permission_timeout: DEFAULT_PERMISSION_TIMEOUT,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            high_accuracy: true,
            maximum_age: Duration::ZERO,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl MonitorConfig {
    /// Options for the fast, coarse first fix.
    pub fn first_fix_options(&self) -> WatchOptions {
        WatchOptions {
            high_accuracy: false,
            timeout: self.acquire_timeout,
            maximum_age: self.maximum_age,
        }
    }

    /// Options for the best-effort precise fix that runs alongside the watch.
    pub fn refinement_options(&self) -> WatchOptions {
        WatchOptions {
            high_accuracy: true,
            timeout: self.acquire_timeout,
            maximum_age: Duration::ZERO,
        }
    }

    /// Options for the continuous watch.
    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions {
            high_accuracy: self.high_accuracy,
            timeout: self.acquire_timeout,
            maximum_age: self.maximum_age,
        }
    }
}

/// Input to the state machine from the session driver.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    /// The provider granted location access.
    PermissionGranted,
    /// A first fix or a watch sample.
    Fix(Position),
    /// Result of the parallel high-accuracy request.
    Refinement(Position),
    /// The provider reported an error, or a bounded wait expired.
    Failed(ProviderError),
    /// The provider ended the watch stream.
    StreamClosed,
}

/// What [`LocationMonitor::handle`] did with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// The session changed state without processing a sample.
    Transition,
    /// A sample was classified and emitted.
    Sample(SampleOutcome),
    /// The sample was malformed. State is unchanged.
    Rejected(MalformedPosition),
    /// The event does not apply in the current state.
    Ignored,
    /// The event belongs to a superseded session.
    Stale,
}

struct Session {
    mode: InputMode,
    state: MonitorState,
    current_position: Option<Position>,
    current_status: Option<ZoneStatus>,
    /// Cancels the provider task when dropped.
    subscription: Option<DropGuard>,
}

impl Session {
    fn new(mode: InputMode) -> Self {
        Self {
            mode,
            state: MonitorState::Idle,
            current_position: None,
            current_status: None,
            subscription: None,
        }
    }
}

/// Single-session location monitor.
pub struct LocationMonitor {
    config: MonitorConfig,
    resolver: ZoneResolver,
    throttler: AlertThrottler,
    generation: Generation,
    session: Option<Session>,
    updates_tx: broadcast::Sender<TrackingUpdate>,
    alerts_tx: broadcast::Sender<AlertEvent>,
    state_tx: watch::Sender<MonitorState>,
}

impl LocationMonitor {
    /// Create a monitor with default configuration.
    pub fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self::with_config(registry, MonitorConfig::default())
    }

    /// Create a monitor with custom configuration.
    pub fn with_config(registry: Arc<ZoneRegistry>, config: MonitorConfig) -> Self {
        let capacity = config.channel_capacity.max(1);
        let (updates_tx, _) = broadcast::channel(capacity);
        let (alerts_tx, _) = broadcast::channel(capacity);
        let (state_tx, _) = watch::channel(MonitorState::Idle);

        Self {
            throttler: AlertThrottler::with_config(ThrottleConfig {
                debounce: config.debounce,
            }),
            config,
            resolver: ZoneResolver::new(registry),
            generation: Generation::default(),
            session: None,
            updates_tx,
            alerts_tx,
            state_tx,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn state(&self) -> MonitorState {
        self.session
            .as_ref()
            .map_or(MonitorState::Idle, |session| session.state)
    }

    pub fn mode(&self) -> Option<InputMode> {
        self.session.as_ref().map(|session| session.mode)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn current_position(&self) -> Option<&Position> {
        self.session.as_ref()?.current_position.as_ref()
    }

    pub fn current_status(&self) -> Option<&ZoneStatus> {
        self.session.as_ref()?.current_status.as_ref()
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            state: self.state(),
            mode: self.mode(),
            generation: self.generation,
            current_position: self.current_position().cloned(),
            current_status: self.current_status().cloned(),
        }
    }

    /// Watch state changes.
    pub fn subscribe_state(&self) -> watch::Receiver<MonitorState> {
        self.state_tx.subscribe()
    }

    /// True while `generation` is current and its session may still produce
    /// positions.
    pub fn is_live(&self, generation: Generation) -> bool {
        generation == self.generation && self.state().is_running()
    }

    /// Begin a new session, replacing any active one.
    pub fn start(&mut self, mode: InputMode) -> Generation {
        if let Some(previous) = self.session.take() {
            info!(
                mode = %previous.mode,
                generation = %self.generation,
                "Replacing active session"
            );
        }

        self.generation = self.generation.next();
        self.throttler.reset();
        self.session = Some(Session::new(mode));
        info!(mode = %mode, generation = %self.generation, "Monitor session started");

        self.set_state(MonitorState::RequestingPermission);
        if mode == InputMode::Simulated {
            self.set_state(MonitorState::Acquiring);
        }
        self.generation
    }

    /// End the current session. No-op when idle.
    pub fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        // Dropping the session releases the provider subscription.
        drop(session);

        self.generation = self.generation.next();
        self.throttler.reset();
        self.state_tx.send_replace(MonitorState::Idle);
        info!(generation = %self.generation, "Monitor session stopped");
    }

    /// Tie a provider task's lifetime to the session.
    ///
    /// Returns `false` (and drops the guard, cancelling the task) when the
    /// generation is no longer live.
    pub fn attach_subscription(&mut self, generation: Generation, guard: DropGuard) -> bool {
        if !self.is_live(generation) {
            return false;
        }
        match self.session.as_mut() {
            Some(session) => {
                session.subscription = Some(guard);
                true
            }
            None => false,
        }
    }

    /// Apply an event from the session driver.
    pub fn handle(&mut self, generation: Generation, event: MonitorEvent) -> EventOutcome {
        if generation != self.generation || self.session.is_none() {
            trace!(
                event_generation = %generation,
                current_generation = %self.generation,
                "Discarding stale monitor event"
            );
            return EventOutcome::Stale;
        }

        let state = self.state();
        match (state, event) {
            (MonitorState::RequestingPermission, MonitorEvent::PermissionGranted) => {
                self.set_state(MonitorState::Acquiring);
                EventOutcome::Transition
            }
            (MonitorState::Acquiring | MonitorState::Tracking, MonitorEvent::Fix(position)) => {
                self.ingest(position)
            }
            (MonitorState::Tracking, MonitorEvent::Refinement(position)) => {
                let superseded = self
                    .current_position()
                    .is_some_and(|current| position.captured_at < current.captured_at);
                if superseded {
                    debug!(position = %position, "Dropping refinement older than the current fix");
                    return EventOutcome::Ignored;
                }
                self.ingest(position)
            }
            (_, MonitorEvent::Refinement(_)) => {
                debug!(state = %state, "Dropping refinement fix outside tracking");
                EventOutcome::Ignored
            }
            (MonitorState::Tracking, MonitorEvent::Failed(ProviderError::PermissionDenied)) => {
                self.fail(ErrorCause::PermissionDenied);
                EventOutcome::Transition
            }
            (MonitorState::Tracking, MonitorEvent::Failed(error)) => {
                warn!(error = %error, "Position sample failed, still tracking");
                EventOutcome::Ignored
            }
            (
                MonitorState::RequestingPermission | MonitorState::Acquiring,
                MonitorEvent::Failed(error),
            ) => {
                self.fail(error.cause());
                EventOutcome::Transition
            }
            (MonitorState::Acquiring | MonitorState::Tracking, MonitorEvent::StreamClosed) => {
                self.fail(ErrorCause::PositionUnavailable);
                EventOutcome::Transition
            }
            (state, event) => {
                debug!(state = %state, event = ?event, "Ignoring monitor event");
                EventOutcome::Ignored
            }
        }
    }

    /// Push a simulated position into the current session.
    pub fn push(&mut self, lat: f64, lng: f64) -> Result<SampleOutcome, MonitorError> {
        self.push_for(self.generation, lat, lng)
    }

    /// Push a simulated position on behalf of a specific session.
    pub fn push_for(
        &mut self,
        generation: Generation,
        lat: f64,
        lng: f64,
    ) -> Result<SampleOutcome, MonitorError> {
        if generation != self.generation {
            return Err(MonitorError::StaleSession {
                held: generation,
                current: self.generation,
            });
        }

        let simulating = self.session.as_ref().is_some_and(|session| {
            session.mode == InputMode::Simulated && session.state.is_running()
        });
        if !simulating {
            return Err(MonitorError::NotSimulating);
        }

        let position = Position::simulated(lat, lng, None).inspect_err(|error| {
            warn!(error = %error, "Rejecting simulated position");
        })?;

        if self.state() == MonitorState::Acquiring {
            self.set_state(MonitorState::Tracking);
        }
        Ok(self.process(position))
    }

    fn ingest(&mut self, position: Position) -> EventOutcome {
        if let Err(error) = position.validate() {
            warn!(error = %error, "Dropping malformed position sample");
            return EventOutcome::Rejected(error);
        }

        if self.state() == MonitorState::Acquiring {
            info!(position = %position, source = %position.source, "First fix acquired");
            self.set_state(MonitorState::Tracking);
        }
        EventOutcome::Sample(self.process(position))
    }

    fn process(&mut self, position: Position) -> SampleOutcome {
        let status = self.resolver.classify(&position);
        let accuracy = accuracy::grade(position.accuracy_meters);
        debug!(
            lat = position.lat,
            lng = position.lng,
            status = %status,
            accuracy = %accuracy,
            "Classified position"
        );

        let update = TrackingUpdate {
            position: position.clone(),
            status: status.clone(),
            accuracy,
            generation: self.generation,
        };
        // No receivers is fine.
        let _ = self.updates_tx.send(update.clone());

        let alert = self.throttler.evaluate(&status);
        if let Some(alert) = &alert {
            if alert.next.is_restricted() {
                warn!(
                    zone_id = alert.next.zone_id.as_deref().unwrap_or("-"),
                    "Entered restricted zone"
                );
            }
            info!(
                kind = %alert.next.kind,
                zone_id = alert.next.zone_id.as_deref().unwrap_or("-"),
                previous = ?alert.previous.as_ref().map(|s| s.kind),
                "Zone alert"
            );
            let _ = self.alerts_tx.send(alert.clone());
        }

        if let Some(session) = self.session.as_mut() {
            session.current_position = Some(position);
            session.current_status = Some(status);
        }

        SampleOutcome { update, alert }
    }

    fn fail(&mut self, cause: ErrorCause) {
        if let Some(session) = self.session.as_mut() {
            session.subscription = None;
        }
        warn!(cause = %cause, generation = %self.generation, "Monitor session failed");
        self.set_state(MonitorState::Error(cause));
    }

    fn set_state(&mut self, state: MonitorState) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.state != state {
            debug!(from = %session.state, to = %state, "Monitor state change");
            session.state = state;
            self.state_tx.send_replace(state);
        }
    }
}

impl GeofenceBroadcaster for LocationMonitor {
    fn subscribe_updates(&self) -> broadcast::Receiver<TrackingUpdate> {
        self.updates_tx.subscribe()
    }

    fn subscribe_alerts(&self) -> broadcast::Receiver<AlertEvent> {
        self.alerts_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::PositionSource;
    use crate::resolver::StatusKind;
    use crate::zone::{LatLng, Zone, ZoneKind};
    use std::time::Instant;
    use tokio_util::sync::CancellationToken;

    fn registry() -> Arc<ZoneRegistry> {
        ZoneRegistry::from_zones([Zone::new(
            "S",
            ZoneKind::Safe,
            vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(0.0, 2.0),
                LatLng::new(2.0, 2.0),
                LatLng::new(2.0, 0.0),
            ],
            "Square",
            "",
        )])
        .unwrap()
        .into_shared()
    }

    fn gps(lat: f64, lng: f64, accuracy: Option<f64>) -> Position {
        Position::gps(lat, lng, accuracy).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let monitor = LocationMonitor::new(registry());
        assert_eq!(monitor.state(), MonitorState::Idle);
        assert_eq!(monitor.generation().value(), 0);
        assert!(monitor.mode().is_none());
    }

    #[test]
    fn test_gps_happy_path() {
        let mut monitor = LocationMonitor::new(registry());
        let generation = monitor.start(InputMode::Gps);
        assert_eq!(monitor.state(), MonitorState::RequestingPermission);

        assert_eq!(
            monitor.handle(generation, MonitorEvent::PermissionGranted),
            EventOutcome::Transition
        );
        assert_eq!(monitor.state(), MonitorState::Acquiring);

        let sample = match monitor.handle(generation, MonitorEvent::Fix(gps(1.0, 1.0, Some(8.0)))) {
            EventOutcome::Sample(sample) => sample,
            other => panic!("expected a processed sample, got {:?}", other),
        };
        assert_eq!(monitor.state(), MonitorState::Tracking);
        assert_eq!(sample.update.status.kind, StatusKind::Safe);
        assert_eq!(sample.update.accuracy, crate::accuracy::AccuracyTier::High);
        assert!(sample.alert.is_some());
        assert_eq!(monitor.current_status().map(|s| s.kind), Some(StatusKind::Safe));
    }

    #[test]
    fn test_permission_denied() {
        let mut monitor = LocationMonitor::new(registry());
        let generation = monitor.start(InputMode::Gps);

        monitor.handle(
            generation,
            MonitorEvent::Failed(ProviderError::PermissionDenied),
        );
        assert_eq!(
            monitor.state(),
            MonitorState::Error(ErrorCause::PermissionDenied)
        );
        assert!(!monitor.is_live(generation));
    }

    #[test]
    fn test_acquisition_timeout() {
        let mut monitor = LocationMonitor::new(registry());
        let generation = monitor.start(InputMode::Gps);
        monitor.handle(generation, MonitorEvent::PermissionGranted);

        monitor.handle(generation, MonitorEvent::Failed(ProviderError::Timeout));
        assert_eq!(monitor.state(), MonitorState::Error(ErrorCause::Timeout));
    }

    #[test]
    fn test_sample_error_while_tracking_keeps_tracking() {
        let mut monitor = LocationMonitor::new(registry());
        let generation = monitor.start(InputMode::Gps);
        monitor.handle(generation, MonitorEvent::PermissionGranted);
        monitor.handle(generation, MonitorEvent::Fix(gps(1.0, 1.0, None)));

        let outcome = monitor.handle(
            generation,
            MonitorEvent::Failed(ProviderError::PositionUnavailable("tunnel".into())),
        );
        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(monitor.state(), MonitorState::Tracking);

        monitor.handle(generation, MonitorEvent::StreamClosed);
        assert_eq!(
            monitor.state(),
            MonitorState::Error(ErrorCause::PositionUnavailable)
        );
    }

    #[test]
    fn test_refinement_only_applies_while_tracking() {
        let mut monitor = LocationMonitor::new(registry());
        let generation = monitor.start(InputMode::Gps);
        monitor.handle(generation, MonitorEvent::PermissionGranted);

        let early = monitor.handle(generation, MonitorEvent::Refinement(gps(1.0, 1.0, Some(3.0))));
        assert_eq!(early, EventOutcome::Ignored);
        assert_eq!(monitor.state(), MonitorState::Acquiring);

        monitor.handle(generation, MonitorEvent::Fix(gps(1.0, 1.0, Some(80.0))));
        let late = monitor.handle(generation, MonitorEvent::Refinement(gps(1.0, 1.0, Some(3.0))));
        assert!(matches!(late, EventOutcome::Sample(_)));
        assert_eq!(
            monitor.current_position().and_then(|p| p.accuracy_meters),
            Some(3.0)
        );
    }

    #[test]
    fn test_refinement_older_than_current_fix_is_dropped() {
        let mut monitor = LocationMonitor::new(registry());
        let generation = monitor.start(InputMode::Gps);
        monitor.handle(generation, MonitorEvent::PermissionGranted);

        let t0 = Instant::now();
        let stale = Position::new(1.0, 1.0, Some(3.0), PositionSource::Gps, t0).unwrap();
        let newer = Position::new(
            5.0,
            5.0,
            Some(40.0),
            PositionSource::Gps,
            t0 + Duration::from_millis(500),
        )
        .unwrap();

        monitor.handle(generation, MonitorEvent::Fix(newer.clone()));
        let outcome = monitor.handle(generation, MonitorEvent::Refinement(stale));

        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(monitor.current_position(), Some(&newer));
        assert_eq!(
            monitor.current_status().map(|s| s.kind),
            Some(StatusKind::Unrestricted)
        );
    }

    #[test]
    fn test_malformed_sample_leaves_state_untouched() {
        let mut monitor = LocationMonitor::new(registry());
        let generation = monitor.start(InputMode::Gps);
        monitor.handle(generation, MonitorEvent::PermissionGranted);

        let mut bad = gps(1.0, 1.0, None);
        bad.lat = 200.0;
        let outcome = monitor.handle(generation, MonitorEvent::Fix(bad));

        assert_eq!(
            outcome,
            EventOutcome::Rejected(MalformedPosition::InvalidLatitude(200.0))
        );
        assert_eq!(monitor.state(), MonitorState::Acquiring);
        assert!(monitor.current_position().is_none());
    }

    #[test]
    fn test_stale_events_are_discarded() {
        let mut monitor = LocationMonitor::new(registry());
        let old = monitor.start(InputMode::Gps);
        let current = monitor.start(InputMode::Gps);
        assert_ne!(old, current);

        assert_eq!(
            monitor.handle(old, MonitorEvent::PermissionGranted),
            EventOutcome::Stale
        );
        assert_eq!(monitor.state(), MonitorState::RequestingPermission);
    }

    #[test]
    fn test_stop_and_generation() {
        let mut monitor = LocationMonitor::new(registry());

        monitor.stop();
        assert_eq!(monitor.generation().value(), 0);

        let generation = monitor.start(InputMode::Gps);
        assert_eq!(generation.value(), 1);

        monitor.stop();
        assert_eq!(monitor.state(), MonitorState::Idle);
        assert_eq!(monitor.generation().value(), 2);

        monitor.stop();
        assert_eq!(monitor.generation().value(), 2);
        assert_eq!(
            monitor.handle(generation, MonitorEvent::PermissionGranted),
            EventOutcome::Stale
        );
    }

    #[test]
    fn test_subscription_released_on_stop_and_failure() {
        let mut monitor = LocationMonitor::new(registry());

        let generation = monitor.start(InputMode::Gps);
        let token = CancellationToken::new();
        assert!(monitor.attach_subscription(generation, token.clone().drop_guard()));
        monitor.stop();
        assert!(token.is_cancelled());

        let generation = monitor.start(InputMode::Gps);
        let token = CancellationToken::new();
        monitor.attach_subscription(generation, token.clone().drop_guard());
        monitor.handle(
            generation,
            MonitorEvent::Failed(ProviderError::PermissionDenied),
        );
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_replacing_session_releases_subscription() {
        let mut monitor = LocationMonitor::new(registry());
        let generation = monitor.start(InputMode::Gps);
        let token = CancellationToken::new();
        monitor.attach_subscription(generation, token.clone().drop_guard());

        let next = monitor.start(InputMode::Simulated);
        assert!(token.is_cancelled());
        assert_eq!(next.value(), generation.value() + 1);
    }

    #[test]
    fn test_attach_to_stale_generation_cancels() {
        let mut monitor = LocationMonitor::new(registry());
        let old = monitor.start(InputMode::Gps);
        monitor.stop();

        let token = CancellationToken::new();
        assert!(!monitor.attach_subscription(old, token.clone().drop_guard()));
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_simulated_session() {
        let mut monitor = LocationMonitor::new(registry());
        monitor.start(InputMode::Simulated);
        assert_eq!(monitor.state(), MonitorState::Acquiring);

        let sample = monitor.push(3.0, 3.0).unwrap();
        assert_eq!(monitor.state(), MonitorState::Tracking);
        assert_eq!(sample.update.status.kind, StatusKind::Unrestricted);
        assert_eq!(
            sample.update.accuracy,
            crate::accuracy::AccuracyTier::Unknown
        );
    }

    #[test]
    fn test_push_errors() {
        let mut monitor = LocationMonitor::new(registry());
        assert_eq!(monitor.push(1.0, 1.0), Err(MonitorError::NotSimulating));

        monitor.start(InputMode::Gps);
        assert_eq!(monitor.push(1.0, 1.0), Err(MonitorError::NotSimulating));

        let old = monitor.start(InputMode::Simulated);
        let current = monitor.start(InputMode::Simulated);
        assert!(matches!(
            monitor.push_for(old, 1.0, 1.0),
            Err(MonitorError::StaleSession { .. })
        ));
        assert!(monitor.push_for(current, 1.0, 1.0).is_ok());

        assert!(matches!(
            monitor.push(95.0, 1.0),
            Err(MonitorError::MalformedPosition(_))
        ));
    }

    #[test]
    fn test_broadcasts_updates_and_alerts() {
        let mut monitor = LocationMonitor::new(registry());
        let mut updates = monitor.subscribe_updates();
        let mut alerts = monitor.subscribe_alerts();

        monitor.start(InputMode::Simulated);
        monitor.push(1.0, 1.0).unwrap();
        monitor.push(1.0, 1.0).unwrap();
        monitor.push(5.0, 5.0).unwrap();

        let mut update_count = 0;
        while updates.try_recv().is_ok() {
            update_count += 1;
        }
        assert_eq!(update_count, 3);

        let first = alerts.try_recv().unwrap();
        assert_eq!(first.next.kind, StatusKind::Safe);
        let second = alerts.try_recv().unwrap();
        assert_eq!(second.next.kind, StatusKind::Unrestricted);
        assert!(alerts.try_recv().is_err());
    }

    #[test]
    fn test_new_session_resets_throttler() {
        let mut monitor = LocationMonitor::new(registry());
        monitor.start(InputMode::Simulated);
        assert!(monitor.push(1.0, 1.0).unwrap().alert.is_some());

        monitor.start(InputMode::Simulated);
        let sample = monitor.push(1.0, 1.0).unwrap();
        assert!(sample.alert.unwrap().previous.is_none());
    }

    #[test]
    fn test_state_watch() {
        let mut monitor = LocationMonitor::new(registry());
        let rx = monitor.subscribe_state();

        monitor.start(InputMode::Simulated);
        assert_eq!(*rx.borrow(), MonitorState::Acquiring);

        monitor.stop();
        assert_eq!(*rx.borrow(), MonitorState::Idle);
    }

    #[test]
    fn test_config_options() {
        let config = MonitorConfig::default();
        assert!(!config.first_fix_options().high_accuracy);
        assert!(config.refinement_options().high_accuracy);
        assert_eq!(config.refinement_options().maximum_age, Duration::ZERO);
        assert_eq!(config.watch_options().timeout, DEFAULT_ACQUIRE_TIMEOUT);
    }
}

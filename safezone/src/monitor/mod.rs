//! Location monitoring.
//!
//! A monitor session acquires positions from exactly one source, either a
//! real [`PositioningProvider`] or a [`SimulatedInput`], classifies each
//! sample against the zone registry and emits [`TrackingUpdate`]s plus
//! throttled [`AlertEvent`](crate::throttle::AlertEvent)s.
//!
//! # Architecture
//!
//! ```text
//! PositioningProvider ──► SessionDriver task ──► LocationMonitor ──► broadcast
//!                           (timeouts, cancel)     (state machine)     updates / alerts
//! SimulatedInput::push ─────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`LocationMonitor`] - Synchronous state machine, one session at a time
//! - [`GeofenceTracker`] - Shared handle that spawns and cancels provider tasks
//! - [`SimulatedInput`] - Push handle for simulated sessions
//! - [`ReplayProvider`] - Scripted provider for demos and tests
//! - [`GeofenceBroadcaster`] - Subscription API (push)

mod error;
mod events;
mod machine;
mod provider;
mod replay;
mod simulated;
mod state;
mod tracker;

pub use error::MonitorError;
pub use events::{GeofenceBroadcaster, SampleOutcome, TrackingUpdate};
pub use machine::{
    EventOutcome, LocationMonitor, MonitorConfig, MonitorEvent, DEFAULT_ACQUIRE_TIMEOUT,
    DEFAULT_CHANNEL_CAPACITY, DEFAULT_PERMISSION_TIMEOUT,
};
pub use provider::{PositionStream, PositioningProvider, ProviderError, WatchOptions};
pub use replay::{ReplayFix, ReplayProvider, DEFAULT_REPLAY_INTERVAL};
pub use simulated::SimulatedInput;
pub use state::{ErrorCause, Generation, InputMode, MonitorSnapshot, MonitorState};
pub use tracker::GeofenceTracker;

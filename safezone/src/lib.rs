//! SafeZone - geofencing engine for tourist safety monitoring
//!
//! Classifies a moving observer's position against named polygonal zones
//! (restricted, safe or unrestricted), monitors a location stream with
//! permission and accuracy handling, and raises debounced alerts on zone
//! transitions.
//!
//! # High-Level API
//!
//! ```ignore
//! use safezone::config::load_zones;
//! use safezone::monitor::{GeofenceBroadcaster, GeofenceTracker};
//!
//! let registry = load_zones(&zones_path)?.into_shared();
//! let tracker = GeofenceTracker::new(registry);
//! let mut alerts = tracker.subscribe_alerts();
//!
//! let input = tracker.start_simulated();
//! input.push(12.9716, 77.5946)?;
//!
//! while let Ok(alert) = alerts.recv().await {
//!     println!("Now in {}", alert.next);
//! }
//! ```
//!
//! # Modules
//!
//! - [`zone`] - Zone model, registry and point classifier
//! - [`resolver`] - Priority resolution into a [`resolver::ZoneStatus`]
//! - [`accuracy`] - Accuracy tier grading
//! - [`throttle`] - Alert debouncing
//! - [`monitor`] - Location monitor state machine and session driver
//! - [`position`] - Position samples and validation
//! - [`config`] - INI configuration and zone files
//! - [`logging`] - `tracing` subscriber setup

pub mod accuracy;
pub mod config;
pub mod logging;
pub mod monitor;
pub mod position;
pub mod resolver;
pub mod throttle;
pub mod zone;

/// Version of the SafeZone library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

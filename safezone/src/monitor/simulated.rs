//! Simulated input adapter.
//!
//! Replaces the real provider with positions supplied by the caller (map
//! clicks, pointer drags, scripted tracks). Acquisition never fails: the
//! first push is the first fix.

use std::sync::Arc;

use parking_lot::Mutex;

use super::error::MonitorError;
use super::events::SampleOutcome;
use super::machine::LocationMonitor;
use super::state::Generation;

/// Push handle bound to one simulated session.
///
/// Once the session is stopped or replaced, every push fails with
/// [`MonitorError::StaleSession`].
#[derive(Clone)]
pub struct SimulatedInput {
    monitor: Arc<Mutex<LocationMonitor>>,
    generation: Generation,
}

impl SimulatedInput {
    pub(crate) fn new(monitor: Arc<Mutex<LocationMonitor>>, generation: Generation) -> Self {
        Self {
            monitor,
            generation,
        }
    }

    /// Session this handle feeds.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Feed a position to the session.
    pub fn push(&self, lat: f64, lng: f64) -> Result<SampleOutcome, MonitorError> {
        self.monitor.lock().push_for(self.generation, lat, lng)
    }
}

impl std::fmt::Debug for SimulatedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedInput")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

//! Alert throttling.
//!
//! Decides whether a zone status should produce an [`AlertEvent`]. A status
//! fires when nothing has fired yet, when its kind differs from the last
//! fired kind, or when the debounce interval has fully elapsed since the
//! last alert. Repeats of the same kind inside the interval are suppressed.
//!
//! One throttler belongs to one monitor session; the monitor resets it
//! whenever a new session starts.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::trace;

use crate::resolver::{StatusKind, ZoneStatus};

/// Default debounce interval between alerts of the same kind.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(2000);

/// Configuration for the alert throttler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Minimum time between two alerts of the same kind.
    pub debounce: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// A zone-change notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEvent {
    /// Status of the previous alert in this session, `None` for the first.
    pub previous: Option<ZoneStatus>,
    pub next: ZoneStatus,
    #[serde(skip)]
    pub emitted_at: Instant,
}

impl AlertEvent {
    /// True when the zone kind changed relative to the previous alert.
    pub fn is_transition(&self) -> bool {
        self.previous
            .as_ref()
            .map_or(true, |prev| prev.kind != self.next.kind)
    }
}

/// Debounce state for one session.
#[derive(Debug, Default)]
pub struct AlertThrottler {
    config: ThrottleConfig,
    last_emitted_at: Option<Instant>,
    last_kind: Option<StatusKind>,
    last_status: Option<ZoneStatus>,
}

impl AlertThrottler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ThrottleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Evaluate a status against the current time.
    pub fn evaluate(&mut self, status: &ZoneStatus) -> Option<AlertEvent> {
        self.evaluate_at(status, Instant::now())
    }

    /// Evaluate a status at an explicit instant.
    pub fn evaluate_at(&mut self, status: &ZoneStatus, now: Instant) -> Option<AlertEvent> {
        let should_emit = match (self.last_emitted_at, self.last_kind) {
            (Some(last), Some(kind)) => {
                kind != status.kind || now.saturating_duration_since(last) > self.config.debounce
            }
            _ => true,
        };

        if !should_emit {
            trace!(kind = %status.kind, "Alert suppressed by debounce");
            return None;
        }

        self.last_emitted_at = Some(now);
        self.last_kind = Some(status.kind);
        let previous = self.last_status.replace(status.clone());

        Some(AlertEvent {
            previous,
            next: status.clone(),
            emitted_at: now,
        })
    }

    /// Forget all debounce state.
    pub fn reset(&mut self) {
        self.last_emitted_at = None;
        self.last_kind = None;
        self.last_status = None;
    }
}

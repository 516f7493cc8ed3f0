//! Zone resolution.
//!
//! Turns a position into a [`ZoneStatus`] by scanning the registry in
//! priority order: every restricted zone first, then every safe zone. Within
//! a kind the earliest registered zone wins. Overlapping zone metadata is
//! never merged.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::position::Position;
use crate::zone::{ZoneKind, ZoneRegistry};

/// Classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Restricted,
    Safe,
    /// Outside every registered zone.
    Unrestricted,
}

impl From<ZoneKind> for StatusKind {
    fn from(kind: ZoneKind) -> Self {
        match kind {
            ZoneKind::Restricted => Self::Restricted,
            ZoneKind::Safe => Self::Safe,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restricted => write!(f, "Restricted"),
            Self::Safe => write!(f, "Safe"),
            Self::Unrestricted => write!(f, "Unrestricted"),
        }
    }
}

/// Result of classifying one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneStatus {
    pub kind: StatusKind,

    /// Matching zone, `None` when unrestricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    /// Capture time of the classified position.
    #[serde(skip)]
    pub computed_at: Instant,
}

impl ZoneStatus {
    pub fn unrestricted(computed_at: Instant) -> Self {
        Self {
            kind: StatusKind::Unrestricted,
            zone_id: None,
            computed_at,
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.kind == StatusKind::Restricted
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.zone_id {
            Some(id) => write!(f, "{} ({})", self.kind, id),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Resolves positions against a shared, read-only registry.
#[derive(Debug, Clone)]
pub struct ZoneResolver {
    registry: Arc<ZoneRegistry>,
}

impl ZoneResolver {
    pub fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ZoneRegistry> {
        &self.registry
    }

    /// Classify a position.
    ///
    /// Pure: the same position and registry always produce the same status.
    pub fn classify(&self, position: &Position) -> ZoneStatus {
        for kind in ZoneKind::PRIORITY {
            let hit = self
                .registry
                .zones_of(kind)
                .iter()
                .find(|zone| zone.contains(position.lat, position.lng));

            if let Some(zone) = hit {
                return ZoneStatus {
                    kind: kind.into(),
                    zone_id: Some(zone.id().to_string()),
                    computed_at: position.captured_at,
                };
            }
        }

        ZoneStatus::unrestricted(position.captured_at)
    }
}

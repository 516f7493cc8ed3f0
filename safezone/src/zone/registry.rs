//! Zone registry.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::types::{Zone, ZoneKind};
use crate::position::validate_coordinate;

/// Minimum number of vertices a zone polygon must have.
pub const MIN_VERTICES: usize = 3;

/// Reasons a zone is rejected at registration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidZoneDefinition {
    #[error("Zone id must not be empty")]
    EmptyId,

    #[error("Zone '{id}' has {count} vertices, at least 3 are required")]
    TooFewVertices { id: String, count: usize },

    #[error("Zone '{0}' is already registered")]
    DuplicateId(String),

    #[error("Zone '{id}' vertex {index} is out of range: ({lat}, {lng})")]
    VertexOutOfRange {
        id: String,
        index: usize,
        lat: f64,
        lng: f64,
    },
}

/// Ordered collection of zones, grouped by kind.
///
/// Registration requires `&mut self`. Once loading is complete, call
/// [`into_shared`](Self::into_shared) to freeze the registry behind an `Arc`;
/// from then on it can only be read.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    restricted: Vec<Zone>,
    safe: Vec<Zone>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a batch of zones, in order.
    ///
    /// Stops at the first invalid zone.
    pub fn from_zones<I>(zones: I) -> Result<Self, InvalidZoneDefinition>
    where
        I: IntoIterator<Item = Zone>,
    {
        let mut registry = Self::new();
        for zone in zones {
            registry.register(zone)?;
        }
        Ok(registry)
    }

    /// Validate and append a zone to the list for its kind.
    pub fn register(&mut self, zone: Zone) -> Result<(), InvalidZoneDefinition> {
        if zone.id().trim().is_empty() {
            return Err(InvalidZoneDefinition::EmptyId);
        }

        if zone.vertices().len() < MIN_VERTICES {
            return Err(InvalidZoneDefinition::TooFewVertices {
                id: zone.id().to_string(),
                count: zone.vertices().len(),
            });
        }

        if self.get(zone.id()).is_some() {
            return Err(InvalidZoneDefinition::DuplicateId(zone.id().to_string()));
        }

        for (index, vertex) in zone.vertices().iter().enumerate() {
            if validate_coordinate(vertex.lat, vertex.lng).is_err() {
                return Err(InvalidZoneDefinition::VertexOutOfRange {
                    id: zone.id().to_string(),
                    index,
                    lat: vertex.lat,
                    lng: vertex.lng,
                });
            }
        }

        debug!(
            zone_id = zone.id(),
            kind = %zone.kind(),
            vertices = zone.vertices().len(),
            "Registered zone"
        );

        match zone.kind() {
            ZoneKind::Restricted => self.restricted.push(zone),
            ZoneKind::Safe => self.safe.push(zone),
        }
        Ok(())
    }

    /// Zones of one kind, in registration order.
    pub fn zones_of(&self, kind: ZoneKind) -> &[Zone] {
        match kind {
            ZoneKind::Restricted => &self.restricted,
            ZoneKind::Safe => &self.safe,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Zone> {
        self.iter().find(|zone| zone.id() == id)
    }

    /// All zones: restricted first, then safe, each in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.restricted.iter().chain(self.safe.iter())
    }

    pub fn len(&self) -> usize {
        self.restricted.len() + self.safe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freeze the registry for read-only sharing.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::LatLng;

    fn square(id: &str, kind: ZoneKind, offset: f64) -> Zone {
        Zone::new(
            id,
            kind,
            vec![
                LatLng::new(offset, offset),
                LatLng::new(offset, offset + 1.0),
                LatLng::new(offset + 1.0, offset + 1.0),
                LatLng::new(offset + 1.0, offset),
            ],
            id.to_uppercase(),
            "",
        )
    }

    #[test]
    fn test_register_groups_by_kind_in_order() {
        let mut registry = ZoneRegistry::new();
        registry.register(square("s1", ZoneKind::Safe, 0.0)).unwrap();
        registry
            .register(square("r1", ZoneKind::Restricted, 5.0))
            .unwrap();
        registry.register(square("s2", ZoneKind::Safe, 10.0)).unwrap();

        let safe: Vec<_> = registry
            .zones_of(ZoneKind::Safe)
            .iter()
            .map(|z| z.id())
            .collect();
        assert_eq!(safe, vec!["s1", "s2"]);
        assert_eq!(registry.zones_of(ZoneKind::Restricted).len(), 1);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_iter_lists_restricted_first() {
        let registry = ZoneRegistry::from_zones([
            square("s1", ZoneKind::Safe, 0.0),
            square("r1", ZoneKind::Restricted, 5.0),
        ])
        .unwrap();

        let ids: Vec<_> = registry.iter().map(|z| z.id()).collect();
        assert_eq!(ids, vec!["r1", "s1"]);
    }

    #[test]
    fn test_rejects_too_few_vertices() {
        let mut registry = ZoneRegistry::new();
        let zone = Zone::new(
            "line",
            ZoneKind::Safe,
            vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)],
            "",
            "",
        );

        assert_eq!(
            registry.register(zone),
            Err(InvalidZoneDefinition::TooFewVertices {
                id: "line".to_string(),
                count: 2
            })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_id_across_kinds() {
        let mut registry = ZoneRegistry::new();
        registry.register(square("a", ZoneKind::Safe, 0.0)).unwrap();

        let result = registry.register(square("a", ZoneKind::Restricted, 3.0));
        assert_eq!(
            result,
            Err(InvalidZoneDefinition::DuplicateId("a".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_rejects_empty_id() {
        let mut registry = ZoneRegistry::new();
        assert_eq!(
            registry.register(square("  ", ZoneKind::Safe, 0.0)),
            Err(InvalidZoneDefinition::EmptyId)
        );
    }

    #[test]
    fn test_rejects_out_of_range_vertex() {
        let mut registry = ZoneRegistry::new();
        let zone = Zone::new(
            "far",
            ZoneKind::Restricted,
            vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(95.0, 0.0),
                LatLng::new(0.0, 1.0),
            ],
            "",
            "",
        );

        assert!(matches!(
            registry.register(zone),
            Err(InvalidZoneDefinition::VertexOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_from_zones_stops_at_first_error() {
        let result = ZoneRegistry::from_zones([
            square("a", ZoneKind::Safe, 0.0),
            square("a", ZoneKind::Safe, 2.0),
        ]);
        assert!(matches!(result, Err(InvalidZoneDefinition::DuplicateId(_))));
    }

    #[test]
    fn test_get_and_shared() {
        let registry = ZoneRegistry::from_zones([square("r", ZoneKind::Restricted, 0.0)])
            .unwrap()
            .into_shared();

        assert_eq!(registry.get("r").map(|z| z.label()), Some("R"));
        assert!(registry.get("missing").is_none());
    }
}

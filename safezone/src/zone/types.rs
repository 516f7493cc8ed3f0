//! Zone type definitions

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::polygon::point_in_polygon;

/// Safety classification of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// Visitors should not be here.
    Restricted,
    /// Patrolled or otherwise designated safe area.
    Safe,
}

impl ZoneKind {
    /// All kinds, in resolution priority order.
    pub const PRIORITY: [ZoneKind; 2] = [ZoneKind::Restricted, ZoneKind::Safe];
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restricted => write!(f, "Restricted"),
            Self::Safe => write!(f, "Safe"),
        }
    }
}

impl FromStr for ZoneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restricted" => Ok(Self::Restricted),
            "safe" => Ok(Self::Safe),
            other => Err(format!(
                "unknown zone kind '{}', expected 'restricted' or 'safe'",
                other
            )),
        }
    }
}

/// A polygon vertex in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned lat/lng bounds of a polygon.
///
/// Used as a cheap pre-filter ahead of ray casting. Bounds are inclusive, so
/// a point on the box edge always falls through to the exact test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Compute the bounds of a vertex list, `None` when it is empty.
    pub fn from_vertices(vertices: &[LatLng]) -> Option<Self> {
        let first = vertices.first()?;
        let init = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        Some(vertices.iter().skip(1).fold(init, |b, v| Self {
            min_lat: b.min_lat.min(v.lat),
            max_lat: b.max_lat.max(v.lat),
            min_lng: b.min_lng.min(v.lng),
            max_lng: b.max_lng.max(v.lng),
        }))
    }

    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// A named polygonal zone.
///
/// Zones are immutable after construction. Validation happens when the zone
/// is registered, see [`super::ZoneRegistry::register`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    id: String,
    kind: ZoneKind,
    vertices: Vec<LatLng>,
    label: String,
    description: String,
    #[serde(skip)]
    bounds: Option<BoundingBox>,
}

impl Zone {
    /// Create a new zone definition.
    pub fn new(
        id: impl Into<String>,
        kind: ZoneKind,
        vertices: Vec<LatLng>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let bounds = BoundingBox::from_vertices(&vertices);
        Self {
            id: id.into(),
            kind,
            vertices,
            label: label.into(),
            description: description.into(),
            bounds,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// Polygon vertices in definition order. The ring is implicitly closed.
    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn bounds(&self) -> Option<&BoundingBox> {
        self.bounds.as_ref()
    }

    /// Check whether a coordinate lies inside this zone.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        match &self.bounds {
            Some(bounds) if bounds.contains(lat, lng) => {
                point_in_polygon(lat, lng, &self.vertices)
            }
            _ => false,
        }
    }
}

//! Zone definitions, point classification and the zone registry.
//!
//! A [`Zone`] is a named polygon with a safety classification. Zones are
//! registered once at startup into a [`ZoneRegistry`], which is then frozen
//! by converting it into an `Arc` and shared read-only with every session.
//!
//! # Components
//!
//! - `types` - `Zone`, `ZoneKind`, `LatLng`, `BoundingBox`
//! - `polygon` - even-odd ray casting point classifier
//! - `registry` - `ZoneRegistry` and `InvalidZoneDefinition`
//!
//! # Example
//!
//! ```
//! use safezone::zone::{LatLng, Zone, ZoneKind, ZoneRegistry};
//!
//! let mut registry = ZoneRegistry::new();
//! registry
//!     .register(Zone::new(
//!         "market",
//!         ZoneKind::Safe,
//!         vec![
//!             LatLng::new(0.0, 0.0),
//!             LatLng::new(0.0, 2.0),
//!             LatLng::new(2.0, 2.0),
//!             LatLng::new(2.0, 0.0),
//!         ],
//!         "Market Square",
//!         "Patrolled pedestrian area",
//!     ))
//!     .unwrap();
//!
//! let registry = registry.into_shared();
//! assert_eq!(registry.zones_of(ZoneKind::Safe).len(), 1);
//! ```

mod polygon;
mod registry;
mod types;

pub use polygon::point_in_polygon;
pub use registry::{InvalidZoneDefinition, ZoneRegistry, MIN_VERTICES};
pub use types::{BoundingBox, LatLng, Zone, ZoneKind};

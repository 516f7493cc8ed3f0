//! Zone definition file loading.
//!
//! Zones live in their own INI file, one section per zone. Section order is
//! registration order, which decides ties between overlapping zones of the
//! same kind.
//!
//! ```ini
//! [zone.old-fort]
//! kind = restricted
//! label = Old Fort Ruins
//! description = Unstable structures, closed after dusk
//! vertices = 12.9630,77.5760 | 12.9650,77.5760 | 12.9650,77.5785 | 12.9630,77.5785
//! ```

use std::path::Path;

use ini::Ini;
use thiserror::Error;
use tracing::{info, warn};

use crate::zone::{InvalidZoneDefinition, LatLng, Zone, ZoneKind, ZoneRegistry};

/// Prefix that marks a section as a zone definition.
pub const ZONE_SECTION_PREFIX: &str = "zone.";

/// Separator between vertices in the `vertices` key.
///
/// `;` and `#` are avoided since INI readers treat them as comment markers.
pub const VERTEX_SEPARATOR: char = '|';

/// Zone file errors.
#[derive(Debug, Error)]
pub enum ZoneFileError {
    /// Failed to read the zone file
    #[error("Failed to read zone file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to parse zone file text
    #[error("Failed to parse zone file: {0}")]
    Parse(#[from] ini::ParseError),

    /// A key is missing or malformed
    #[error("Invalid zone file value: [{section}] {key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// The zone parsed but failed registration
    #[error("Invalid zone in [{section}]: {source}")]
    InvalidZone {
        section: String,
        #[source]
        source: InvalidZoneDefinition,
    },
}

/// Load a zone file and register every zone it defines.
pub fn load_zones(path: &Path) -> Result<ZoneRegistry, ZoneFileError> {
    let ini = Ini::load_from_file(path)?;
    let registry = build_registry(&ini)?;
    info!(
        path = %path.display(),
        zones = registry.len(),
        "Loaded zone definitions"
    );
    Ok(registry)
}

/// Parse zone definitions from INI text.
pub fn parse_zones_str(content: &str) -> Result<ZoneRegistry, ZoneFileError> {
    let ini = Ini::load_from_str(content)?;
    build_registry(&ini)
}

/// Parse the zone sections of an `Ini`, in file order.
pub fn parse_zones(ini: &Ini) -> Result<Vec<(String, Zone)>, ZoneFileError> {
    let mut zones = Vec::new();

    for (name, section) in ini.iter() {
        let Some(name) = name else {
            continue;
        };
        let Some(id) = name.strip_prefix(ZONE_SECTION_PREFIX).map(str::trim) else {
            warn!(section = name, "Ignoring non-zone section in zone file");
            continue;
        };

        let kind_value = section.get("kind").unwrap_or_default();
        let kind: ZoneKind = kind_value
            .parse()
            .map_err(|reason| ZoneFileError::InvalidValue {
                section: name.to_string(),
                key: "kind".to_string(),
                value: kind_value.to_string(),
                reason,
            })?;

        let vertices_value = section.get("vertices").unwrap_or_default();
        let vertices =
            parse_vertices(vertices_value).map_err(|reason| ZoneFileError::InvalidValue {
                section: name.to_string(),
                key: "vertices".to_string(),
                value: vertices_value.to_string(),
                reason,
            })?;

        let label = section
            .get("label")
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(id);
        let description = section.get("description").unwrap_or_default().trim();

        zones.push((
            name.to_string(),
            Zone::new(id, kind, vertices, label, description),
        ));
    }

    Ok(zones)
}

fn build_registry(ini: &Ini) -> Result<ZoneRegistry, ZoneFileError> {
    let mut registry = ZoneRegistry::new();
    for (section, zone) in parse_zones(ini)? {
        registry
            .register(zone)
            .map_err(|source| ZoneFileError::InvalidZone { section, source })?;
    }
    Ok(registry)
}

/// Parse `lat,lng | lat,lng | ...` into vertices.
fn parse_vertices(value: &str) -> Result<Vec<LatLng>, String> {
    value
        .split(VERTEX_SEPARATOR)
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (lat, lng) = pair
                .split_once(',')
                .ok_or_else(|| format!("expected 'lat,lng', got '{}'", pair))?;
            let lat: f64 = lat
                .trim()
                .parse()
                .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
            let lng: f64 = lng
                .trim()
                .parse()
                .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;
            Ok(LatLng::new(lat, lng))
        })
        .collect()
}

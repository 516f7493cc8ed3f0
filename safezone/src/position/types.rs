//! Position type definitions

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// A coordinate or accuracy value outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MalformedPosition {
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),
    #[error("Invalid accuracy: {0} (must be a finite radius >= 0 meters)")]
    InvalidAccuracy(f64),
}

/// Check a latitude/longitude pair against the valid WGS84 ranges.
///
/// NaN and infinities are rejected by the range check.
#[inline]
pub fn validate_coordinate(lat: f64, lng: f64) -> Result<(), MalformedPosition> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(MalformedPosition::InvalidLatitude(lat));
    }
    if !(MIN_LNG..=MAX_LNG).contains(&lng) {
        return Err(MalformedPosition::InvalidLongitude(lng));
    }
    Ok(())
}

/// Where a position sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSource {
    /// From the device positioning provider.
    Gps,
    /// From the simulated input adapter (map click, pointer drag).
    Simulated,
}

impl fmt::Display for PositionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gps => write!(f, "GPS"),
            Self::Simulated => write!(f, "Simulated"),
        }
    }
}

/// A single observer position sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    /// Latitude in degrees (-90 to 90).
    pub lat: f64,

    /// Longitude in degrees (-180 to 180).
    pub lng: f64,

    /// Reported error radius in meters, if the source provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,

    /// Source of this sample.
    pub source: PositionSource,

    /// When this sample was captured.
    #[serde(skip)]
    pub captured_at: Instant,
}

impl Position {
    /// Create a validated position.
    pub fn new(
        lat: f64,
        lng: f64,
        accuracy_meters: Option<f64>,
        source: PositionSource,
        captured_at: Instant,
    ) -> Result<Self, MalformedPosition> {
        let position = Self {
            lat,
            lng,
            accuracy_meters,
            source,
            captured_at,
        };
        position.validate()?;
        Ok(position)
    }

    /// Create a GPS position captured now.
    pub fn gps(lat: f64, lng: f64, accuracy_meters: Option<f64>) -> Result<Self, MalformedPosition> {
        Self::new(
            lat,
            lng,
            accuracy_meters,
            PositionSource::Gps,
            Instant::now(),
        )
    }

    /// Create a simulated position captured now.
    ///
    /// Simulated samples carry no accuracy radius unless one is supplied.
    pub fn simulated(
        lat: f64,
        lng: f64,
        accuracy_meters: Option<f64>,
    ) -> Result<Self, MalformedPosition> {
        Self::new(
            lat,
            lng,
            accuracy_meters,
            PositionSource::Simulated,
            Instant::now(),
        )
    }

    /// Check that coordinates and accuracy are within their valid ranges.
    ///
    /// Fields are public, so positions built by hand (or by a provider) are
    /// re-validated at the monitor's ingestion boundary.
    pub fn validate(&self) -> Result<(), MalformedPosition> {
        validate_coordinate(self.lat, self.lng)?;
        if let Some(accuracy) = self.accuracy_meters {
            if !accuracy.is_finite() || accuracy < 0.0 {
                return Err(MalformedPosition::InvalidAccuracy(accuracy));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)?;
        if let Some(accuracy) = self.accuracy_meters {
            write!(f, " ±{:.0}m", accuracy)?;
        }
        Ok(())
    }
}

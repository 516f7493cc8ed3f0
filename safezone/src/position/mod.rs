//! Observer position samples.
//!
//! A [`Position`] is one fix from either the real positioning provider or the
//! simulated input adapter. Positions are ephemeral: the monitor keeps only
//! the latest one.
//!
//! Validation happens at the monitor's ingestion boundary through
//! [`Position::validate`], so a malformed coordinate is rejected before it
//! ever reaches the zone resolver.

mod types;

pub use types::{
    validate_coordinate, MalformedPosition, Position, PositionSource, MAX_LAT, MAX_LNG, MIN_LAT,
    MIN_LNG,
};

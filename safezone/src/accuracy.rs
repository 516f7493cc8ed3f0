//! Accuracy grading.
//!
//! Maps a reported error radius to a qualitative tier for display and
//! filtering. Lower meters mean a better fix.

use std::fmt;

use serde::Serialize;

/// Upper bound (inclusive) of the `High` tier, in meters.
pub const HIGH_ACCURACY_MAX_METERS: f64 = 10.0;

/// Upper bound (inclusive) of the `Medium` tier, in meters.
pub const MEDIUM_ACCURACY_MAX_METERS: f64 = 50.0;

/// Qualitative accuracy tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyTier {
    High,
    Medium,
    Low,
    /// No usable radius was reported.
    Unknown,
}

impl fmt::Display for AccuracyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Grade an accuracy radius.
///
/// `None`, negative and non-finite radii grade as [`AccuracyTier::Unknown`].
pub fn grade(accuracy_meters: Option<f64>) -> AccuracyTier {
    match accuracy_meters {
        Some(m) if !m.is_finite() || m < 0.0 => AccuracyTier::Unknown,
        Some(m) if m <= HIGH_ACCURACY_MAX_METERS => AccuracyTier::High,
        Some(m) if m <= MEDIUM_ACCURACY_MAX_METERS => AccuracyTier::Medium,
        Some(_) => AccuracyTier::Low,
        None => AccuracyTier::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(grade(Some(5.0)), AccuracyTier::High);
        assert_eq!(grade(Some(10.0)), AccuracyTier::High);
        assert_eq!(grade(Some(11.0)), AccuracyTier::Medium);
        assert_eq!(grade(Some(50.0)), AccuracyTier::Medium);
        assert_eq!(grade(Some(51.0)), AccuracyTier::Low);
        assert_eq!(grade(None), AccuracyTier::Unknown);
    }

    #[test]
    fn test_zero_radius_is_high() {
        assert_eq!(grade(Some(0.0)), AccuracyTier::High);
    }

    #[test]
    fn test_fractional_radius_just_above_bound() {
        assert_eq!(grade(Some(10.01)), AccuracyTier::Medium);
        assert_eq!(grade(Some(50.5)), AccuracyTier::Low);
    }

    #[test]
    fn test_unusable_radius_is_unknown() {
        assert_eq!(grade(Some(-3.0)), AccuracyTier::Unknown);
        assert_eq!(grade(Some(f64::NAN)), AccuracyTier::Unknown);
        assert_eq!(grade(Some(f64::INFINITY)), AccuracyTier::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(AccuracyTier::High.to_string(), "High");
        assert_eq!(AccuracyTier::Unknown.to_string(), "Unknown");
    }
}

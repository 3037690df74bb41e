//! Geographic observer location.

use serde::Serialize;

use crate::error::VedicError;

/// Geographic location on Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location (unchecked).
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a location, rejecting non-finite values and |latitude| > 90.
    ///
    /// Longitude is not range-checked; sidereal time wraps it modulo 360.
    /// Exactly ±90 passes here and is rejected later by the Lagna formula.
    pub fn checked(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !longitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("longitude must be finite"));
        }
        Ok(Self::new(latitude_deg, longitude_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_delhi() {
        let loc = GeoLocation::checked(28.6139, 77.209).unwrap();
        assert_eq!(loc, GeoLocation::new(28.6139, 77.209));
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(GeoLocation::checked(91.0, 0.0).is_err());
        assert!(GeoLocation::checked(f64::NAN, 0.0).is_err());
        assert!(GeoLocation::checked(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn checked_passes_pole_through() {
        assert!(GeoLocation::checked(90.0, 0.0).is_ok());
    }
}

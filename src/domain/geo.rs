// SPDX-License-Identifier: MPL-2.0
//! Geographic coordinate types shared by the map view and location port.

use std::fmt;

/// Valid latitude range in degrees.
pub mod latitude_bounds {
    pub const MIN: f64 = -90.0;
    pub const MAX: f64 = 90.0;
}

/// Valid longitude range in degrees.
pub mod longitude_bounds {
    pub const MIN: f64 = -180.0;
    pub const MAX: f64 = 180.0;
}

/// A WGS-84 coordinate pair, guaranteed to be within valid ranges.
///
/// # Example
///
/// ```
/// use geodrop::domain::geo::Coordinates;
///
/// let position = Coordinates::new(48.8584, 2.2945).unwrap();
/// assert!((position.latitude() - 48.8584).abs() < 1e-9);
/// assert!(Coordinates::new(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair, returning `None` when either component is
    /// out of range or not finite.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let lat_valid = latitude.is_finite()
            && (latitude_bounds::MIN..=latitude_bounds::MAX).contains(&latitude);
        let lon_valid = longitude.is_finite()
            && (longitude_bounds::MIN..=longitude_bounds::MAX).contains(&longitude);

        if lat_valid && lon_valid {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Fractional Web-Mercator tile position of this coordinate at `zoom`.
    ///
    /// Used by the map surface to derive a stable grid offset for the
    /// rendered tiles.
    #[must_use]
    pub fn tile_fraction(&self, zoom: u8) -> (f64, f64) {
        let n = f64::from(1u32 << u32::from(zoom.min(22)));
        let x = (self.longitude + 180.0) / 360.0 * n;
        let lat_rad = self.latitude.to_radians();
        let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n;
        (x, y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

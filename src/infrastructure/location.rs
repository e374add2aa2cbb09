// SPDX-License-Identifier: MPL-2.0
//! Static location adapter.
//!
//! Serves a coordinate configured via CLI flags or `settings.toml`. With no
//! source configured it reports `Unavailable`, which the map surfaces as an
//! error banner while staying on the fallback center.

use crate::application::port::location::{LocationError, LocationProvider};
use crate::domain::geo::Coordinates;

#[derive(Debug, Clone, Default)]
pub struct StaticLocationProvider {
    position: Option<Coordinates>,
}

impl StaticLocationProvider {
    #[must_use]
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }

    /// Builds a provider from optional latitude/longitude parts. Both must
    /// be present and in range for a position to be served.
    #[must_use]
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        let position = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
            _ => None,
        };
        Self { position }
    }
}

impl LocationProvider for StaticLocationProvider {
    fn locate(&self) -> Result<Coordinates, LocationError> {
        self.position.ok_or(LocationError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_configured_position() {
        let provider = StaticLocationProvider::from_parts(Some(48.85), Some(2.29));
        let position = provider.locate().expect("position should resolve");
        assert!((position.latitude() - 48.85).abs() < 1e-9);
    }

    #[test]
    fn missing_longitude_means_unavailable() {
        let provider = StaticLocationProvider::from_parts(Some(48.85), None);
        assert_eq!(provider.locate(), Err(LocationError::Unavailable));
    }

    #[test]
    fn out_of_range_parts_mean_unavailable() {
        let provider = StaticLocationProvider::from_parts(Some(123.0), Some(2.29));
        assert_eq!(provider.locate(), Err(LocationError::Unavailable));
    }

    #[test]
    fn default_provider_is_unavailable() {
        let provider = StaticLocationProvider::default();
        assert_eq!(provider.locate(), Err(LocationError::Unavailable));
    }
}

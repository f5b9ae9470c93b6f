//! Geographic coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// WGS84 point, serialized as a `[longitude, latitude]` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    longitude: f64,
    latitude: f64,
}

impl Coordinates {
    /// Creates a point, validating both axes
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, CoreError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::out_of_range("longitude", longitude, "-180..=180"));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::out_of_range("latitude", latitude, "-90..=90"));
        }
        Ok(Self { longitude, latitude })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl TryFrom<(f64, f64)> for Coordinates {
    type Error = CoreError;

    fn try_from((longitude, latitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(c: Coordinates) -> (f64, f64) {
        (c.longitude, c.latitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°N, {:.4}°E", self.latitude, self.longitude)
    }
}

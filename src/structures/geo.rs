use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::query::render_finite;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLng {
            latitude,
            longitude,
        }
    }

    /// `longitude,latitude`, the order the directions API expects in paths.
    /// Both components must be finite.
    pub fn path_component(&self) -> String {
        format!(
            "{},{}",
            render_finite(self.longitude),
            render_finite(self.latitude)
        )
    }
}

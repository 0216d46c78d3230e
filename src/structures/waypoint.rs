use serde::{Deserialize, Serialize};

use crate::structures::LatLng;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub coordinate: LatLng,
    pub name: Option<String>,
}

impl Waypoint {
    pub fn new(coordinate: LatLng) -> Self {
        Waypoint {
            coordinate,
            name: None,
        }
    }

    pub fn named(coordinate: LatLng, name: impl Into<String>) -> Self {
        Waypoint {
            coordinate,
            name: Some(name.into()),
        }
    }
}

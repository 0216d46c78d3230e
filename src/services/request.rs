use tracing::debug;
use url::Url;

use crate::{
    error::DirectionsError,
    structures::{ApiConfig, RouteOptions},
};

const DIRECTIONS_PATH: [&str; 3] = ["directions", "v5", "mapbox"];

/// Builds directions request URLs against a configured API host.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    base_url: Url,
    access_token: String,
}

impl DirectionsClient {
    pub fn new(api: &ApiConfig) -> Result<Self, DirectionsError> {
        let base_url = Url::parse(&api.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(DirectionsError::InvalidBaseUrl(api.base_url.clone()));
        }

        Ok(DirectionsClient {
            base_url,
            access_token: api.access_token.clone(),
        })
    }

    pub fn request_url(&self, options: &RouteOptions) -> Result<Url, DirectionsError> {
        if options.waypoints.len() < 2 {
            return Err(DirectionsError::NotEnoughWaypoints(options.waypoints.len()));
        }

        let mut coordinates = Vec::with_capacity(options.waypoints.len());
        for waypoint in &options.waypoints {
            let c = waypoint.coordinate;
            if !c.latitude.is_finite() {
                return Err(DirectionsError::InvalidValue {
                    field: "latitude",
                    value: c.latitude,
                });
            }
            if !c.longitude.is_finite() {
                return Err(DirectionsError::InvalidValue {
                    field: "longitude",
                    value: c.longitude,
                });
            }
            coordinates.push(c.path_component());
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DirectionsError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(DIRECTIONS_PATH)
            .push(options.profile.identifier())
            .push(&coordinates.join(";"));

        let items = options.query_items();
        url.query_pairs_mut()
            .extend_pairs(items.iter().map(|i| (i.name.as_str(), i.value.as_str())))
            .append_pair("access_token", &self.access_token);

        debug!(
            profile = options.profile.identifier(),
            from = %options.waypoints[0].coordinate,
            waypoints = options.waypoints.len(),
            "Built directions request URL"
        );
        Ok(url)
    }
}

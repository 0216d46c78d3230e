use async_graphql::Enum;
use chrono::NaiveDateTime;

use crate::{
    query::QueryItem,
    structures::{WalkingOptions, Waypoint},
};

const DEPART_AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Enum, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    #[default]
    Walking,
    Cycling,
    Driving,
    DrivingTraffic,
}

impl Profile {
    pub fn identifier(&self) -> &'static str {
        match self {
            Profile::Walking => "walking",
            Profile::Cycling => "cycling",
            Profile::Driving => "driving",
            Profile::DrivingTraffic => "driving-traffic",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Geometries {
    #[default]
    Polyline,
    Polyline6,
    GeoJson,
}

impl Geometries {
    pub fn identifier(&self) -> &'static str {
        match self {
            Geometries::Polyline => "polyline",
            Geometries::Polyline6 => "polyline6",
            Geometries::GeoJson => "geojson",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptions {
    pub profile: Profile,
    pub waypoints: Vec<Waypoint>,
    pub geometries: Geometries,
    pub include_steps: bool,
    pub alternatives: bool,
    pub language: Option<String>,
    pub depart_at: Option<NaiveDateTime>,
    /// Only sent with the walking profile.
    pub walking: WalkingOptions,
}

impl RouteOptions {
    pub fn new(profile: Profile, waypoints: Vec<Waypoint>) -> Self {
        RouteOptions {
            profile,
            waypoints,
            geometries: Geometries::default(),
            include_steps: false,
            alternatives: false,
            language: None,
            depart_at: None,
            walking: WalkingOptions::default(),
        }
    }

    pub fn walking(waypoints: Vec<Waypoint>) -> Self {
        RouteOptions::new(Profile::Walking, waypoints)
    }

    pub fn query_items(&self) -> Vec<QueryItem> {
        let mut items = vec![
            QueryItem::new("geometries", self.geometries.identifier()),
            QueryItem::new("steps", self.include_steps.to_string()),
            QueryItem::new("alternatives", self.alternatives.to_string()),
        ];

        if let Some(language) = &self.language {
            items.push(QueryItem::new("language", language.as_str()));
        }

        if let Some(depart_at) = self.depart_at {
            items.push(QueryItem::new(
                "depart_at",
                depart_at.format(DEPART_AT_FORMAT).to_string(),
            ));
        }

        if self.waypoints.iter().any(|w| w.name.is_some()) {
            let names: Vec<&str> = self
                .waypoints
                .iter()
                .map(|w| w.name.as_deref().unwrap_or(""))
                .collect();
            items.push(QueryItem::new("waypoint_names", names.join(";")));
        }

        if self.profile == Profile::Walking {
            items.extend(self.walking.query_items());
        }

        items
    }
}

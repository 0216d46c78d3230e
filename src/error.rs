use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("Invalid value for '{field}': {value} is not a finite number")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("A route needs at least two waypoints, got {0}")]
    NotEnoughWaypoints(usize),

    #[error("Base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to parse URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yml::Error),
}

mod config;
mod geo;
mod route_options;
mod walking;
mod waypoint;

pub use config::*;
pub use geo::*;
pub use route_options::*;
pub use walking::*;
pub use waypoint::*;

//! Local weather for the realworld apps
//!
//! Current conditions via OpenWeatherMap, a location tracker fed by a
//! pluggable position source, and the wind-direction indicator model.

pub mod location;
pub mod provider;
pub mod types;
pub mod wind;

pub use location::{FixedLocation, LocationSource, LocationTracker, UnavailableLocation};
pub use provider::{api_config, WeatherProvider, OPENWEATHER_API};
pub use types::*;
pub use wind::WindDirection;

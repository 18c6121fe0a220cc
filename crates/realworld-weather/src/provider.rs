//! Current conditions from OpenWeatherMap.

use chrono::{DateTime, Utc};
use realworld_fetch::{ApiConfig, FetchError, RemoteResourceFetcher, ResourceError, ResourceRequest};
use serde::Deserialize;

use crate::location::{LocationSource, LocationTracker};
use crate::types::{CurrentWeather, Location, TemperatureUnit, WeatherCondition, WeatherError};

pub const OPENWEATHER_API: &str = "https://api.openweathermap.org";
const API_KEY_PARAM: &str = "appid";
const CURRENT_WEATHER_PATH: &str = "data/2.5/weather";

const READ_WEATHER_FAILED: &str = "An error occurred while trying to read the weather";

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    weather: Vec<ConditionEntry>,
    main: MainReadings,
    #[serde(default)]
    wind: Option<WindReadings>,
    dt: i64,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    id: i32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WindReadings {
    speed: f64,
    #[serde(default)]
    deg: u16,
}

impl From<CurrentResponse> for CurrentWeather {
    fn from(body: CurrentResponse) -> Self {
        let primary = body.weather.into_iter().next();
        let (condition, summary, icon) = match primary {
            Some(entry) => (
                WeatherCondition::from_condition_code(entry.id),
                entry.description,
                entry.icon,
            ),
            None => (WeatherCondition::default(), String::new(), None),
        };
        let (wind_speed, wind_degrees) = body.wind.map_or((0.0, 0), |w| (w.speed, w.deg));

        Self {
            temperature: body.main.temp,
            feels_like: body.main.feels_like,
            humidity: body.main.humidity,
            wind_speed,
            wind_degrees,
            condition,
            summary,
            icon,
            place_name: body.name.filter(|n| !n.is_empty()),
            updated_at: DateTime::<Utc>::from_timestamp(body.dt, 0).unwrap_or_else(Utc::now),
        }
    }
}

/// Endpoint configuration for OpenWeatherMap. Payloads are the whole body.
pub fn api_config(base_url: &str, api_key: &str) -> ApiConfig {
    ApiConfig::new(base_url, API_KEY_PARAM, api_key)
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    fetcher: RemoteResourceFetcher,
    unit: TemperatureUnit,
}

impl WeatherProvider {
    pub fn new(config: ApiConfig, unit: TemperatureUnit) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: RemoteResourceFetcher::new(config)?,
            unit,
        })
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    fn request(&self, location: &Location) -> ResourceRequest {
        ResourceRequest::new(CURRENT_WEATHER_PATH)
            .with_query(format!("lat={}&lon={}", location.latitude, location.longitude))
            .with_param("units", self.unit.as_query())
    }

    /// Current conditions at `location`.
    pub async fn current(&self, location: &Location) -> Result<CurrentWeather, ResourceError> {
        let body: CurrentResponse = self
            .fetcher
            .fetch_record(&self.request(location), READ_WEATHER_FAILED)
            .await?;
        Ok(body.into())
    }

    /// Locate through `source`, then read the weather there.
    pub async fn current_for<S: LocationSource>(
        &self,
        source: &S,
        tracker: &mut LocationTracker,
    ) -> Result<CurrentWeather, WeatherError> {
        let location = tracker.locate(source).await?;
        Ok(self.current(&location).await?)
    }
}

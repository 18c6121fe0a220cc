use chrono::{DateTime, Utc};
use realworld_fetch::ResourceError;
use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Value of the `units` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Celsius => "metric",
            Self::Fahrenheit => "imperial",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Wind speed unit reported alongside these temperatures
    pub fn speed_unit(&self) -> &'static str {
        match self {
            Self::Celsius => "m/s",
            Self::Fahrenheit => "mph",
        }
    }
}

/// Weather condition categories mapped from OpenWeatherMap condition codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    Sleet,
    Thunderstorm,
}

impl WeatherCondition {
    /// See: https://openweathermap.org/weather-conditions
    pub fn from_condition_code(code: i32) -> Self {
        match code {
            200..=232 => Self::Thunderstorm,
            300..=321 => Self::Drizzle,
            500 | 501 => Self::Rain,
            502..=504 | 520..=531 => Self::HeavyRain,
            511 => Self::Sleet, // Freezing rain
            611..=616 => Self::Sleet,
            600..=602 | 620..=622 => Self::Snow,
            701..=781 => Self::Fog,
            800 => Self::Clear,
            801 | 802 => Self::PartlyCloudy,
            803 | 804 => Self::Cloudy,
            _ => Self::Clear, // Unknown codes default to clear
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Snow => "Snow",
            Self::Sleet => "Sleet",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

/// Geographic position reported by a location source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current weather conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub wind_degrees: u16,
    pub condition: WeatherCondition,
    /// Provider's own wording, e.g. "broken clouds"
    pub summary: String,
    pub icon: Option<String>,
    pub place_name: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl CurrentWeather {
    /// Icon URL on the provider's CDN
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|icon| format!("https://openweathermap.org/img/wn/{}@2x.png", icon))
    }
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
}

/// Weather lookup errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_clear() {
        assert_eq!(WeatherCondition::from_condition_code(800), WeatherCondition::Clear);
    }

    #[test]
    fn test_condition_clouds() {
        assert_eq!(WeatherCondition::from_condition_code(801), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_condition_code(802), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_condition_code(803), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_condition_code(804), WeatherCondition::Cloudy);
    }

    #[test]
    fn test_condition_thunderstorm() {
        assert_eq!(WeatherCondition::from_condition_code(200), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_condition_code(232), WeatherCondition::Thunderstorm);
    }

    #[test]
    fn test_condition_drizzle() {
        assert_eq!(WeatherCondition::from_condition_code(300), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_condition_code(321), WeatherCondition::Drizzle);
    }

    #[test]
    fn test_condition_rain() {
        assert_eq!(WeatherCondition::from_condition_code(500), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_condition_code(502), WeatherCondition::HeavyRain);
        assert_eq!(WeatherCondition::from_condition_code(522), WeatherCondition::HeavyRain);
    }

    #[test]
    fn test_condition_sleet_and_snow() {
        assert_eq!(WeatherCondition::from_condition_code(511), WeatherCondition::Sleet);
        assert_eq!(WeatherCondition::from_condition_code(611), WeatherCondition::Sleet);
        assert_eq!(WeatherCondition::from_condition_code(600), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_condition_code(622), WeatherCondition::Snow);
    }

    #[test]
    fn test_condition_atmosphere_is_fog() {
        assert_eq!(WeatherCondition::from_condition_code(701), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_condition_code(741), WeatherCondition::Fog);
    }

    #[test]
    fn test_condition_unknown_defaults_to_clear() {
        assert_eq!(WeatherCondition::from_condition_code(999), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_condition_code(-1), WeatherCondition::Clear);
    }

    #[test]
    fn test_condition_description() {
        assert_eq!(WeatherCondition::HeavyRain.description(), "Heavy Rain");
        assert_eq!(WeatherCondition::Thunderstorm.description(), "Thunderstorm");
    }

    #[test]
    fn test_units() {
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::Celsius.as_query(), "metric");
        assert_eq!(TemperatureUnit::Fahrenheit.as_query(), "imperial");
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
        assert_eq!(TemperatureUnit::Celsius.speed_unit(), "m/s");
        assert_eq!(TemperatureUnit::Fahrenheit.speed_unit(), "mph");
    }
}

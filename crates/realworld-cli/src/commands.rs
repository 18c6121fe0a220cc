//! Subcommand handlers. Each one stands in for a routed view of the apps.

use realworld_core::{ApiSettings, AppError, ConfigError, Config};
use realworld_fetch::ApiConfig;
use realworld_marvel::MarvelClient;
use realworld_recipes::RecipeClient;
use realworld_weather::{
    FixedLocation, Location, LocationTracker, UnavailableLocation, WeatherError,
    WeatherProvider, WindDirection,
};

use crate::output;
use crate::{OutputFormat, WeatherArgs};

/// Turn stored settings into an endpoint config, refusing to run without a key.
fn endpoint(
    section: &str,
    settings: &ApiSettings,
    build: fn(&str, &str) -> ApiConfig,
) -> Result<ApiConfig, AppError> {
    if !settings.is_configured() {
        return Err(ConfigError::MissingSetting(format!("{}.api_key", section)).into());
    }
    Ok(build(&settings.base_url, &settings.api_key).with_page_size(settings.page_size))
}

fn from_weather_error(e: WeatherError) -> AppError {
    match e {
        WeatherError::Resource(e) => AppError::Resource(e),
        WeatherError::Location(e) => AppError::Location(e.to_string()),
    }
}

pub async fn comics(config: &Config, page: u32, format: OutputFormat) -> Result<(), AppError> {
    let client = MarvelClient::new(endpoint("marvel", &config.marvel, realworld_marvel::api_config)?)?;
    let comics = client.comics(page).await?;

    match format {
        OutputFormat::Json => output::print_json(&comics),
        OutputFormat::Text => {
            output::comics(&comics);
            Ok(())
        }
    }
}

pub async fn characters(
    config: &Config,
    name: &str,
    page: Option<u32>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = MarvelClient::new(endpoint("marvel", &config.marvel, realworld_marvel::api_config)?)?;
    let characters = client.search_characters(name, page).await?;

    match format {
        OutputFormat::Json => output::print_json(&characters),
        OutputFormat::Text => {
            output::characters(name, &characters);
            Ok(())
        }
    }
}

pub async fn recipes(config: &Config, query: &str, format: OutputFormat) -> Result<(), AppError> {
    let client =
        RecipeClient::new(endpoint("recipes", &config.recipes, realworld_recipes::api_config)?)?;
    let found = client.search(query).await?;

    match format {
        OutputFormat::Json => output::print_json(&found),
        OutputFormat::Text => {
            output::recipes(query, &found);
            Ok(())
        }
    }
}

pub async fn recipe(config: &Config, id: &str, format: OutputFormat) -> Result<(), AppError> {
    let client =
        RecipeClient::new(endpoint("recipes", &config.recipes, realworld_recipes::api_config)?)?;
    let recipe = client.information(id).await?;

    match format {
        OutputFormat::Json => output::print_json(&recipe),
        OutputFormat::Text => {
            output::recipe(&recipe);
            Ok(())
        }
    }
}

pub async fn weather(
    config: &Config,
    args: &WeatherArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let api = endpoint("weather.api", &config.weather.api, realworld_weather::api_config)?;
    let unit = config.weather.temperature_unit;
    let provider = WeatherProvider::new(api, unit)?;

    let fixed = args
        .lat
        .zip(args.lon)
        .map(|(latitude, longitude)| Location {
            latitude,
            longitude,
        })
        .or_else(|| {
            config.weather.location.map(|c| Location {
                latitude: c.latitude,
                longitude: c.longitude,
            })
        });

    let mut tracker = LocationTracker::new();
    let current = match fixed {
        Some(location) => {
            provider
                .current_for(&FixedLocation(location), &mut tracker)
                .await
        }
        None => provider.current_for(&UnavailableLocation, &mut tracker).await,
    }
    .map_err(from_weather_error)?;

    match format {
        OutputFormat::Json => output::print_json(&current),
        OutputFormat::Text => {
            output::weather(&tracker, &current, unit);
            Ok(())
        }
    }
}

pub fn wind(degrees: u16, format: OutputFormat) {
    let wind = WindDirection::new(degrees);
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "degrees": wind.degrees(),
                "transform": wind.transform(),
                "compass_point": wind.compass_point(),
                "label": wind.screen_reader_text(),
            });
            println!("{}", value);
        }
        OutputFormat::Text => output::wind(&wind),
    }
}

pub fn show_config(config: &Config) -> Result<(), AppError> {
    let path = Config::config_path()?;
    println!("Config file: {}", path.display());

    let validation = config.validate();
    for warning in &validation.warnings {
        println!("  warning: {}", warning);
    }
    for error in &validation.errors {
        println!("  error: {}", error);
    }

    if !validation.is_valid() {
        return Err(ConfigError::Invalid(validation.error_summary()).into());
    }
    println!("Configuration is valid");
    Ok(())
}

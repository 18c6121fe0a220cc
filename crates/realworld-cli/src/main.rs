//! `realworld` - browse comics, plan meals and check the local weather.
//!
//! ```bash
//! realworld comics 2                 # third page of the comics catalog
//! realworld characters "spider"      # character search
//! realworld recipes pasta            # recipe search
//! realworld recipe 716429            # recipe details
//! realworld weather --lat 51.5074 --lon -0.1278
//! realworld wind 270
//! ```

mod commands;
mod output;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use realworld_core::{AppError, Config};

/// Browse comics, plan meals and check the local weather.
#[derive(Debug, Parser)]
#[command(name = "realworld")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the comics catalog, one page at a time
    Comics {
        /// Zero-based page number
        #[arg(default_value_t = 0)]
        page: u32,
    },
    /// Search characters by the start of their name
    Characters {
        name: String,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Search recipes
    Recipes { query: String },
    /// Show full information for one recipe
    Recipe { id: String },
    /// Current weather at a position
    Weather(WeatherArgs),
    /// Render the wind-direction indicator for a bearing
    Wind { degrees: u16 },
    /// Show the config file location and validation results
    Config,
}

#[derive(Debug, Args)]
pub struct WeatherArgs {
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = realworld_core::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            output::error_view(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    run_with(cli, || Ok(Config::load()?)).await
}

/// Dispatch a command. The config file is only read by commands that use it,
/// and commands that talk to an API refuse to run on an invalid config.
async fn run_with<F>(cli: Cli, load: F) -> Result<(), AppError>
where
    F: FnOnce() -> Result<Config, AppError>,
{
    let format = cli.format;

    match cli.command {
        Commands::Comics { page } => {
            commands::comics(&load()?.into_validated()?, page, format).await
        }
        Commands::Characters { name, page } => {
            commands::characters(&load()?.into_validated()?, &name, page, format).await
        }
        Commands::Recipes { query } => {
            commands::recipes(&load()?.into_validated()?, &query, format).await
        }
        Commands::Recipe { id } => commands::recipe(&load()?.into_validated()?, &id, format).await,
        Commands::Weather(args) => {
            commands::weather(&load()?.into_validated()?, &args, format).await
        }
        Commands::Wind { degrees } => {
            commands::wind(degrees, format);
            Ok(())
        }
        Commands::Config => commands::show_config(&load()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realworld_core::ConfigError;

    fn unreadable_config() -> Result<Config, AppError> {
        Err(ConfigError::Invalid("config file is unreadable".into()).into())
    }

    #[test]
    fn test_comics_page_defaults_to_zero() {
        let cli = Cli::try_parse_from(["realworld", "comics"]).unwrap();
        assert!(matches!(cli.command, Commands::Comics { page: 0 }));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_comics_page_argument() {
        let cli = Cli::try_parse_from(["realworld", "comics", "2", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Comics { page: 2 }));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_negative_page_rejected() {
        assert!(Cli::try_parse_from(["realworld", "comics", "-1"]).is_err());
    }

    #[test]
    fn test_weather_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["realworld", "weather", "--lat", "51.5"]).is_err());

        let cli = Cli::try_parse_from([
            "realworld", "weather", "--lat", "51.5074", "--lon", "-0.1278",
        ])
        .unwrap();
        match cli.command {
            Commands::Weather(args) => {
                assert_eq!(args.lat, Some(51.5074));
                assert_eq!(args.lon, Some(-0.1278));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_characters_with_page() {
        let cli =
            Cli::try_parse_from(["realworld", "characters", "iron", "--page", "1"]).unwrap();
        match cli.command {
            Commands::Characters { name, page } => {
                assert_eq!(name, "iron");
                assert_eq!(page, Some(1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wind_runs_without_config() {
        let cli = Cli::try_parse_from(["realworld", "wind", "270"]).unwrap();
        run_with(cli, unreadable_config).await.unwrap();
    }

    #[tokio::test]
    async fn test_api_command_surfaces_config_error() {
        let cli = Cli::try_parse_from(["realworld", "comics"]).unwrap();
        let err = run_with(cli, unreadable_config).await.unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_api_command_rejects_invalid_config() {
        let mut config = Config::default();
        config.marvel.api_key = "KEY".into();
        config.marvel.base_url = "not-a-url".into();

        let cli = Cli::try_parse_from(["realworld", "comics"]).unwrap();
        let err = run_with(cli, || Ok(config)).await.unwrap_err();
        match err {
            AppError::Config(ConfigError::Invalid(message)) => {
                assert!(message.contains("marvel.base_url"), "{}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::{
    Config, FavoritesStore, JsonFileFavorites, LocationQuery, OpenWeatherClient, UnitSystem,
    WeatherAggregator,
};
use tracing::info;

use skycast_cli::{
    http::{AppState, create_router},
    render::Report,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather, outfit and playlist suggestions")]
pub struct Cli {
    /// Path to config.toml; defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default city.
    Configure,

    /// Show weather and suggestions for a city.
    Show {
        /// City name.
        city: String,

        /// "metric" or "imperial".
        #[arg(long, default_value = "metric")]
        units: String,
    },

    /// Run the HTTP API.
    Serve {
        /// Overrides the configured port.
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(self.config),
            Command::Show { city, units } => {
                let config = load_config(self.config.as_ref())?;
                show(&config, &city, &units).await
            }
            Command::Serve { port } => {
                let mut config = load_config(self.config.as_ref())?;
                if let Some(port) = port {
                    config.port = port;
                }
                serve(config).await
            }
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn configure(path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = match &path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    let default_city = inquire::Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;

    config.set_api_key(api_key.trim().to_string());
    config.default_city = default_city.trim().to_string();
    let saved_to = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => {
            config.save()?;
            Config::config_file_path()?
        }
    };

    println!("Saved configuration to {}", saved_to.display());
    Ok(())
}

async fn show(config: &Config, city: &str, units: &str) -> anyhow::Result<()> {
    let units = UnitSystem::try_from(units)?;
    let query = LocationQuery::new(city, units)?;

    let aggregator = WeatherAggregator::new(Box::new(OpenWeatherClient::from_config(config)?));
    let report = aggregator
        .get_weather_report(&query)
        .await
        .with_context(|| format!("Could not get weather for '{}'", query.name()))?;

    print!("{}", Report(&report));
    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let client = OpenWeatherClient::from_config(&config)?;
    let favorites_path = config.favorites_file()?;
    info!(path = %favorites_path.display(), "using favorites file");
    let favorites: Arc<dyn FavoritesStore> = Arc::new(JsonFileFavorites::new(favorites_path));

    let aggregator = WeatherAggregator::new(Box::new(client));
    let state = AppState::new(aggregator, favorites, config.default_city.as_str());
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

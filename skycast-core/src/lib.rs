//! Core library for `skycast`.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client behind the `UpstreamWeatherClient` seam
//! - Forecast reduction, clothing/playlist rules and report aggregation
//! - Favorites storage
//!
//! It is used by `skycast-cli`, both for the HTTP server and the terminal report.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod favorites;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod suggestion;
pub mod units;

pub use aggregator::WeatherAggregator;
pub use config::Config;
pub use error::{UpstreamStage, WeatherError};
pub use favorites::{FavoritesStore, JsonFileFavorites, MemoryFavorites};
pub use model::{
    Coordinates, CurrentConditions, DailyForecast, ForecastEntry, LocationQuery, Suggestion,
    WeatherReport,
};
pub use provider::{OpenWeatherClient, UpstreamWeatherClient};
pub use suggestion::Mood;
pub use units::UnitSystem;

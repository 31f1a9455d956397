//! Application state for the HTTP server.

use std::sync::Arc;

use skycast_core::{FavoritesStore, WeatherAggregator};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<WeatherAggregator>,
    pub favorites: Arc<dyn FavoritesStore>,
    /// City used when `/weather` is called without one.
    pub default_city: Arc<str>,
}

impl AppState {
    pub fn new(
        aggregator: WeatherAggregator,
        favorites: Arc<dyn FavoritesStore>,
        default_city: impl Into<Arc<str>>,
    ) -> Self {
        Self { aggregator: Arc::new(aggregator), favorites, default_city: default_city.into() }
    }
}

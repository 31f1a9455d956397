use crate::{Coordinates, CurrentConditions, ForecastEntry, UnitSystem, WeatherError};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// The two upstream calls the aggregator depends on.
///
/// The forecast is addressed by the coordinates returned from
/// [`fetch_current`](Self::fetch_current), so the location is resolved once.
/// Implementations keep no state between calls and never retry.
#[async_trait]
pub trait UpstreamWeatherClient: Send + Sync + Debug {
    async fn fetch_current(
        &self,
        name: &str,
        units: UnitSystem,
    ) -> Result<CurrentConditions, WeatherError>;

    async fn fetch_forecast_series(
        &self,
        coordinates: Coordinates,
        units: UnitSystem,
    ) -> Result<Vec<ForecastEntry>, WeatherError>;
}

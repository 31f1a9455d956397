use tracing::{debug, instrument};

use crate::{
    LocationQuery, WeatherError, WeatherReport, forecast,
    provider::UpstreamWeatherClient,
    suggestion::{self, RULES_VERSION},
};

/// Joins current conditions, the reduced forecast and suggestions into one report.
#[derive(Debug)]
pub struct WeatherAggregator {
    client: Box<dyn UpstreamWeatherClient>,
}

impl WeatherAggregator {
    pub fn new(client: Box<dyn UpstreamWeatherClient>) -> Self {
        Self { client }
    }

    /// Builds the full report for `query`, or fails as a whole.
    ///
    /// The forecast call is only issued once current conditions have resolved,
    /// since it is addressed by their coordinates. Errors from either call are
    /// returned unchanged.
    #[instrument(skip(self), fields(city = %query.name(), units = %query.units()))]
    pub async fn get_weather_report(
        &self,
        query: &LocationQuery,
    ) -> Result<WeatherReport, WeatherError> {
        let units = query.units();

        let current = self.client.fetch_current(query.name(), units).await?;
        let series = self.client.fetch_forecast_series(current.coordinates, units).await?;

        let forecast = forecast::reduce(&series);
        let suggestion = suggestion::suggest(current.temperature, units, &current.condition_code);

        debug!(
            location = %current.location_name,
            samples = series.len(),
            days = forecast.len(),
            mood = ?suggestion.mood,
            rules = RULES_VERSION,
            "weather report assembled"
        );

        Ok(WeatherReport { current, forecast, suggestion, units })
    }
}

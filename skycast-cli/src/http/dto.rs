//! Request and response shapes for the HTTP API.

use serde::{Deserialize, Serialize};
use skycast_core::{DailyForecast, LocationQuery, UnitSystem, WeatherError, WeatherReport};

/// Raw `/weather` query string. Defaults are applied in [`WeatherParams::resolve`].
#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
    pub units: Option<String>,
}

impl WeatherParams {
    /// A missing city means `default_city`; a present but blank one is rejected.
    pub fn resolve(self, default_city: &str) -> Result<LocationQuery, WeatherError> {
        let units = UnitSystem::parse_or_default(self.units.as_deref());
        let city = self.city.unwrap_or_else(|| default_city.to_string());
        LocationQuery::new(city, units)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub current_weather: CurrentWeatherDto,
    pub forecast: Vec<ForecastDayDto>,
    /// "Celsius" or "Fahrenheit".
    pub units: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeatherDto {
    pub temperature: f64,
    pub description: String,
    pub city: String,
    pub units: &'static str,
    pub clothing: Vec<String>,
    pub playlist_id: String,
    pub playlist_url: String,
}

#[derive(Debug, Serialize)]
pub struct ForecastDayDto {
    /// `YYYY-MM-DD`
    pub date: String,
    pub temperature: TemperatureRangeDto,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TemperatureRangeDto {
    pub min: f64,
    pub max: f64,
}

impl From<DailyForecast> for ForecastDayDto {
    fn from(day: DailyForecast) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            temperature: TemperatureRangeDto { min: day.temp_min, max: day.temp_max },
            description: day.description,
        }
    }
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        let units = report.units.display_unit();
        let playlist_url = report.suggestion.playlist_url();

        Self {
            current_weather: CurrentWeatherDto {
                temperature: report.current.temperature,
                description: report.current.condition_description,
                city: report.current.location_name,
                units,
                clothing: report.suggestion.clothing,
                playlist_id: report.suggestion.playlist_id,
                playlist_url,
            },
            forecast: report.forecast.into_iter().map(Into::into).collect(),
            units,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

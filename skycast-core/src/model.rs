use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{UnitSystem, WeatherError, suggestion::Mood};

/// A validated request for a location's weather.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationQuery {
    name: String,
    units: UnitSystem,
}

impl LocationQuery {
    pub fn new(name: impl Into<String>, units: UnitSystem) -> Result<Self, WeatherError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(WeatherError::InvalidInput("City is required".to_string()));
        }
        Ok(Self { name, units })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temperature: f64,
    /// Lowercased upstream category, e.g. `clear`, `rain`, `clouds`.
    pub condition_code: String,
    pub condition_description: String,
    pub coordinates: Coordinates,
}

/// One raw forecast sample, timestamped in the location's local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub local_time: NaiveDateTime,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub clothing: Vec<String>,
    pub mood: Mood,
    pub playlist_id: String,
}

impl Suggestion {
    pub fn playlist_url(&self) -> String {
        format!("https://open.spotify.com/playlist/{}", self.playlist_id)
    }
}

/// Everything returned for one location query. All temperatures are in `units`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    pub suggestion: Suggestion,
    pub units: UnitSystem,
}

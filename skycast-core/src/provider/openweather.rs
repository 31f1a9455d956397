use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    Config, Coordinates, CurrentConditions, ForecastEntry, UnitSystem, WeatherError,
    error::UpstreamStage,
};

use super::UpstreamWeatherClient;

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(
        api_key: String,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.require_api_key()?;
        Self::new(
            api_key.to_owned(),
            config.base_url.as_str(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        stage: UpstreamStage,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    format!("failed to send request: {e}")
                };
                warn!(%stage, %reason, "OpenWeather request failed");
                WeatherError::unavailable(stage, reason)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            warn!(%stage, error = %e, "failed to read OpenWeather response body");
            WeatherError::unavailable(stage, format!("failed to read response body: {e}"))
        })?;

        // Only the lookup by name can miss; the forecast is addressed by the
        // coordinates that lookup returned.
        if status == StatusCode::NOT_FOUND && stage == UpstreamStage::Current {
            debug!(%stage, body = %truncate_body(&body), "OpenWeather reported no match");
            return Err(WeatherError::UpstreamNotFound(truncate_body(&body)));
        }

        if !status.is_success() {
            warn!(
                %stage,
                %status,
                body = %truncate_body(&body),
                "OpenWeather returned an error status"
            );
            return Err(WeatherError::unavailable(
                stage,
                format!("status {}: {}", status, truncate_body(&body)),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(%stage, error = %e, "malformed OpenWeather payload");
            WeatherError::unavailable(stage, format!("malformed payload: {e}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwCurrentMain,
    weather: Vec<OwCurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwForecastWeather>,
}

#[derive(Debug, Default, Deserialize)]
struct OwCity {
    /// Shift from UTC in seconds.
    timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
    #[serde(default)]
    city: OwCity,
}

#[async_trait]
impl UpstreamWeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(stage = "current"))]
    async fn fetch_current(
        &self,
        name: &str,
        units: UnitSystem,
    ) -> Result<CurrentConditions, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::InvalidInput("City is required".to_string()));
        }

        let parsed: OwCurrentResponse = self
            .get_json(
                UpstreamStage::Current,
                "weather",
                &[("q", name.to_string()), ("units", units.as_str().to_string())],
            )
            .await?;

        let weather = parsed.weather.into_iter().next().ok_or_else(|| {
            WeatherError::unavailable(
                UpstreamStage::Current,
                "payload contained no weather conditions",
            )
        })?;

        debug!(location = %parsed.name, temp = parsed.main.temp, "current conditions received");

        Ok(CurrentConditions {
            location_name: parsed.name,
            temperature: parsed.main.temp,
            condition_code: weather.main.to_lowercase(),
            condition_description: weather.description,
            coordinates: Coordinates { lat: parsed.coord.lat, lon: parsed.coord.lon },
        })
    }

    #[instrument(skip(self), fields(stage = "forecast"))]
    async fn fetch_forecast_series(
        &self,
        coordinates: Coordinates,
        units: UnitSystem,
    ) -> Result<Vec<ForecastEntry>, WeatherError> {
        let parsed: OwForecastResponse = self
            .get_json(
                UpstreamStage::Forecast,
                "forecast",
                &[
                    ("lat", coordinates.lat.to_string()),
                    ("lon", coordinates.lon.to_string()),
                    ("units", units.as_str().to_string()),
                ],
            )
            .await?;

        let offset =
            parsed.city.timezone.and_then(FixedOffset::east_opt).unwrap_or_else(|| Utc.fix());

        let series = parsed
            .list
            .into_iter()
            .map(|entry| {
                let local_time = unix_to_local(entry.dt, offset).ok_or_else(|| {
                    WeatherError::unavailable(
                        UpstreamStage::Forecast,
                        format!("invalid timestamp {}", entry.dt),
                    )
                })?;
                let description =
                    entry.weather.into_iter().next().map(|w| w.description).ok_or_else(|| {
                        WeatherError::unavailable(
                            UpstreamStage::Forecast,
                            "forecast entry contained no weather",
                        )
                    })?;

                Ok(ForecastEntry {
                    local_time,
                    temp_min: entry.main.temp_min,
                    temp_max: entry.main.temp_max,
                    description,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        debug!(samples = series.len(), "forecast series received");
        Ok(series)
    }
}

fn unix_to_local(ts: i64, offset: FixedOffset) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(&offset).naive_local())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

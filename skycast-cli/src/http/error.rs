//! HTTP error handling and response types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use skycast_core::WeatherError;

/// API error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl AppError {
    /// Map a weather lookup failure, logging it with the request context.
    pub fn from_weather(err: WeatherError, city: &str, units: &str) -> Self {
        match &err {
            WeatherError::InvalidInput(reason) => {
                tracing::info!(%city, %units, %reason, "rejected weather request");
                AppError::BadRequest("City is required".to_string())
            }
            WeatherError::UpstreamNotFound(_) => {
                tracing::info!(%city, %units, error = %err, "location not found");
                AppError::BadRequest("Invalid city or data not found".to_string())
            }
            WeatherError::UpstreamUnavailable { stage, .. } => {
                tracing::error!(%city, %units, %stage, error = %err, "weather lookup failed");
                AppError::Internal("Unable to fetch weather data".to_string())
            }
            WeatherError::StoreFailure(_) => {
                tracing::error!(
                    %city,
                    %units,
                    error = %err,
                    "unexpected store failure on weather path"
                );
                AppError::Internal("Unable to fetch weather data".to_string())
            }
        }
    }

    /// Map a favorites failure; `fallback` is the message for server-side errors.
    pub fn from_favorites(err: WeatherError, fallback: &str) -> Self {
        if err.is_client_error() {
            tracing::info!(error = %err, "rejected favorites request");
            AppError::BadRequest("City is required".to_string())
        } else {
            tracing::error!(error = %err, "favorites store failed");
            AppError::Internal(fallback.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiError { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::UpstreamStage;

    #[test]
    fn weather_errors_map_to_client_or_server() {
        let not_found = AppError::from_weather(
            WeatherError::UpstreamNotFound("x".into()),
            "Atlantis",
            "metric",
        );
        assert_eq!(not_found.into_response().status(), StatusCode::BAD_REQUEST);

        let down = AppError::from_weather(
            WeatherError::UpstreamUnavailable {
                stage: UpstreamStage::Forecast,
                reason: "timeout".into(),
            },
            "Mumbai",
            "metric",
        );
        assert_eq!(down.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_failure_is_internal() {
        let err = AppError::from_favorites(
            WeatherError::StoreFailure("disk full".into()),
            "Error saving favorite",
        );
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

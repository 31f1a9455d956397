//! HTTP handlers for the REST API.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use super::dto::{FavoriteRequest, HealthResponse, MessageResponse, WeatherParams, WeatherResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
pub async fn index() -> &'static str {
    "Weather backend is running!"
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

/// GET /weather?city=<name>&units=<metric|imperial>
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> HandlerResult<WeatherResponse> {
    let city = params.city.clone().unwrap_or_else(|| state.default_city.to_string());
    let units = params.units.clone().unwrap_or_default();

    let query = params
        .resolve(&state.default_city)
        .map_err(|e| AppError::from_weather(e, &city, &units))?;

    let report = state
        .aggregator
        .get_weather_report(&query)
        .await
        .map_err(|e| AppError::from_weather(e, query.name(), query.units().as_str()))?;

    Ok(Json(report.into()))
}

/// POST /favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let city = match payload {
        Ok(Json(FavoriteRequest { city: Some(city) })) if !city.trim().is_empty() => city,
        Ok(_) => return Err(AppError::BadRequest("City is required".to_string())),
        Err(rejection) => {
            tracing::info!(error = %rejection, "malformed favorites payload");
            return Err(AppError::BadRequest("City is required".to_string()));
        }
    };

    state
        .favorites
        .add(&city)
        .await
        .map_err(|e| AppError::from_favorites(e, "Error saving favorite"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse { message: "City added to favorites".to_string() }),
    ))
}

/// GET /favorites
pub async fn list_favorites(State(state): State<AppState>) -> HandlerResult<Vec<String>> {
    let cities = state
        .favorites
        .list()
        .await
        .map_err(|e| AppError::from_favorites(e, "Error fetching favorites"))?;

    Ok(Json(cities))
}

//! HTTP surface for `skycast serve`.
//!
//! Handlers parse and default the request, call the core, and map
//! `WeatherError` to the smallest response that still tells client errors
//! apart from server errors.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use std::fmt;

/// Which upstream call a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamStage {
    Current,
    Forecast,
}

impl UpstreamStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamStage::Current => "current",
            UpstreamStage::Forecast => "forecast",
        }
    }
}

impl fmt::Display for UpstreamStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the weather core.
///
/// `InvalidInput` and `UpstreamNotFound` are caused by the caller and are
/// never worth retrying. `UpstreamUnavailable` and `StoreFailure` are server
/// side; retrying is up to the caller, nothing here retries on its own.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Location not found: {0}")]
    UpstreamNotFound(String),

    #[error("Upstream {stage} request failed: {reason}")]
    UpstreamUnavailable { stage: UpstreamStage, reason: String },

    #[error("Favorites store failure: {0}")]
    StoreFailure(String),
}

impl WeatherError {
    pub(crate) fn unavailable(stage: UpstreamStage, reason: impl Into<String>) -> Self {
        WeatherError::UpstreamUnavailable { stage, reason: reason.into() }
    }

    /// True when the failure was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, WeatherError::InvalidInput(_) | WeatherError::UpstreamNotFound(_))
    }
}

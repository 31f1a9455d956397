use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::WeatherError;

/// Temperature unit system, as understood by the upstream provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn display_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Celsius",
            UnitSystem::Imperial => "Fahrenheit",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    /// Lenient parse for request boundaries: absent, blank or unknown values
    /// fall back to metric.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| UnitSystem::try_from(v).ok()).unwrap_or_default()
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(WeatherError::InvalidInput(format!(
                "Unknown unit system '{value}'. Supported: metric, imperial."
            ))),
        }
    }
}

/// Convert a temperature between unit systems. No rounding is applied.
pub fn convert(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::Imperial) => value * 9.0 / 5.0 + 32.0,
        (UnitSystem::Imperial, UnitSystem::Metric) => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    }
}

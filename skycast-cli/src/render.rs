//! Human-friendly rendering of a weather report for the terminal.

use std::fmt;

use skycast_core::WeatherReport;

/// Terminal view of a [`WeatherReport`].
pub struct Report<'a>(pub &'a WeatherReport);

struct Temp<'a>(f64, &'a str);

impl fmt::Display for Temp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{}", self.0, self.1)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let symbol = report.units.symbol();
        let current = &report.current;

        writeln!(f, "{}", current.location_name)?;
        writeln!(
            f,
            "  Now: {}, {}",
            Temp(current.temperature, symbol),
            current.condition_description
        )?;

        if !report.forecast.is_empty() {
            writeln!(f, "\nForecast:")?;
            for day in &report.forecast {
                writeln!(
                    f,
                    "  {}  {} / {}  {}",
                    day.date.format("%a %Y-%m-%d"),
                    Temp(day.temp_min, symbol),
                    Temp(day.temp_max, symbol),
                    day.description,
                )?;
            }
        }

        let suggestion = &report.suggestion;
        writeln!(f, "\nWhat to wear: {}", suggestion.clothing.join(", "))?;
        writeln!(f, "Playlist ({}): {}", suggestion.mood.title(), suggestion.playlist_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skycast_core::{Coordinates, CurrentConditions, DailyForecast, UnitSystem, suggestion};

    #[test]
    fn renders_rounded_temperatures_and_suggestions() {
        let report = WeatherReport {
            current: CurrentConditions {
                location_name: "Oslo".into(),
                temperature: 48.26,
                condition_code: "rain".into(),
                condition_description: "light rain".into(),
                coordinates: Coordinates { lat: 59.9, lon: 10.7 },
            },
            forecast: vec![DailyForecast {
                date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                temp_min: 44.0,
                temp_max: 51.96,
                description: "overcast clouds".into(),
            }],
            suggestion: suggestion::suggest(48.26, UnitSystem::Imperial, "rain"),
            units: UnitSystem::Imperial,
        };

        let text = Report(&report).to_string();

        assert!(text.contains("Now: 48.3°F, light rain"));
        assert!(text.contains("Mon 2024-06-03  44.0°F / 52.0°F  overcast clouds"));
        assert!(text.contains("Coats, Thermal wear, Gloves, Boots, Raincoat"));
        assert!(text.contains("Rainy Day Chill"));
    }
}

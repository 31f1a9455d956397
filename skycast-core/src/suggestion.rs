//! Clothing and playlist rules derived from temperature and condition.
//!
//! Temperature bands are defined in Celsius with inclusive lower bounds.
//! Imperial temperatures are converted before lookup, so the thresholds do not
//! depend on the caller's unit system.

use serde::{Deserialize, Serialize};

use crate::{Suggestion, UnitSystem, units};

/// Bumped whenever a band, list or playlist below changes.
pub const RULES_VERSION: u32 = 2;

const HOT: &[&str] = &["T-shirts", "Shorts", "Sunglasses", "Hats"];
const WARM: &[&str] = &["Light jackets", "Jeans", "Cotton shirts"];
const MILD: &[&str] = &["Sweaters", "Jackets", "Scarves"];
const COLD: &[&str] = &["Coats", "Thermal wear", "Gloves", "Boots"];
const RAIN_GEAR: &[&str] = &["Raincoat", "Umbrella", "Waterproof shoes"];

/// Playlist mood picked from the condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sunny,
    Rainy,
    Cloudy,
    Calm,
}

impl Mood {
    pub fn playlist_id(&self) -> &'static str {
        match self {
            Mood::Sunny => "37i9dQZF1DX2sUQwD7tbmL",
            Mood::Rainy => "37i9dQZF1DXbvABJXBIyiY",
            Mood::Cloudy => "37i9dQZF1DX3Ogo9pFvBkY",
            Mood::Calm => "37i9dQZF1DWV7EzJMK2FUI",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mood::Sunny => "Sunny Day Vibes",
            Mood::Rainy => "Rainy Day Chill",
            Mood::Cloudy => "Cloudy Day Lo-Fi",
            Mood::Calm => "Night Time Calm",
        }
    }
}

/// Clothing for a temperature (in `units`) and condition code.
///
/// Band items come first; rain gear is appended when the condition mentions rain.
pub fn clothing_for(temperature: f64, units: UnitSystem, condition_code: &str) -> Vec<String> {
    let celsius = units::convert(temperature, units, UnitSystem::Metric);

    let band = if celsius >= 30.0 {
        HOT
    } else if celsius >= 20.0 {
        WARM
    } else if celsius >= 10.0 {
        MILD
    } else {
        COLD
    };

    let mut clothing: Vec<String> = band.iter().map(|s| s.to_string()).collect();
    if condition_code.to_lowercase().contains("rain") {
        clothing.extend(RAIN_GEAR.iter().map(|s| s.to_string()));
    }
    clothing
}

/// First match wins: clear/sunny, then rain, then cloud, then calm.
pub fn mood_for(condition_code: &str) -> Mood {
    let code = condition_code.to_lowercase();
    if code.contains("clear") || code.contains("sunny") {
        Mood::Sunny
    } else if code.contains("rain") {
        Mood::Rainy
    } else if code.contains("cloud") {
        Mood::Cloudy
    } else {
        Mood::Calm
    }
}

pub fn playlist_for(condition_code: &str) -> &'static str {
    mood_for(condition_code).playlist_id()
}

pub fn suggest(temperature: f64, units: UnitSystem, condition_code: &str) -> Suggestion {
    let mood = mood_for(condition_code);
    Suggestion {
        clothing: clothing_for(temperature, units, condition_code),
        mood,
        playlist_id: mood.playlist_id().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn band_boundaries_are_inclusive_lower_bounds() {
        let m = UnitSystem::Metric;
        assert_eq!(clothing_for(30.0, m, "clear"), owned(HOT));
        assert_eq!(clothing_for(29.99, m, "clear"), owned(WARM));
        assert_eq!(clothing_for(20.0, m, "clear"), owned(WARM));
        assert_eq!(clothing_for(19.99, m, "clear"), owned(MILD));
        assert_eq!(clothing_for(10.0, m, "clear"), owned(MILD));
        assert_eq!(clothing_for(9.99, m, "clear"), owned(COLD));
    }

    #[test]
    fn extremes_ignore_condition() {
        for cond in ["clear", "clouds", "snow", "mist", "thunderstorm"] {
            assert_eq!(clothing_for(45.0, UnitSystem::Metric, cond), owned(HOT));
            assert_eq!(clothing_for(-12.0, UnitSystem::Metric, cond), owned(COLD));
        }
    }

    #[test]
    fn rain_appends_gear_to_every_band() {
        for (temp, band) in [(35.0, HOT), (25.0, WARM), (15.0, MILD), (0.0, COLD)] {
            let expected: Vec<String> =
                band.iter().chain(RAIN_GEAR).map(|s| s.to_string()).collect();
            assert_eq!(clothing_for(temp, UnitSystem::Metric, "light rain"), expected);
            assert_eq!(clothing_for(temp, UnitSystem::Metric, "rain"), expected);
        }
    }

    #[test]
    fn imperial_is_converted_before_band_lookup() {
        assert_eq!(clothing_for(95.0, UnitSystem::Imperial, "clear"), owned(HOT));
        assert_eq!(clothing_for(86.0, UnitSystem::Imperial, "clear"), owned(HOT));
        assert_eq!(clothing_for(68.0, UnitSystem::Imperial, "clear"), owned(WARM));
        assert_eq!(clothing_for(50.0, UnitSystem::Imperial, "clear"), owned(MILD));
        assert_eq!(clothing_for(32.0, UnitSystem::Imperial, "clear"), owned(COLD));
    }

    #[test]
    fn playlist_precedence() {
        assert_eq!(mood_for("clear"), Mood::Sunny);
        assert_eq!(mood_for("sunny spells"), Mood::Sunny);
        assert_eq!(mood_for("light rain"), Mood::Rainy);
        assert_eq!(mood_for("clouds"), Mood::Cloudy);
        assert_eq!(mood_for("rain clouds"), Mood::Rainy);
        assert_eq!(mood_for("clear after rain"), Mood::Sunny);
        assert_eq!(mood_for("mist"), Mood::Calm);
        assert_eq!(mood_for(""), Mood::Calm);
    }

    #[test]
    fn playlist_is_deterministic() {
        for code in ["clear", "rain", "clouds", "haze", "drizzle"] {
            assert_eq!(playlist_for(code), playlist_for(code));
        }
        assert_eq!(playlist_for("clear"), Mood::Sunny.playlist_id());
    }

    #[test]
    fn suggest_combines_both_rules() {
        let s = suggest(12.0, UnitSystem::Metric, "rain");
        assert_eq!(s.mood, Mood::Rainy);
        assert_eq!(s.playlist_id, Mood::Rainy.playlist_id());
        assert_eq!(s.clothing.first().map(String::as_str), Some("Sweaters"));
        assert_eq!(s.clothing.last().map(String::as_str), Some("Waterproof shoes"));
        assert!(s.playlist_url().ends_with(Mood::Rainy.playlist_id()));
    }
}

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::{DailyForecast, ForecastEntry};

pub const MAX_FORECAST_DAYS: usize = 4;

const NOON_SECS: i64 = 12 * 60 * 60;

/// Collapse a forecast series to one entry per local calendar date.
///
/// For each date the sample closest to local noon is kept (earlier sample on a
/// tie). Min/max come from that sample as-is. At most `MAX_FORECAST_DAYS`
/// dates are returned, earliest first.
pub fn reduce(series: &[ForecastEntry]) -> Vec<DailyForecast> {
    let mut picked: BTreeMap<NaiveDate, &ForecastEntry> = BTreeMap::new();

    for entry in series {
        let date = entry.local_time.date();
        let closer = picked.get(&date).is_none_or(|kept| {
            noon_distance(entry.local_time.time()) < noon_distance(kept.local_time.time())
        });
        if closer {
            picked.insert(date, entry);
        }
    }

    picked
        .into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(|(date, entry)| DailyForecast {
            date,
            temp_min: entry.temp_min,
            temp_max: entry.temp_max,
            description: entry.description.clone(),
        })
        .collect()
}

fn noon_distance(time: NaiveTime) -> i64 {
    (i64::from(time.num_seconds_from_midnight()) - NOON_SECS).abs()
}

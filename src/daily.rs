use crate::icons;
use crate::models::report::DailySummary;
use crate::models::weather_api::DayForecast;
use crate::temperature::parse_temperature;

/// Ordinal labels for the three dashboard days
const DATE_LABELS: [&str; 3] = ["今日", "明日", "明後日"];

/// Reduces up to three daily forecast entries to one summary row each.
///
/// Labels are positional: the first entry is always 今日 regardless of its
/// calendar date. Temperatures parse independently per day and come out as
/// zero when unparseable, there is no cross day fallback here.
///
/// # Arguments
///
/// * 'forecasts' - the daily forecast entries, today first
pub fn build_daily_summaries(forecasts: &[DayForecast]) -> Vec<DailySummary> {
    forecasts
        .iter()
        .take(DATE_LABELS.len())
        .zip(DATE_LABELS)
        .map(|(forecast, label)| DailySummary {
            date: label.to_string(),
            icon: icons::classify(&forecast.telop).glyph(),
            description: forecast.telop.clone(),
            max_temp: parse_temperature(forecast.max_celsius()).unwrap_or(0),
            min_temp: parse_temperature(forecast.min_celsius()).unwrap_or(0),
            rain_chance: peak_rain_chance(&forecast.rain_buckets()),
        })
        .collect()
}

/// Picks the bucket with the largest rain probability, keeping its original
/// textual form. Empty buckets and the "-" sentinel are skipped and ties keep
/// the earliest bucket. When nothing is usable the result is "0%".
///
/// # Arguments
///
/// * 'buckets' - the four bucket values in day order
fn peak_rain_chance(buckets: &[&str; 4]) -> String {
    let mut peak = "0%";
    let mut peak_percent = 0;

    for bucket in buckets {
        if bucket.is_empty() || *bucket == "-" {
            continue;
        }
        let digits = bucket.strip_suffix('%').unwrap_or(bucket);
        if let Ok(percent) = digits.parse::<i32>() {
            if percent > peak_percent {
                peak_percent = percent;
                peak = bucket;
            }
        }
    }

    peak.to_string()
}

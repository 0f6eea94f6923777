use chrono::{DateTime, Local, Timelike};
use log::{info, warn};
use crate::daily::build_daily_summaries;
use crate::fallback;
use crate::hourly::{synthesize_hourly, ResolvedTemps};
use crate::icons;
use crate::manager_news::NewsFeed;
use crate::manager_weather::Weather;
use crate::models::report::WeatherReport;
use crate::models::weather_api::WeatherResponse;
use crate::news::dedup_headlines;
use crate::{MAX_HOURLY_FORECAST_ITEMS, MAX_NEWS_ITEMS};

/// Display format for the generation timestamp
const UPDATE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Fetches all sources and assembles the dashboard report.
///
/// A weather failure switches the whole report over to the sample dataset,
/// sample news included. A failing news feed only replaces that feed's list,
/// the weather data and the other feed are kept. The two feeds are fetched
/// independently of each other.
///
/// # Arguments
///
/// * 'weather' - the weather fetch manager
/// * 'main_feed' - the main news feed manager
/// * 'economy_feed' - the economy news feed manager
/// * 'now' - the generation time
pub fn build_report(
    weather: &Weather,
    main_feed: &NewsFeed,
    economy_feed: &NewsFeed,
    now: DateTime<Local>,
) -> WeatherReport {
    let response = match weather.fetch_forecast() {
        Ok(response) => response,
        Err(e) => {
            warn!("weather fetch failed, using sample data: {}", e);
            return fallback::sample_report(now);
        }
    };

    let mut report = process_weather(&response, now);

    report.news = match main_feed.fetch_headlines() {
        Ok(headlines) => headlines,
        Err(e) => {
            warn!("news fetch failed, using sample headlines: {}", e);
            fallback::SAMPLE_NEWS.clone()
        }
    };

    report.economy_news = match economy_feed.fetch_headlines() {
        Ok(headlines) => dedup_headlines(headlines, &report.news, MAX_NEWS_ITEMS),
        Err(e) => {
            warn!("economy news fetch failed, using sample headlines: {}", e);
            fallback::SAMPLE_NEWS.clone()
        }
    };

    info!(
        "report assembled for {}: {} hourly samples, {} daily summaries, {}+{} headlines",
        report.location,
        report.hourly_forecast.len(),
        report.daily_forecasts.len(),
        report.news.len(),
        report.economy_news.len()
    );

    report
}

/// Derives the dashboard report from a fetched forecast payload.
///
/// The caller guarantees at least one forecast day. The current rain
/// probability row shows today's three remaining buckets, the 00-06 window
/// is never displayed for the current day.
///
/// # Arguments
///
/// * 'response' - the decoded forecast payload
/// * 'now' - the generation time, bounds the hourly series
fn process_weather(response: &WeatherResponse, now: DateTime<Local>) -> WeatherReport {
    let today = &response.forecasts[0];
    let tomorrow = response.forecasts.get(1);

    let temps = ResolvedTemps::resolve(today, tomorrow);

    let hourly = synthesize_hourly(
        &response.forecasts,
        &temps,
        now.hour(),
        MAX_HOURLY_FORECAST_ITEMS,
    );

    let rain = today.rain_buckets();

    WeatherReport {
        location: response.location.city.clone(),
        temperature: temps.reference,
        min_temp: temps.min,
        max_temp: temps.reference,
        feels_like: temps.reference,
        description: today.telop.clone(),
        weather_icon: icons::classify(&today.telop).glyph(),
        wind: today.wind().to_string(),
        chance_of_rain: [rain[1].to_string(), rain[2].to_string(), rain[3].to_string()],
        update_time: now.format(UPDATE_TIME_FORMAT).to_string(),
        hourly_forecast: hourly,
        daily_forecasts: build_daily_summaries(&response.forecasts),
        news: Vec::new(),
        economy_news: Vec::new(),
        is_using_fallback_data: false,
        has_min_temp: temps.has_min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::weather_api::{
        CelsiusValue, ChanceOfRain, DayForecast, Detail, Location, Temperature,
    };

    fn celsius(value: Option<&str>) -> Option<CelsiusValue> {
        Some(CelsiusValue { celsius: value.map(str::to_string) })
    }

    fn day(telop: &str, min: Option<&str>, max: Option<&str>, rain: [&str; 4]) -> DayForecast {
        DayForecast {
            date: "2025-09-30".to_string(),
            telop: telop.to_string(),
            detail: Detail { wind: Some("北の風".to_string()) },
            temperature: Temperature { min: celsius(min), max: celsius(max) },
            chance_of_rain: ChanceOfRain {
                t00_06: rain[0].to_string(),
                t06_12: rain[1].to_string(),
                t12_18: rain[2].to_string(),
                t18_24: rain[3].to_string(),
            },
        }
    }

    fn response(forecasts: Vec<DayForecast>) -> WeatherResponse {
        WeatherResponse {
            forecasts,
            location: Location { city: "東京".to_string() },
        }
    }

    fn at_hour(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 9, 30, hour, 0, 0).unwrap()
    }

    #[test]
    fn assembles_report_from_live_data() {
        let response = response(vec![
            day("晴れのち曇り", Some("18"), Some("28"), ["0%", "10%", "20%", "30%"]),
            day("曇り", Some("19"), Some("25"), ["40%", "50%", "60%", "70%"]),
        ]);

        let report = process_weather(&response, at_hour(20));

        assert_eq!(report.location, "東京");
        assert_eq!(report.temperature, 28);
        assert_eq!(report.max_temp, 28);
        assert_eq!(report.min_temp, 18);
        assert_eq!(report.feels_like, 28);
        assert!(report.has_min_temp);
        assert!(!report.is_using_fallback_data);
        assert_eq!(report.weather_icon, "🌤️");
        assert_eq!(report.wind, "北の風");
        assert_eq!(report.chance_of_rain, ["10%", "20%", "30%"]);
        assert_eq!(report.update_time, "2025/09/30 20:00");
        assert_eq!(report.daily_forecasts.len(), 2);

        // Tomorrow's night and morning samples carry tomorrow's min and max
        let at = |label: &str| {
            report.hourly_forecast.iter().find(|s| s.time == label).unwrap()
        };
        assert_eq!(at("03:00").temp, 19);
        assert_eq!(at("09:00").temp, 25);
    }

    #[test]
    fn late_cycle_data_degrades_to_tomorrows_maximum() {
        let response = response(vec![
            day("晴れ", None, None, ["-", "-", "-", "-"]),
            day("曇り", None, Some("30"), ["-", "-", "-", "-"]),
        ]);

        let report = process_weather(&response, at_hour(22));

        assert_eq!(report.temperature, 30);
        assert_eq!(report.min_temp, 0);
        assert!(!report.has_min_temp);
    }

    #[test]
    fn single_day_payload_yields_no_hourly_series() {
        let response = response(vec![
            day("晴れ", Some("18"), Some("28"), ["0%", "0%", "0%", "0%"]),
        ]);

        let report = process_weather(&response, at_hour(6));

        assert!(report.hourly_forecast.is_empty());
        assert_eq!(report.daily_forecasts.len(), 1);
        assert_eq!(report.temperature, 28);
    }
}

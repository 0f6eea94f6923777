/// One synthesized hourly forecast sample
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    /// Display label, "HH:00"
    pub time: String,
    pub temp: i32,
    pub description: String,
    pub icon: &'static str,
    pub rain_chance: String,
    /// Vertical plot position on the temperature chart, smaller is warmer
    pub chart_coord: i32,
}

/// One summarized day on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    /// Ordinal label, 今日/明日/明後日
    pub date: String,
    pub icon: &'static str,
    pub description: String,
    pub max_temp: i32,
    pub min_temp: i32,
    /// Peak rain probability among the day's buckets, textual form
    pub rain_chance: String,
}

/// One news headline
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Formatted publish time, or the feed's raw text when unparseable
    pub pub_date: String,
}

/// The fully assembled dashboard content, consumed read-only by the renderer
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: i32,
    pub min_temp: i32,
    pub max_temp: i32,
    /// Feels-like has no model of its own, it mirrors the reference maximum
    pub feels_like: i32,
    pub description: String,
    pub weather_icon: &'static str,
    pub wind: String,
    /// Today's remaining rain probability buckets: 06-12, 12-18, 18-24
    pub chance_of_rain: [String; 3],
    pub update_time: String,
    pub hourly_forecast: Vec<HourlySample>,
    pub daily_forecasts: Vec<DailySummary>,
    pub news: Vec<NewsItem>,
    pub economy_news: Vec<NewsItem>,
    pub is_using_fallback_data: bool,
    /// True only when today's own minimum temperature parsed
    pub has_min_temp: bool,
}

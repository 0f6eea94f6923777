use std::sync::LazyLock;
use chrono::{DateTime, Local};
use crate::hourly::assign_chart_coords;
use crate::icons;
use crate::models::report::{HourlySample, NewsItem, WeatherReport};

/// Sample headlines shown when a news feed is unreachable
pub static SAMPLE_NEWS: LazyLock<Vec<NewsItem>> = LazyLock::new(|| {
    vec![
        NewsItem {
            title: "新浪氏の処遇 経済同友会が協議 審査会は\"辞任勧告が相当\"".to_string(),
            link: "http://www3.nhk.or.jp/news/html/20250930/k10014936121000.html".to_string(),
            description: "経済同友会は、サプリメントをめぐる警察の捜査を受けて活動を自粛している、新浪剛史代表幹事の処遇について30日、理事会を開いて協議しています。".to_string(),
            pub_date: "09/30 12:19".to_string(),
        },
        NewsItem {
            title: "10月 値上げの食品 半年ぶり3000品目超 7割が「酒類・飲料」".to_string(),
            link: "http://www3.nhk.or.jp/news/html/20250930/k10014935951000.html".to_string(),
            description: "10月に値上げされる食品は3000品目を超え、ことし4月以来、半年ぶりの高い水準になることが民間の調査でわかりました。".to_string(),
            pub_date: "09/30 11:26".to_string(),
        },
        NewsItem {
            title: "首都高発注の道路清掃入札で談合か 4社に立ち入り検査 公取委".to_string(),
            link: "http://www3.nhk.or.jp/news/html/20250930/k10014936281000.html".to_string(),
            description: "首都高速道路が発注した道路清掃の入札をめぐり、東京や神奈川にある4社が、事前に落札する会社を調整する談合を繰り返した疑いがあるとして、公正取引委員会が、30日午前、立ち入り検査に入りました。".to_string(),
            pub_date: "09/30 11:46".to_string(),
        },
    ]
});

/// The static weather snapshot behind the sample report: display label,
/// temperature and telop per hourly slot
const SAMPLE_HOURS: [(&str, i32, &str); 4] = [
    ("12:00", 23, "晴れ"),
    ("15:00", 25, "晴れ"),
    ("18:00", 21, "曇り"),
    ("21:00", 19, "曇り"),
];

/// Builds the sample report used when the weather service is unreachable,
/// stamped with the current generation time.
///
/// # Arguments
///
/// * 'now' - the generation time
pub fn sample_report(now: DateTime<Local>) -> WeatherReport {
    let mut hourly: Vec<HourlySample> = SAMPLE_HOURS
        .iter()
        .map(|(time, temp, telop)| HourlySample {
            time: time.to_string(),
            temp: *temp,
            description: telop.to_string(),
            icon: icons::classify(telop).glyph(),
            rain_chance: "-".to_string(),
            chart_coord: 0,
        })
        .collect();
    assign_chart_coords(&mut hourly);

    WeatherReport {
        location: "東京".to_string(),
        temperature: 22,
        min_temp: 0,
        max_temp: 0,
        feels_like: 25,
        description: "晴れ".to_string(),
        weather_icon: icons::classify("晴れ").glyph(),
        wind: String::new(),
        chance_of_rain: ["-".to_string(), "-".to_string(), "-".to_string()],
        update_time: now.format("%Y/%m/%d %H:%M").to_string(),
        hourly_forecast: hourly,
        daily_forecasts: Vec::new(),
        news: SAMPLE_NEWS.clone(),
        economy_news: Vec::new(),
        is_using_fallback_data: true,
        has_min_temp: false,
    }
}

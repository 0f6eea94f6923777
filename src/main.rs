use std::process;
use chrono::Local;
use log::{error, info};
use crate::initialization::init;

mod config;
mod daily;
mod errors;
mod fallback;
mod hourly;
mod icons;
mod initialization;
mod manager_news;
mod manager_weather;
mod models;
mod news;
mod render;
mod report;
mod temperature;

/// Max number of hourly forecast samples on the dashboard
pub const MAX_HOURLY_FORECAST_ITEMS: usize = 20;
/// Max number of main news headlines on the dashboard
pub const MAX_NEWS_ITEMS: usize = 5;
/// Max number of economy headlines fetched, before dedup against main news
pub const MAX_ECONOMY_NEWS_ITEMS: usize = 10;

fn main() {
    let (config, weather, main_news, economy_news) = match init() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!("fetching weather and news data");
    let report = report::build_report(&weather, &main_news, &economy_news, Local::now());

    match render::write_dashboard(&report, &config.files) {
        Ok(path) => info!("dashboard written to {}", path),
        Err(e) => {
            error!("failed to write dashboard: {}", e);
            process::exit(1);
        }
    }
}

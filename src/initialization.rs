use std::env;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, Config, General};
use crate::errors::InitError;
use crate::manager_news::NewsFeed;
use crate::manager_weather::Weather;
use crate::{MAX_ECONOMY_NEWS_ITEMS, MAX_NEWS_ITEMS};

/// Initializes configuration, logging and the fetch managers
///
pub fn init() -> Result<(Config, Weather, NewsFeed, NewsFeed), InitError> {
    let config_path = env::var("CONFIG_FILE").unwrap_or("config.toml".to_string());
    let mut config = load_config(&config_path)?;

    // The city code can be overridden without touching the config file
    if let Ok(city_code) = env::var("CITY_CODE") {
        if !city_code.is_empty() {
            config.weather.city_code = city_code;
        }
    }

    setup_logger(&config.general)?;

    log::info!("weatherboard version: {}", env!("CARGO_PKG_VERSION"));
    log::info!("generating dashboard for city {}", config.weather.city_code);

    let weather = Weather::new(config.weather.city_code.clone());
    let main_news = NewsFeed::new(config.news.main_feed.clone(), MAX_NEWS_ITEMS);
    let economy_news = NewsFeed::new(config.news.economy_feed.clone(), MAX_ECONOMY_NEWS_ITEMS);

    Ok((config, weather, main_news, economy_news))
}

/// Sets up log4rs with a console or file appender according to config
///
/// # Arguments
///
/// * 'general' - the general configuration section
fn setup_logger(general: &General) -> Result<(), InitError> {
    let pattern = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";
    let mut builder = log4rs::config::Config::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(pattern)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    } else {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(pattern)))
            .build(&general.log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder.build(root.build(general.log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}

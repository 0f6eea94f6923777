use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct WeatherParameters {
    pub city_code: String,
}

#[derive(Deserialize)]
pub struct NewsParameters {
    pub main_feed: String,
    pub economy_feed: String,
}

#[derive(Deserialize)]
pub struct Files {
    pub output_dir: String,
    pub css_file: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub weather: WeatherParameters,
    pub news: NewsParameters,
    pub files: Files,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}

pub mod errors;

use std::time::Duration;
use log::debug;
use ureq::Agent;
use crate::manager_weather::errors::WeatherError;
use crate::models::weather_api::WeatherResponse;

const FORECAST_URL: &str = "https://weather.tsukumijima.net/api/forecast/city";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Struct for fetching daily weather forecasts for one city
pub struct Weather {
    agent: Agent,
    city_code: String,
}

impl Weather {
    /// Returns a Weather struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'city_code' - the city code to get forecasts for
    pub fn new(city_code: String) -> Weather {
        let config = Agent::config_builder()
            .timeout_global(Some(HTTP_TIMEOUT))
            .build();

        let agent = config.into();

        Weather { agent, city_code }
    }

    /// Retrieves the daily forecast series for the configured city.
    ///
    /// The service answers with one entry per day, today first. A payload
    /// without any forecast entries counts as a document error so that the
    /// caller has a single failure path to fall back on.
    pub fn fetch_forecast(&self) -> Result<WeatherResponse, WeatherError> {
        let url = format!("{}/{}", FORECAST_URL, self.city_code);

        let json = self.agent
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?;

        let response: WeatherResponse = serde_json::from_str(&json)?;

        if response.forecasts.is_empty() {
            return Err(WeatherError::Document(format!(
                "no forecasts for city {}",
                self.city_code
            )));
        }

        debug!(
            "fetched {} forecast days for {} starting {}",
            response.forecasts.len(),
            response.location.city,
            response.forecasts[0].date
        );

        Ok(response)
    }
}

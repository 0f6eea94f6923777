use serde::Deserialize;

/// Forecast payload from the weather service, one entry per day, today first
#[derive(Deserialize, Debug, Clone)]
pub struct WeatherResponse {
    pub forecasts: Vec<DayForecast>,
    pub location: Location,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Location {
    pub city: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DayForecast {
    pub date: String,
    pub telop: String,
    pub detail: Detail,
    pub temperature: Temperature,
    #[serde(rename = "chanceOfRain")]
    pub chance_of_rain: ChanceOfRain,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Detail {
    pub wind: Option<String>,
}

/// Min and max readings, each may be missing entirely or carry a null value
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Temperature {
    pub min: Option<CelsiusValue>,
    pub max: Option<CelsiusValue>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CelsiusValue {
    pub celsius: Option<String>,
}

/// Rain probability per 6 hour window, a percent string, empty, or "-"
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ChanceOfRain {
    #[serde(rename = "T00_06", default)]
    pub t00_06: String,
    #[serde(rename = "T06_12", default)]
    pub t06_12: String,
    #[serde(rename = "T12_18", default)]
    pub t12_18: String,
    #[serde(rename = "T18_24", default)]
    pub t18_24: String,
}

impl DayForecast {
    /// The four rain probability buckets in day order
    pub fn rain_buckets(&self) -> [&str; 4] {
        [
            &self.chance_of_rain.t00_06,
            &self.chance_of_rain.t06_12,
            &self.chance_of_rain.t12_18,
            &self.chance_of_rain.t18_24,
        ]
    }

    /// The textual max Celsius value, empty when the source reported none
    pub fn max_celsius(&self) -> &str {
        self.temperature
            .max
            .as_ref()
            .and_then(|v| v.celsius.as_deref())
            .unwrap_or("")
    }

    /// The textual min Celsius value, empty when the source reported none
    pub fn min_celsius(&self) -> &str {
        self.temperature
            .min
            .as_ref()
            .and_then(|v| v.celsius.as_deref())
            .unwrap_or("")
    }

    /// The wind text, empty when the source reported none
    pub fn wind(&self) -> &str {
        self.detail.wind.as_deref().unwrap_or("")
    }
}

use std::fmt;

pub enum WeatherError {
    Fetch(String),
    Document(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeatherError::Fetch(e) => write!(f, "WeatherError::Fetch: {}", e),
            WeatherError::Document(e) => write!(f, "WeatherError::Document: {}", e),
        }
    }
}
impl From<ureq::Error> for WeatherError {
    fn from(e: ureq::Error) -> Self {
        WeatherError::Fetch(e.to_string())
    }
}
impl From<serde_json::Error> for WeatherError {
    fn from(e: serde_json::Error) -> Self {
        WeatherError::Document(e.to_string())
    }
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("invalid temperature value: {0}")]
pub struct TemperatureError(pub String);

/// Parses a textual Celsius value from the forecast source into whole degrees.
///
/// The source reports temperatures as strings and uses the empty string or the
/// literal "null" when no reading is available. Fractional values are rejected
/// rather than truncated.
///
/// # Arguments
///
/// * 'text' - the textual Celsius value
pub fn parse_temperature(text: &str) -> Result<i32, TemperatureError> {
    if text.is_empty() || text == "null" {
        return Err(TemperatureError("empty temperature".to_string()));
    }

    text.parse::<i32>()
        .map_err(|_| TemperatureError(text.to_string()))
}

use std::fmt;
use std::fmt::Formatter;

pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

pub struct InitError(pub String);

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "InitError: {}", self.0)
    }
}
impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError(e.to_string())
    }
}
impl From<std::io::Error> for InitError {
    fn from(e: std::io::Error) -> Self {
        InitError(e.to_string())
    }
}
impl From<log::SetLoggerError> for InitError {
    fn from(e: log::SetLoggerError) -> Self {
        InitError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for InitError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        InitError(e.to_string())
    }
}

#[derive(Debug)]
pub struct RenderError(pub String);

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "RenderError: {}", self.0)
    }
}
impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError(e.to_string())
    }
}
impl From<fmt::Error> for RenderError {
    fn from(e: fmt::Error) -> Self {
        RenderError(e.to_string())
    }
}

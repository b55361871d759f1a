use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    Parse(PathBuf, #[source] serde_yaml::Error),

    #[error("Config file '{0}' does not match the expected schema")]
    Deserialize(PathBuf, #[source] serde_yaml::Error),

    #[error("Override '{0}' is not of the form key=value")]
    MalformedOverride(String),

    #[error("Override value for '{0}' is not valid YAML")]
    OverrideValue(String, #[source] serde_yaml::Error),

    #[error("Override key '{0}' does not address a mapping")]
    OverrideTarget(String),
}

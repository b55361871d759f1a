mod error;
mod loader;
mod model;

pub use error::ConfigError;
pub use loader::{load_config, DEFAULT_CONFIG_PATH};
pub use model::Config;

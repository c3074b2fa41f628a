mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, ViewConfig, MAX_DELAY_MS};

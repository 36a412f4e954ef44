use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub(crate) const DEFAULT_POOL_SIZE: u32 = 10;
pub(crate) const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub database_pool_size: u32,
    pub cors_origin: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::default())
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_pool_size", i64::from(DEFAULT_POOL_SIZE))?
            .set_default("cors_origin", DEFAULT_CORS_ORIGIN)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

//! Process settings, read from the environment once at startup

use crate::config::{DEVELOPMENT_PORT, PRODUCTION_PORT};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// `ENVIRONMENT`; `"production"` selects the production port
    pub environment: String,

    /// `BIND_HOST`; the address to bind to
    pub bind_host: String,
}

impl Settings {
    /// Read settings from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder())
    }

    /// Layer defaults and the process environment under whatever `builder`
    /// already carries
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("environment", "development")?
            .set_default("bind_host", "0.0.0.0")?
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn port(&self) -> u16 {
        match self.is_production() {
            true => PRODUCTION_PORT,
            false => DEVELOPMENT_PORT,
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.bind_host.clone(), self.port())
    }
}

//! Runtime settings.
//!
//! Read from an optional `invoice-draft.toml` in the working directory, then from
//! `INVOICE__*` environment variables (a `.env` file is loaded first), e.g.
//! `INVOICE__CHANNEL_BUFFER=64` or `INVOICE__CURRENCY_SYMBOL=$`.

use crate::model::DEFAULT_CURRENCY_SYMBOL;
use config::{Config as Cfg, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Mailbox size of every resource actor.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_channel_buffer() -> usize {
    32
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("invoice-draft").required(false))
            .add_source(
                Environment::with_prefix("INVOICE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        if loaded.channel_buffer == 0 {
            return Err(ConfigError::Message(
                "channel_buffer must be greater than zero".into(),
            ));
        }
        Ok(loaded)
    }
}

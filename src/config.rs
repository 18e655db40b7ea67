use std::time::Duration;

use serde::Deserialize;

use crate::generator::{GeneratorConfig, Shape, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub shape: Shape,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = envy::prefixed("OUTREACH_").from_env::<AppConfig>()?;
        if config.timeout_secs == Some(0) {
            anyhow::bail!("OUTREACH_TIMEOUT_SECS must be greater than zero");
        }
        Ok(config)
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            shape: self.shape,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("hidden-gems.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub viewport: Option<Viewport>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
    pub retries: u32,
    #[serde(deserialize_with = "deserialize_duration")]
    pub retry_delay: Duration,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Viewport {
    pub cell_size: f64,
    pub buffer_ratio: f64,
    #[serde(deserialize_with = "deserialize_duration")]
    pub debounce: Duration,
}

impl Default for Viewport {
    fn default() -> Self {
        Config::default().viewport.expect("Viewport configuration")
    }
}

use anyhow::{bail, Result};
use gems_application::viewport::ViewportConfig;
use gems_core::loader::ViewportLoaderConfig;
use gems_frontend_api::RetryPolicy;
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "hidden-gems.toml";

const ENV_NAME_API_URL: &str = "HIDDEN_GEMS_API_URL";

#[derive(Debug)]
pub struct Config {
    pub api: Api,
    pub viewport: ViewportConfig,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            cfg.api.base_url = api_url;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Api {
    pub base_url: String,
    pub retry: RetryPolicy,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, viewport } = from;

        let raw::Api {
            base_url,
            retries,
            retry_delay,
        } = api.unwrap_or_default();
        if base_url.trim().is_empty() {
            bail!("Missing API base URL");
        }
        let api = Api {
            base_url,
            retry: RetryPolicy {
                retries,
                delay: retry_delay,
            },
        };

        let raw::Viewport {
            cell_size,
            buffer_ratio,
            debounce,
        } = viewport.unwrap_or_default();
        if cell_size.is_nan() || cell_size <= 0.0 {
            bail!("Invalid cell size: {cell_size}");
        }
        if buffer_ratio.is_nan() || buffer_ratio < 0.0 {
            bail!("Invalid buffer ratio: {buffer_ratio}");
        }
        let viewport = ViewportConfig {
            loader: ViewportLoaderConfig {
                cell_size,
                buffer_ratio,
            },
            debounce,
        };

        Ok(Self { api, viewport })
    }
}

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the organization REST service
    pub endpoint: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
endpoint = "https://67b9760151192bd378dd7c04.mockapi.io"
"#;

const DEFAULT_ENDPOINT: &str = "https://67b9760151192bd378dd7c04.mockapi.io";

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
            },
        }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid embedded config, using defaults: {}", e);
        Config::default()
    }
});

/// Load configuration
///
/// Search order:
/// 1. `REGISTRATION_API_ENDPOINT` set at build time
/// 2. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    load_from(DEFAULT_CONFIG, option_env!("REGISTRATION_API_ENDPOINT"))
}

fn load_from(contents: &str, endpoint_override: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if let Some(endpoint) = endpoint_override.filter(|e| !e.trim().is_empty()) {
        log::info!("Using API endpoint from build environment: {}", endpoint);
        config.api.endpoint = endpoint.trim().to_string();
    }
    config.api.endpoint = config.api.endpoint.trim_end_matches('/').to_string();
    if config.api.endpoint.is_empty() {
        anyhow::bail!("api.endpoint must not be empty");
    }
    Ok(config)
}

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static Config {
    &CONFIG
}

use nps::NPS_BASE_URL;

/// Default listen address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Runtime configuration read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// NPS API key (`NPS_API_KEY`)
    pub nps_api_key: Option<String>,

    /// NPS API root (`NPS_BASE_URL`)
    pub nps_base_url: String,

    /// Listen address (`BIND_ADDRESS`)
    pub bind_address: String,

    /// Show the placeholder campground until the first fetch lands
    /// (`CAMPGROUNDS_SEED_PLACEHOLDER`)
    pub seed_placeholder: bool,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable holds a value that cannot be interpreted
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, treating blank values as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let seed_placeholder = match get("CAMPGROUNDS_SEED_PLACEHOLDER") {
            Some(value) => parse_bool("CAMPGROUNDS_SEED_PLACEHOLDER", value)?,
            None => false,
        };

        Ok(Self {
            nps_api_key: get("NPS_API_KEY"),
            nps_base_url: get("NPS_BASE_URL").unwrap_or_else(|| NPS_BASE_URL.to_string()),
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            seed_placeholder,
        })
    }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { name, value }),
    }
}

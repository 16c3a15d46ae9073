use std::fmt;
use std::time::Duration;

/// Delay used by the simulated contact sink when `CONTACT_DELAY_MS` is unset.
pub const DEFAULT_CONTACT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::from_value(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn from_value(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a whole number of milliseconds, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    /// How long the simulated submission takes before reporting success.
    pub delay: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_CONTACT_DELAY,
        }
    }
}

impl ContactConfig {
    pub fn from_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };
        let ms: u64 = raw.parse().map_err(|_| ConfigError::InvalidNumber {
            key: "CONTACT_DELAY_MS",
            value: raw.to_string(),
        })?;
        Ok(Self {
            delay: Duration::from_millis(ms),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub contact: ContactConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let delay = std::env::var("CONTACT_DELAY_MS").ok();
        Ok(Self {
            mode: AppMode::from_env(),
            contact: ContactConfig::from_value(delay.as_deref())?,
        })
    }
}

/// Best-effort `.env` loading for local runs.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("config: loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("startup: WARNING could not read .env: {e}"),
    }
}

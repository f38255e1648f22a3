use ::config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_DB_NAME: &str = "posAdminDb";
pub const DEFAULT_DB_VERSION: u32 = 1;

const ENV_PREFIX: &str = "POS_STORE_DB";
pub const ENV_DB_NAME: &str = "POS_STORE_DB_NAME";
pub const ENV_DB_VERSION: &str = "POS_STORE_DB_VERSION";

/// Database identity. Persisted verbatim as the namespace's `_info` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub name: String,
    pub version: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DB_NAME.to_string(),
            version: DEFAULT_DB_VERSION,
        }
    }
}

impl DbConfig {
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Defaults overridden by `POS_STORE_DB_NAME` / `POS_STORE_DB_VERSION`.
    pub fn from_env() -> Self {
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(source: Environment) -> Self {
        let settings = match Config::builder()
            .set_default("name", DEFAULT_DB_NAME)
            .and_then(|b| b.set_default("version", i64::from(DEFAULT_DB_VERSION)))
            .and_then(|b| b.add_source(source).build())
        {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "error loading database config, using defaults");
                return Self::default();
            }
        };

        let mut config = match settings.clone().try_deserialize::<DbConfig>() {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    error = %e,
                    default = DEFAULT_DB_VERSION,
                    "ignoring invalid {}", ENV_DB_VERSION
                );
                Self {
                    name: settings
                        .get_string("name")
                        .unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
                    version: DEFAULT_DB_VERSION,
                }
            }
        };

        config.name = config.name.trim().to_string();
        if config.name.is_empty() {
            config.name = DEFAULT_DB_NAME.to_string();
        }
        config
    }

    /// Key namespace: `{name}_v{version}`.
    pub fn prefix(&self) -> String {
        format!("{}_v{}", self.name, self.version)
    }
}

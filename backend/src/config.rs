//! Server configuration.
//!
//! Values are layered with figment, later sources overriding earlier ones:
//! 1. built-in defaults,
//! 2. a TOML file (`semeland.toml` in the working directory, or the path
//!    given in `SEMELAND_CONFIG`),
//! 3. environment variables prefixed with `SEMELAND_`, nested with `__`
//!    (`SEMELAND_SERVER__PORT=8080`, `SEMELAND_ASSETS__MODE=production`).

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "semeland.toml";
const CONFIG_PATH_VAR: &str = "SEMELAND_CONFIG";
const ENV_PREFIX: &str = "SEMELAND_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file holding the `teachers` and `records` tables.
    pub database_path: PathBuf,
}

/// How the single-page UI is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetMode {
    /// API only; the UI comes from the frontend's own dev server.
    #[default]
    Development,
    /// The built UI is served from `static_dir` with an `index.html` fallback.
    Production,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub mode: AssetMode,
    pub static_dir: PathBuf,
    /// Open the UI in the default browser once the server is listening.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("database.sqlite"),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            mode: AssetMode::Development,
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            open_browser: false,
        }
    }
}

impl Config {
    /// Loads the configuration from the default file location and the
    /// environment.
    pub fn load() -> Result<Self> {
        let file = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        Self::load_from(file)
    }

    /// Loads the configuration using `config_file` as the TOML layer. A
    /// missing file is not an error.
    pub fn load_from(config_file: impl Into<PathBuf>) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file.into()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::ConfigValidation {
                message: "server.port must be greater than 0".to_string(),
            });
        }
        if self.storage.database_path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "storage.database_path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Address shown in logs and opened in the browser.
    pub fn public_url(&self) -> String {
        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.server.port)
    }
}

//! Connection settings for the Foreman API.
//!
//! Values are resolved from built-in defaults, an optional TOML file and the command line
//! (which also carries the `FOREMAN_*` environment variables), in that order of precedence.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::CheckError;

pub const DEFAULT_URL: &str = "https://satellite.example/api/hosts";
pub const DEFAULT_CREDENTIAL: &str = "changeme";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_EXAMPLE_FILE: &str = "example-data/example-api-response.json";

/// Resolved settings handed to the document sources.
#[derive(Clone, PartialEq)]
pub struct ForemanConfig {
    pub url: String,
    pub user: String,
    pub token: String,
    pub insecure: bool,
    pub timeout: Duration,
    pub example_file: PathBuf,
}

impl Default for ForemanConfig {
    fn default() -> Self {
        ForemanConfig {
            url: DEFAULT_URL.to_owned(),
            user: DEFAULT_CREDENTIAL.to_owned(),
            token: DEFAULT_CREDENTIAL.to_owned(),
            insecure: false,
            timeout: DEFAULT_TIMEOUT,
            example_file: PathBuf::from(DEFAULT_EXAMPLE_FILE),
        }
    }
}

// The token must never end up in debug logs.
impl fmt::Debug for ForemanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForemanConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .field("insecure", &self.insecure)
            .field("timeout", &self.timeout)
            .field("example_file", &self.example_file)
            .finish()
    }
}

/// Contents of a config file. Every key is optional.
///
/// ```toml
/// url = "https://satellite.example.com/api/hosts"
/// user = "monitoring"
/// token = "secret"
/// insecure = false
/// timeout_secs = 10
/// example_file = "/etc/check_foreman/example.json"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub user: Option<String>,
    pub token: Option<String>,
    pub insecure: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub example_file: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<ConfigFile, CheckError> {
        let content = fs::read_to_string(path).map_err(|source| CheckError::ConfigRead {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| CheckError::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub user: Option<String>,
    pub token: Option<String>,
    pub insecure: bool,
    pub timeout_secs: Option<u64>,
    pub example_file: Option<PathBuf>,
}

impl ForemanConfig {
    /// Layers `file` and then `overrides` on top of the defaults.
    ///
    /// `insecure` can only be switched on: a set flag in either layer wins.
    pub fn resolve(file: Option<ConfigFile>, overrides: ConfigOverrides) -> ForemanConfig {
        let file = file.unwrap_or_default();
        let defaults = ForemanConfig::default();

        ForemanConfig {
            url: overrides.url.or(file.url).unwrap_or(defaults.url),
            user: overrides.user.or(file.user).unwrap_or(defaults.user),
            token: overrides.token.or(file.token).unwrap_or(defaults.token),
            insecure: overrides.insecure || file.insecure.unwrap_or(defaults.insecure),
            timeout: overrides
                .timeout_secs
                .or(file.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            example_file: overrides
                .example_file
                .or(file.example_file)
                .unwrap_or(defaults.example_file),
        }
    }

    /// Loads the optional config file at `path` and resolves it against `overrides`.
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<ForemanConfig, CheckError> {
        let file = path.map(ConfigFile::load).transpose()?;
        Ok(ForemanConfig::resolve(file, overrides))
    }
}

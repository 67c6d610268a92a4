//! Where the host document comes from: the Foreman API or a static example file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::{CheckError, ForemanConfig, HostDocument};

/// User agent sent to the Foreman API.
pub const USER_AGENT: &str = concat!("check_foreman/", env!("CARGO_PKG_VERSION"));

/// Supplies the document a check run works on.
pub trait DocumentSource {
    fn fetch(&self) -> Result<HostDocument, CheckError>;
}

/// Fetches the host list from the Foreman API using basic auth.
pub struct ApiSource {
    client: Client,
    url: String,
    user: String,
    token: String,
}

impl ApiSource {
    /// Builds the HTTP client. Certificate validation is skipped when `config.insecure` is set.
    pub fn new(config: &ForemanConfig) -> Result<ApiSource, CheckError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(CheckError::MissingDependency)?;

        Ok(ApiSource {
            client,
            url: config.url.clone(),
            user: config.user.clone(),
            token: config.token.clone(),
        })
    }
}

impl DocumentSource for ApiSource {
    fn fetch(&self) -> Result<HostDocument, CheckError> {
        debug!("GET {}", self.url);

        let body = self
            .client
            .get(&self.url)
            .basic_auth(&self.user, Some(&self.token))
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map_err(CheckError::SourceUnavailable)?;

        debug!("received {} bytes", body.len());

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(CheckError::EmptyResponse);
        }

        let value: Value =
            serde_json::from_slice(&body).map_err(|source| CheckError::InvalidFormat {
                origin: "the API response".to_owned(),
                source,
            })?;

        if is_empty(&value) {
            return Err(CheckError::EmptyResponse);
        }

        HostDocument::from_value(value)
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Reads a saved API response from disk instead of calling the API.
pub struct ExampleFileSource {
    path: PathBuf,
}

impl ExampleFileSource {
    pub fn new(path: &Path) -> ExampleFileSource {
        ExampleFileSource {
            path: path.to_owned(),
        }
    }
}

impl DocumentSource for ExampleFileSource {
    fn fetch(&self) -> Result<HostDocument, CheckError> {
        debug!("loading example data from {}", self.path.display());

        let bytes = fs::read(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CheckError::ExampleFileNotFound(self.path.clone()),
            _ => CheckError::ExampleFileRead {
                path: self.path.clone(),
                source,
            },
        })?;

        HostDocument::from_json(&bytes, &format!("The file {}", self.path.display()))
    }
}

/// Picks the example file when `simulate` is set, the API otherwise.
pub fn from_config(
    config: &ForemanConfig,
    simulate: bool,
) -> Result<Box<dyn DocumentSource>, CheckError> {
    if simulate {
        debug!("Simulation mode enabled");
        return Ok(Box::new(ExampleFileSource::new(&config.example_file)));
    }

    if config.insecure {
        debug!("Insecure detected, TLS certificate validation disabled");
    } else {
        debug!("Secure mode enabled");
    }

    Ok(Box::new(ApiSource::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!("")));
        assert!(!is_empty(&json!({ "results": [] })));
        assert!(!is_empty(&json!(0)));
    }

    #[test]
    fn test_missing_example_file() {
        let source = ExampleFileSource::new(Path::new("does/not/exist.json"));
        match source.fetch() {
            Err(CheckError::ExampleFileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("does/not/exist.json"))
            }
            other => panic!("expected ExampleFileNotFound, got {:?}", other),
        }
    }
}

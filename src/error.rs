use std::io;
use std::path::PathBuf;

pub const EXIT_CODE_GENERAL_ERROR: i32 = 1;
pub const EXIT_CODE_HOST_NOT_FOUND: i32 = 2;
pub const EXIT_CODE_JSON_ERROR: i32 = 3;
pub const EXIT_CODE_EXAMPLE_FILE_NOT_FOUND: i32 = 4;
pub const EXIT_CODE_TARGET_EMPTY: i32 = 5;
pub const EXIT_CODE_REQUEST_ERROR: i32 = 6;
pub const EXIT_CODE_MISSING_DEPENDENCY: i32 = 7;

/// Everything that ends a check run early. Each variant maps to one process exit status.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Target shall not be empty!")]
    TargetEmpty,
    #[error("could not read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("The file {} was not found.", .0.display())]
    ExampleFileNotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    ExampleFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not initialise the HTTP client: {0}")]
    MissingDependency(#[source] reqwest::Error),
    #[error("Error making GET request: {0}")]
    SourceUnavailable(#[source] reqwest::Error),
    #[error("Empty response from the API.")]
    EmptyResponse,
    #[error("{origin} is not valid JSON: {source}")]
    InvalidFormat {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Error accessing JSON key: {0}")]
    MalformedDocument(#[source] serde_json::Error),
    #[error("Host with name {0} not found.")]
    HostNotFound(String),
    #[error("could not write check output: {0}")]
    Output(#[from] io::Error),
}

impl CheckError {
    /// Returns the process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::TargetEmpty => EXIT_CODE_TARGET_EMPTY,
            CheckError::ExampleFileNotFound(_) => EXIT_CODE_EXAMPLE_FILE_NOT_FOUND,
            CheckError::MissingDependency(_) => EXIT_CODE_MISSING_DEPENDENCY,
            CheckError::SourceUnavailable(_) | CheckError::EmptyResponse => {
                EXIT_CODE_REQUEST_ERROR
            }
            CheckError::InvalidFormat { .. } | CheckError::MalformedDocument(_) => {
                EXIT_CODE_JSON_ERROR
            }
            CheckError::HostNotFound(_) => EXIT_CODE_HOST_NOT_FOUND,
            CheckError::ConfigRead { .. }
            | CheckError::ConfigParse { .. }
            | CheckError::ExampleFileRead { .. }
            | CheckError::Output(_) => EXIT_CODE_GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn test_exit_codes() {
        let test_data = [
            (CheckError::TargetEmpty, 5),
            (CheckError::HostNotFound("h1".to_owned()), 2),
            (CheckError::MalformedDocument(json_error()), 3),
            (
                CheckError::InvalidFormat {
                    origin: "x".to_owned(),
                    source: json_error(),
                },
                3,
            ),
            (CheckError::ExampleFileNotFound(PathBuf::from("x.json")), 4),
            (CheckError::EmptyResponse, 6),
            (
                CheckError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
                1,
            ),
        ];

        for (error, code) in &test_data {
            assert_eq!(error.exit_code(), *code, "{:?}", error);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CheckError::HostNotFound("h1".to_owned()).to_string(),
            "Host with name h1 not found."
        );
        assert_eq!(
            CheckError::ExampleFileNotFound(PathBuf::from("example-data/x.json")).to_string(),
            "The file example-data/x.json was not found."
        );
        assert_eq!(
            CheckError::TargetEmpty.to_string(),
            "Target shall not be empty!"
        );
    }
}

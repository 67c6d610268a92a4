use serde::Deserialize;
use serde_json::Value;

use crate::{CheckError, CheckKind};

/// The relevant part of a `GET /api/hosts` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostDocument {
    pub results: Vec<HostRecord>,
}

/// A single host of the `results` list. Fields not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostRecord {
    pub name: String,
    pub execution_status: i64,
    pub execution_status_label: String,
    pub global_status: i64,
    pub global_status_label: String,
    pub errata_status: i64,
    pub errata_status_label: String,
}

impl HostRecord {
    /// Returns the status code and label belonging to `kind`.
    pub fn status(&self, kind: CheckKind) -> (i64, &str) {
        match kind {
            CheckKind::Execution => (self.execution_status, &self.execution_status_label),
            CheckKind::Global => (self.global_status, &self.global_status_label),
            CheckKind::Errata => (self.errata_status, &self.errata_status_label),
        }
    }
}

impl HostDocument {
    /// Parses raw JSON. `origin` names the data source in error messages.
    pub fn from_json(bytes: &[u8], origin: &str) -> Result<HostDocument, CheckError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|source| CheckError::InvalidFormat {
                origin: origin.to_owned(),
                source,
            })?;

        HostDocument::from_value(value)
    }

    /// Validates an already parsed JSON value against the expected shape.
    pub fn from_value(value: Value) -> Result<HostDocument, CheckError> {
        serde_json::from_value(value).map_err(CheckError::MalformedDocument)
    }

    /// Returns the first host named exactly `target_name`.
    pub fn locate(&self, target_name: &str) -> Result<&HostRecord, CheckError> {
        self.results
            .iter()
            .find(|host| host.name == target_name)
            .ok_or_else(|| CheckError::HostNotFound(target_name.to_owned()))
    }
}

/// Returns the first host of `document` named exactly `target_name`.
pub fn locate<'a>(
    document: &'a HostDocument,
    target_name: &str,
) -> Result<&'a HostRecord, CheckError> {
    document.locate(target_name)
}

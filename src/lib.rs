//! The check_foreman crate turns the host status fields reported by a Foreman / Satellite
//! `/api/hosts` endpoint into Check_MK local check lines.
//!
//! A run fetches (or loads) one [HostDocument], locates a single host in it and derives three
//! service checks from that host's numeric status codes:
//!
//! ```rust
//! # use check_foreman::{run_report, HostDocument};
//! let document = HostDocument::from_json(
//!     br#"{"results":[{"name":"h1",
//!         "execution_status":0,"execution_status_label":"ok",
//!         "global_status":2,"global_status_label":"warn",
//!         "errata_status":1,"errata_status_label":"pending"}]}"#,
//!     "example",
//! )
//! .unwrap();
//!
//! let report = run_report(&document, "h1").unwrap();
//! assert_eq!(
//!     report.lines(),
//!     vec![
//!         r#"0 "Execution status" - ok"#,
//!         r#"1 "Global status" - warn"#,
//!         r#"1 "Errata status" - pending"#,
//!     ]
//! );
//! ```

use std::fmt;

mod check;
pub mod classifier;
pub mod config;
pub mod error;
pub mod host;
mod report;
mod runner;
pub mod source;

pub use crate::check::{emit, CheckResult};
pub use crate::classifier::CheckKind;
pub use crate::config::ForemanConfig;
pub use crate::error::CheckError;
pub use crate::host::{locate, HostDocument, HostRecord};
pub use crate::report::{run_report, Report, SECTION_HEADER};
pub use crate::runner::{Runner, RunnerResult};
pub use crate::source::{ApiSource, DocumentSource, ExampleFileSource};

/// Represents a service state as understood by Check_MK and nagios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Returns the numeric code used in the first column of a local check line.
    pub fn code(&self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceState;

    #[test]
    fn test_state() {
        assert_eq!(ServiceState::Ok.code(), 0);
        assert_eq!(ServiceState::Warning.code(), 1);
        assert_eq!(ServiceState::Critical.code(), 2);
        assert_eq!(ServiceState::Unknown.code(), 3);

        assert_eq!(&ServiceState::Ok.to_string(), "OK");
        assert_eq!(&ServiceState::Warning.to_string(), "WARNING");
        assert_eq!(&ServiceState::Critical.to_string(), "CRITICAL");
        assert_eq!(&ServiceState::Unknown.to_string(), "UNKNOWN");
    }
}

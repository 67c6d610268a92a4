//! Maps the numeric status codes of a host onto service states.
//!
//! Every check kind has its own table. Codes missing from a table are not an error, they
//! produce an [ServiceState::Unknown] result carrying the label of the host.

use log::debug;

use crate::{CheckResult, HostRecord, ServiceState};

/// Prefix of the message used for status codes without a mapping.
pub const FALLBACK_MESSAGE: &str = "Could not get any last execution details. Error: ";

const EXECUTION_POLICY: &[(i64, ServiceState)] =
    &[(0, ServiceState::Ok), (1, ServiceState::Warning)];

// Foreman uses 2 for its "Warning" global status.
const GLOBAL_POLICY: &[(i64, ServiceState)] =
    &[(0, ServiceState::Ok), (2, ServiceState::Warning)];

const ERRATA_POLICY: &[(i64, ServiceState)] = &[
    (0, ServiceState::Ok),
    (1, ServiceState::Warning),
    (3, ServiceState::Warning),
];

/// One of the three status dimensions reported per host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckKind {
    Execution,
    Global,
    Errata,
}

impl CheckKind {
    /// All check kinds in the order they are reported.
    pub const ALL: [CheckKind; 3] = [CheckKind::Execution, CheckKind::Global, CheckKind::Errata];

    pub fn service_name(&self) -> &'static str {
        match self {
            CheckKind::Execution => "Execution status",
            CheckKind::Global => "Global status",
            CheckKind::Errata => "Errata status",
        }
    }

    fn policy(&self) -> &'static [(i64, ServiceState)] {
        match self {
            CheckKind::Execution => EXECUTION_POLICY,
            CheckKind::Global => GLOBAL_POLICY,
            CheckKind::Errata => ERRATA_POLICY,
        }
    }

    /// Returns the mapped state for `code`, if this kind knows it.
    pub fn state_for(&self, code: i64) -> Option<ServiceState> {
        self.policy()
            .iter()
            .find(|(mapped, _)| *mapped == code)
            .map(|(_, state)| *state)
    }

    /// Classifies a single status code.
    ///
    /// A mapped code keeps `label` as the message, anything else becomes
    /// [ServiceState::Unknown] with the fallback message.
    pub fn classify(&self, code: i64, label: &str) -> CheckResult {
        match self.state_for(code) {
            Some(state) => CheckResult::new(state, self.service_name(), label),
            None => CheckResult::new(
                ServiceState::Unknown,
                self.service_name(),
                &format!("{}{}", FALLBACK_MESSAGE, label),
            ),
        }
    }

    /// Classifies the status of `host` belonging to this kind.
    pub fn classify_host(&self, host: &HostRecord) -> CheckResult {
        let (code, label) = host.status(*self);
        debug!("{}: code {} label {:?}", self.service_name(), code, label);
        self.classify(code, label)
    }
}

use std::fmt;
use std::io::{self, Write};

use crate::ServiceState;

/// A single service result, rendered as one Check_MK local check line.
///
/// ```rust
/// # use check_foreman::{CheckResult, ServiceState};
/// let result = CheckResult::new(ServiceState::Warning, "Global status", "Warning");
/// assert_eq!(&result.to_checkmk_string(), r#"1 "Global status" - Warning"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CheckResult {
    state: ServiceState,
    service_name: String,
    message: String,
}

impl CheckResult {
    pub fn new(state: ServiceState, service_name: &str, message: &str) -> CheckResult {
        CheckResult {
            state,
            service_name: service_name.to_owned(),
            message: message.to_owned(),
        }
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the line in the form `{code} "{service_name}" - {message}`.
    ///
    /// Quotes inside the service name or the message are not escaped. A label containing `"`
    /// therefore produces a line that Check_MK may split at the wrong place.
    pub fn to_checkmk_string(&self) -> String {
        format!(
            "{} \"{}\" - {}",
            self.state.code(),
            self.service_name,
            self.message
        )
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checkmk_string())
    }
}

/// Formats a check line, writes it newline terminated to `out` and returns it.
pub fn emit<W: Write>(
    out: &mut W,
    state: ServiceState,
    service_name: &str,
    message: &str,
) -> io::Result<String> {
    let line = CheckResult::new(state, service_name, message).to_checkmk_string();
    writeln!(out, "{}", line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_checkmk_string() {
        let test_data = [
            (ServiceState::Ok, "Execution status", "Last execution succeeded", r#"0 "Execution status" - Last execution succeeded"#),
            (ServiceState::Warning, "Global status", "Warning", r#"1 "Global status" - Warning"#),
            (ServiceState::Critical, "Errata status", "x", r#"2 "Errata status" - x"#),
            (ServiceState::Unknown, "Errata status", "", r#"3 "Errata status" - "#),
        ];

        for (state, name, message, expected) in &test_data {
            let result = CheckResult::new(*state, name, message);
            assert_eq!(&result.to_checkmk_string(), expected);
            assert_eq!(&result.to_string(), expected);
        }
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let result = CheckResult::new(
            ServiceState::Warning,
            "Errata \"status\"",
            "label with \"quotes\" inside",
        );
        assert_eq!(
            &result.to_checkmk_string(),
            r#"1 "Errata "status"" - label with "quotes" inside"#
        );
    }

    #[test]
    fn test_emit() {
        let mut out = Vec::new();
        let first = emit(&mut out, ServiceState::Ok, "Execution status", "ok").unwrap();
        let second = emit(&mut out, ServiceState::Unknown, "Global status", "huh").unwrap();

        assert_eq!(first, r#"0 "Execution status" - ok"#);
        assert_eq!(second, r#"3 "Global status" - huh"#);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 \"Execution status\" - ok\n3 \"Global status\" - huh\n"
        );
    }
}

use std::io::{self, Write};

use log::debug;

use crate::{emit, CheckError, CheckKind, CheckResult, HostDocument};

/// Section header expected by the Check_MK agent in front of this plugin's lines.
pub const SECTION_HEADER: &str = "<<<check_foreman:sep(59)>>>";

/// The three service checks of one host, in reporting order.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Returns the formatted check lines without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.results.iter().map(CheckResult::to_checkmk_string).collect()
    }

    /// Emits every check line to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<Vec<String>> {
        self.results
            .iter()
            .map(|r| emit(&mut *out, r.state(), r.service_name(), r.message()))
            .collect()
    }
}

/// Locates `target_name` once and classifies execution, global and errata status.
///
/// Nothing is produced when the host cannot be found.
pub fn run_report(document: &HostDocument, target_name: &str) -> Result<Report, CheckError> {
    debug!("Got target hostname {}", target_name);
    let host = document.locate(target_name)?;

    let results = CheckKind::ALL
        .iter()
        .map(|kind| kind.classify_host(host))
        .collect();

    Ok(Report { results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceState;

    const DOCUMENT: &[u8] = br#"{"results":[{"name":"h1","execution_status":0,"execution_status_label":"ok","global_status":2,"global_status_label":"warn","errata_status":1,"errata_status_label":"pending"}]}"#;

    #[test]
    fn test_run_report() {
        let document = HostDocument::from_json(DOCUMENT, "test").unwrap();
        let report = run_report(&document, "h1").unwrap();

        assert_eq!(
            report.lines(),
            vec![
                r#"0 "Execution status" - ok"#,
                r#"1 "Global status" - warn"#,
                r#"1 "Errata status" - pending"#,
            ]
        );

        let states: Vec<_> = report.results().iter().map(|r| r.state()).collect();
        assert_eq!(
            states,
            vec![ServiceState::Ok, ServiceState::Warning, ServiceState::Warning]
        );
    }

    #[test]
    fn test_run_report_host_missing() {
        let document = HostDocument::from_json(DOCUMENT, "test").unwrap();
        match run_report(&document, "missing") {
            Err(CheckError::HostNotFound(name)) => assert_eq!(name, "missing"),
            other => panic!("expected HostNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_write_to() {
        let document = HostDocument::from_json(DOCUMENT, "test").unwrap();
        let report = run_report(&document, "h1").unwrap();

        let mut out = Vec::new();
        let lines = report.write_to(&mut out).unwrap();

        assert_eq!(lines, report.lines());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 \"Execution status\" - ok\n1 \"Global status\" - warn\n1 \"Errata status\" - pending\n"
        );
    }
}

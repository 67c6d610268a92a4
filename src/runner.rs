use std::io::{self, Write};

use log::debug;

use crate::{CheckError, Report, SECTION_HEADER};

/// Runs a check and turns its outcome into output and an exit status.
///
/// ```rust,no_run
/// # use check_foreman::{run_report, HostDocument, Runner};
/// Runner::new()
///     .section_header(true)
///     .safe_run(|| {
///         let document = HostDocument::from_json(br#"{"results":[]}"#, "inline")?;
///         run_report(&document, "h1")
///     })
///     .print_and_exit()
/// ```
#[derive(Debug, Default)]
pub struct Runner {
    section_header: bool,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print [SECTION_HEADER] as the very first line, whatever the outcome of the check.
    pub fn section_header(mut self, enabled: bool) -> Self {
        self.section_header = enabled;
        self
    }

    pub fn safe_run(self, f: impl FnOnce() -> Result<Report, CheckError>) -> RunnerResult {
        RunnerResult {
            section_header: self.section_header,
            result: f(),
        }
    }
}

pub struct RunnerResult {
    section_header: bool,
    result: Result<Report, CheckError>,
}

impl RunnerResult {
    pub fn result(&self) -> &Result<Report, CheckError> {
        &self.result
    }

    /// Writes the check lines to `out` or the error message to `err` and returns the exit
    /// status to use.
    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> i32 {
        let written = self.write_lines(out).map_err(CheckError::Output);
        let failure = match (&self.result, &written) {
            (Err(e), _) | (Ok(_), Err(e)) => e,
            (Ok(_), Ok(())) => return 0,
        };

        debug!("check failed with exit status {}", failure.exit_code());
        let _ = writeln!(err, "ERROR: {}", failure);
        failure.exit_code()
    }

    fn write_lines<O: Write>(&self, out: &mut O) -> io::Result<()> {
        if self.section_header {
            writeln!(out, "{}", SECTION_HEADER)?;
        }
        if let Ok(report) = &self.result {
            report.write_to(out)?;
        }
        out.flush()
    }

    pub fn print_and_exit(self) -> ! {
        let code = self.write_to(&mut io::stdout().lock(), &mut io::stderr().lock());
        std::process::exit(code);
    }
}

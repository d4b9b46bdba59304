use std::path::Path;

use nounwind_common::config::Config;
use nounwind_common::{info, success, warn};
use nounwind_core::analysis::{self, Report, Verdict};

use crate::terminal::print;

/// Runs the lexical raise scan and prints per-function verdicts.
///
/// On the bundled source this prints the artifact's thesis: the direct form
/// gets flagged, the indirect form "looks clean", and both abort at runtime.
pub fn check(path: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let report: Report = match path {
        Some(path) => analysis::scan_path(path)?,
        None => {
            info!("no path given, scanning the bundled scenario source");
            analysis::scan_bundled()
        }
    };

    if report.is_empty() {
        warn!("no nounwind functions found, nothing to scan");
        return Ok(());
    }

    let mut flagged: usize = 0;
    for function in &report.functions {
        match function.verdict() {
            Verdict::Flagged => {
                flagged += 1;
                for finding in &function.findings {
                    warn!(
                        "{}:{} `{}` raises via `{}` inside a nounwind body",
                        function.origin.as_deref().unwrap_or("<bundled>"),
                        finding.line,
                        function.name,
                        finding.marker
                    );
                }
            }
            Verdict::LooksClean => {
                if cfg.quiet < 2 {
                    print::print_status(format!(
                        "`{}` looks clean to a lexical scan",
                        function.name
                    ));
                }
            }
        }
    }

    success!(
        "{} nounwind function(s) scanned, {} flagged",
        report.functions.len(),
        flagged
    );
    warn!("a clean lexical verdict says nothing about callees; `nounwind verify` has the ground truth");
    Ok(())
}

//! The **lexical** raise scan, and the gap it demonstrates.
//!
//! The scanner in [`lexical`] looks at source text one line at a time. It
//! knows what a nounwind function looks like and what a raise looks like,
//! and nothing else; in particular it does not follow calls. That blindness
//! is deliberate. Run it over [`BUNDLED_SCENARIOS`] and it flags
//! `escape_direct` while waving `escape_indirect` through, even though the
//! runtime aborts both. That false negative is what this repository exists
//! to show.
//!
//! **Architectural Note:**
//! Callers should depend on the [`Report`]/[`Verdict`] surface re-exported
//! here rather than on the scanner internals, so a sharper scan could be
//! swapped in without touching the CLI or the regression tests.

use std::path::Path;

use anyhow::Context;

mod lexical;

pub use lexical::{Finding, FunctionScan, Report, Verdict, scan_source};

/// The scenario source shipped inside the binary, so the scan can run
/// against the exact code being demonstrated.
pub const BUNDLED_SCENARIOS: &str = include_str!("scenario.rs");

/// Scans the bundled scenario source.
pub fn scan_bundled() -> Report {
    lexical::scan_source(BUNDLED_SCENARIOS)
}

/// Scans a `.rs` file, or every `.rs` file under a directory.
pub fn scan_path(path: &Path) -> anyhow::Result<Report> {
    let mut report = Report::default();
    scan_into(path, &mut report)?;
    Ok(report)
}

fn scan_into(path: &Path, report: &mut Report) -> anyhow::Result<()> {
    if path.is_dir() {
        let entries = std::fs::read_dir(path)
            .with_context(|| format!("failed to read directory {}", path.display()))?;
        for entry in entries {
            let entry =
                entry.with_context(|| format!("failed to read entry in {}", path.display()))?;
            scan_into(&entry.path(), report)?;
        }
        return Ok(());
    }

    if path.extension().is_some_and(|ext| ext == "rs") {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut scanned = lexical::scan_source(&source);
        for function in &mut scanned.functions {
            function.origin = Some(path.display().to_string());
        }
        report.merge(scanned);
    }

    Ok(())
}

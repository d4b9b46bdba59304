#![cfg(test)]
use nounwind_core::analysis::{self, Verdict};
use nounwind_core::scenario::Scenario;

/// The regression this repository exists for: the lexical verdicts for the
/// direct and indirect forms must differ, while both forms promise the same
/// abnormal termination. If the scanner ever learns to follow calls, this
/// test is the place that notices the demonstration went stale.
#[test]
fn detection_differs_between_direct_and_indirect_forms() {
    let report = analysis::scan_bundled();

    let direct = report
        .verdict(Scenario::Direct.entry_function())
        .expect("direct form is scanned");
    let indirect = report
        .verdict(Scenario::Indirect.entry_function())
        .expect("indirect form is scanned");

    assert_eq!(direct, Verdict::Flagged, "direct raise must be flagged");
    assert_eq!(
        indirect,
        Verdict::LooksClean,
        "indirect raise must slip through the lexical scan"
    );
    assert_eq!(
        Scenario::Direct.expectation(),
        Scenario::Indirect.expectation(),
        "both forms abort at runtime; only the analysis differs"
    );
}

#[test]
fn unguarded_entry_is_not_subject_to_the_scan() {
    let report = analysis::scan_bundled();
    assert_eq!(report.verdict(Scenario::Unguarded.entry_function()), None);
}

#[test]
fn bundled_source_contains_every_entry_function() {
    for scenario in Scenario::ALL {
        assert!(
            analysis::BUNDLED_SCENARIOS.contains(scenario.entry_function()),
            "bundled source lost '{}'",
            scenario.entry_function()
        );
    }
}

use nounwind_common::config::Config;
use nounwind_common::info;
use nounwind_core::harness;
use nounwind_core::scenario::Scenario;

/// Executes a scenario in this very process.
///
/// For the guarded scenarios the runner does not come back: the process is
/// aborted at the nounwind frame and the exit path below is never reached.
pub fn run(scenario: Scenario, cfg: &Config) -> anyhow::Result<()> {
    info!("scenario '{}': {}", scenario.name(), scenario.description());
    info!("promised termination: {}", scenario.expectation());

    let code = harness::run_guarded(scenario, cfg);
    std::process::exit(code)
}

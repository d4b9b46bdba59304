use std::process::Stdio;

use anyhow::Context;
use colored::*;
use nounwind_common::config::Config;
use nounwind_common::error::HarnessError;
use nounwind_common::outcome::Termination;
use nounwind_common::{fail, success};
use nounwind_core::observe;
use nounwind_core::scenario::Scenario;
use tokio::process::Command;

use crate::terminal::print;

type Detail = (String, ColoredString);

/// Re-runs scenarios in probe children and compares the observed
/// termination against each scenario's promise.
pub async fn verify(only: Option<Scenario>, cfg: &Config) -> anyhow::Result<()> {
    let scenarios: Vec<Scenario> = match only {
        Some(scenario) => vec![scenario],
        None => Scenario::ALL.to_vec(),
    };

    let mut mismatches: usize = 0;
    for (idx, scenario) in scenarios.into_iter().enumerate() {
        let mut probe = self_probe(scenario).context("building probe command")?;
        let termination: Termination = observe::observe(&mut probe)
            .await
            .with_context(|| format!("observing scenario '{}'", scenario.name()))?;
        let expectation = scenario.expectation();

        if cfg.quiet < 2 {
            print::tree_head(idx, scenario.name());
            let details: Vec<Detail> = vec![
                ("promise".to_string(), expectation.to_string().normal()),
                ("observed".to_string(), termination.to_string().cyan()),
            ];
            print::as_tree_one_level(details);
        }

        if expectation.matches(&termination) {
            success!("'{}' terminated as promised", scenario.name());
        } else {
            fail!(
                "'{}' promised {}, but {}",
                scenario.name(),
                expectation,
                termination
            );
            mismatches += 1;
        }
    }

    if mismatches > 0 {
        anyhow::bail!("{mismatches} scenario(s) terminated unexpectedly");
    }
    Ok(())
}

/// Builds a probe that re-invokes the current executable for one scenario.
/// The probe's streams are discarded; only its termination matters here.
fn self_probe(scenario: Scenario) -> Result<Command, HarnessError> {
    let exe = std::env::current_exe().map_err(HarnessError::SelfLookup)?;
    let mut probe = Command::new(exe);
    probe
        .arg("--quiet")
        .arg("run")
        .arg(scenario.name())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Ok(probe)
}

#![cfg(test)]
//! Observation tests against throwaway shell children: cheap probes whose
//! exit or kill behavior is known in advance, so classification can be
//! checked without building the demonstration binary.

use nounwind_common::outcome::{Expectation, Termination};
use nounwind_core::observe;
use tokio::process::Command;

#[cfg(unix)]
fn sh(script: &str) -> Command {
    let mut cmd = Command::new("/bin/sh");
    cmd.arg("-c").arg(script);
    cmd
}

#[cfg(unix)]
#[tokio::test]
async fn classifies_clean_exits() -> anyhow::Result<()> {
    let termination = observe::observe(&mut sh("exit 0")).await?;
    assert_eq!(termination, Termination::Exited { code: 0 });
    assert!(Expectation::CleanExit.matches(&termination));
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn classifies_failing_exits() -> anyhow::Result<()> {
    let termination = observe::observe(&mut sh("exit 3")).await?;
    assert_eq!(termination, Termination::Exited { code: 3 });
    assert!(!Expectation::CleanExit.matches(&termination));
    assert!(!Expectation::Abort.matches(&termination));
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn classifies_signal_kills_as_aborts() -> anyhow::Result<()> {
    let termination = observe::observe(&mut sh("kill -6 $$")).await?;
    assert_eq!(termination, Termination::Killed { signal: 6 });
    assert!(Expectation::Abort.matches(&termination));
    assert!(!Expectation::CleanExit.matches(&termination));
    Ok(())
}

#[tokio::test]
async fn missing_probe_is_a_harness_error() {
    let mut probe = Command::new("/definitely/not/a/real/binary");
    let err = observe::observe(&mut probe).await.unwrap_err();
    assert!(err.to_string().contains("probe"));
}

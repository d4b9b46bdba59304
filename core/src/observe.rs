//! Runs probe processes and classifies how they die.
//!
//! A scenario that aborts takes its whole process with it, so the harness
//! can only watch one from the outside. The caller builds the probe command
//! (usually the current executable re-invoked with `run <scenario>`); this
//! module waits on it and reduces the platform exit status to a
//! [`Termination`].

use nounwind_common::error::HarnessError;
use nounwind_common::outcome::{self, Termination};
use tokio::process::Command;

/// Runs the probe to completion and classifies its termination.
pub async fn observe(probe: &mut Command) -> Result<Termination, HarnessError> {
    let status = probe.status().await.map_err(HarnessError::Probe)?;
    Ok(outcome::classify(status))
}

use thiserror::Error;

/// Errors on the harness plane.
///
/// The demonstrated failure (a panic escaping a nounwind boundary) is never
/// represented here. It cannot be: by the time it happens the process is
/// already gone. These variants cover the machinery *around* the
/// demonstration.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown scenario '{0}' (expected one of: indirect, direct, unguarded)")]
    UnknownScenario(String),

    #[error("could not locate the current executable for the probe")]
    SelfLookup(#[source] std::io::Error),

    #[error("failed to run probe process")]
    Probe(#[source] std::io::Error),
}

//! # Termination Model
//!
//! How a probe process actually ended, and how a scenario promised to end.
//!
//! The whole demonstration hinges on the difference between a process that
//! *returns* an exit code and a process the runtime *kills* while a panic is
//! crossing a nounwind boundary. `classify` turns an [`std::process::ExitStatus`]
//! into that distinction; [`Expectation::matches`] compares it against the
//! promise a scenario makes.

use std::fmt;
use std::process::ExitStatus;

/// How a probe process actually terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with a code, zero or not.
    Exited { code: i32 },
    /// Killed by a signal before it could return a code (Unix).
    Killed { signal: i32 },
    /// The platform reported neither a code nor a signal.
    Unknown,
}

/// How a scenario is supposed to terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The runtime aborts the process while the panic unwinds across the
    /// nounwind boundary.
    Abort,
    /// The enclosing handler catches the panic and the process exits zero.
    CleanExit,
}

/// Classifies an exit status into a [`Termination`].
pub fn classify(status: ExitStatus) -> Termination {
    if let Some(code) = status.code() {
        return Termination::Exited { code };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Termination::Killed { signal };
        }
    }

    Termination::Unknown
}

impl Expectation {
    /// Whether an observed termination honors this expectation.
    ///
    /// Abort matching is signal-agnostic: depending on the toolchain the
    /// nounwind abort path raises SIGABRT or SIGILL, and pinning one of them
    /// would make the comparison flaky across compiler versions.
    pub fn matches(self, termination: &Termination) -> bool {
        match (self, termination) {
            (Expectation::CleanExit, Termination::Exited { code }) => *code == 0,
            (Expectation::Abort, Termination::Killed { .. }) => true,
            // Windows has no signals; abort surfaces as a nonzero status
            // (STATUS_STACK_BUFFER_OVERRUN from __fastfail on recent
            // toolchains, 3 from msvcrt abort on older ones).
            #[cfg(windows)]
            (Expectation::Abort, Termination::Exited { code }) => *code != 0,
            _ => false,
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited { code } => write!(f, "exited with code {code}"),
            Termination::Killed { signal } => match signal_name(*signal) {
                Some(name) => write!(f, "killed by signal {signal} ({name})"),
                None => write!(f, "killed by signal {signal}"),
            },
            Termination::Unknown => write!(f, "terminated in an unknown way"),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Abort => write!(f, "abnormal termination (runtime abort)"),
            Expectation::CleanExit => write!(f, "clean exit (code 0)"),
        }
    }
}

fn signal_name(signal: i32) -> Option<&'static str> {
    match signal {
        4 => Some("SIGILL"),
        6 => Some("SIGABRT"),
        9 => Some("SIGKILL"),
        11 => Some("SIGSEGV"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_exit_only_matches_code_zero() {
        assert!(Expectation::CleanExit.matches(&Termination::Exited { code: 0 }));
        assert!(!Expectation::CleanExit.matches(&Termination::Exited { code: 1 }));
        assert!(!Expectation::CleanExit.matches(&Termination::Killed { signal: 6 }));
        assert!(!Expectation::CleanExit.matches(&Termination::Unknown));
    }

    #[test]
    fn abort_matches_any_signal_kill() {
        assert!(Expectation::Abort.matches(&Termination::Killed { signal: 6 }));
        assert!(Expectation::Abort.matches(&Termination::Killed { signal: 4 }));
        assert!(!Expectation::Abort.matches(&Termination::Unknown));
    }

    #[cfg(unix)]
    #[test]
    fn abort_rejects_normal_exits_on_unix() {
        assert!(!Expectation::Abort.matches(&Termination::Exited { code: 0 }));
        assert!(!Expectation::Abort.matches(&Termination::Exited { code: 134 }));
    }

    #[test]
    fn termination_formats_known_signals() {
        let t = Termination::Killed { signal: 6 };
        assert_eq!(t.to_string(), "killed by signal 6 (SIGABRT)");

        let t = Termination::Killed { signal: 7 };
        assert_eq!(t.to_string(), "killed by signal 7");

        let t = Termination::Exited { code: 0 };
        assert_eq!(t.to_string(), "exited with code 0");
    }
}

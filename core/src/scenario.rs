//! # Bundled Scenarios
//!
//! The demonstrations this harness exists for. Each scenario is a short call
//! chain ending in a raised panic; they differ only in where the nounwind
//! contract sits relative to the raise site:
//!
//! * `indirect`: the contract function's own body contains no raise; the
//!   panic arrives through a callee. A lexical scan of the function sees
//!   nothing wrong. The runtime aborts anyway.
//! * `direct`: the raise is written inside the contract function itself.
//!   The contrast case any scan worth the name flags.
//! * `unguarded`: no contract anywhere on the path, so the panic unwinds
//!   all the way to the enclosing handler.
//!
//! This file is embedded into the binary (see [`crate::analysis`]) so the
//! lexical scanner can be run against the exact code being demonstrated.

use std::panic::panic_any;
use std::str::FromStr;

use nounwind_common::error::HarnessError;
use nounwind_common::outcome::Expectation;

/// Payload carried by every demonstration panic.
pub const RAISE_PAYLOAD: i32 = 10;

/// Unconditionally raises [`RAISE_PAYLOAD`] as a panic.
///
/// Not typed `-> !`; the raise has to stay invisible at the signature level
/// for the indirect form to demonstrate anything.
fn raise() {
    panic_any(RAISE_PAYLOAD);
}

/// Nounwind entry whose body contains no raise of its own.
///
/// The panic escapes through `raise`. The ABI promises the caller this
/// function never unwinds; when the panic reaches this frame the runtime
/// aborts the process instead of letting the promise break silently.
extern "C" fn escape_indirect() {
    raise();
}

/// Contrast case: the raise sits lexically inside the nounwind body.
extern "C" fn escape_direct() {
    panic_any(RAISE_PAYLOAD);
}

/// No nounwind contract on the path. The panic unwinds normally and the
/// enclosing handler gets to run.
fn escape_unguarded() {
    raise();
}

/// One of the bundled demonstrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Indirect,
    Direct,
    Unguarded,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Indirect, Scenario::Direct, Scenario::Unguarded];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Indirect => "indirect",
            Scenario::Direct => "direct",
            Scenario::Unguarded => "unguarded",
        }
    }

    /// The function the scenario enters, by its name in this file. This is
    /// the key under which the lexical scanner reports its verdict.
    pub fn entry_function(self) -> &'static str {
        match self {
            Scenario::Indirect => "escape_indirect",
            Scenario::Direct => "escape_direct",
            Scenario::Unguarded => "escape_unguarded",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Indirect => "a callee raises inside a nounwind function; the raise is invisible to a lexical scan",
            Scenario::Direct => "the raise is written directly inside the nounwind body",
            Scenario::Unguarded => "no nounwind contract on the path; the enclosing handler catches the raise",
        }
    }

    /// The contract annotation on the entry function, for display.
    pub fn contract(self) -> &'static str {
        match self {
            Scenario::Indirect | Scenario::Direct => "extern \"C\" (nounwind)",
            Scenario::Unguarded => "none",
        }
    }

    /// How the process is supposed to terminate when this scenario runs
    /// under the guarded runner.
    pub fn expectation(self) -> Expectation {
        match self {
            Scenario::Indirect | Scenario::Direct => Expectation::Abort,
            Scenario::Unguarded => Expectation::CleanExit,
        }
    }

    /// Enters the scenario's call chain.
    ///
    /// For `indirect` and `direct` this call never returns: the process is
    /// aborted while the panic crosses the nounwind frame. For `unguarded`
    /// it panics in the ordinary, catchable way.
    pub fn invoke(self) {
        match self {
            Scenario::Indirect => escape_indirect(),
            Scenario::Direct => escape_direct(),
            Scenario::Unguarded => escape_unguarded(),
        }
    }
}

impl FromStr for Scenario {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == lower)
            .ok_or_else(|| HarnessError::UnknownScenario(s.to_string()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert!(matches!(Scenario::from_str("indirect"), Ok(Scenario::Indirect)));
        assert!(matches!(Scenario::from_str("Direct"), Ok(Scenario::Direct)));
        assert!(matches!(Scenario::from_str("UNGUARDED"), Ok(Scenario::Unguarded)));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = Scenario::from_str("sideways").unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn names_are_unique() {
        for a in Scenario::ALL {
            for b in Scenario::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name());
                    assert_ne!(a.entry_function(), b.entry_function());
                }
            }
        }
    }

    #[test]
    fn guarded_scenarios_promise_abort() {
        assert_eq!(Scenario::Indirect.expectation(), Expectation::Abort);
        assert_eq!(Scenario::Direct.expectation(), Expectation::Abort);
        assert_eq!(Scenario::Unguarded.expectation(), Expectation::CleanExit);
    }
}

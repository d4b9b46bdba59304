//! The guarded runner: the demonstration's entry point.
//!
//! Runs a scenario inside a handler that intends to catch every panic
//! payload. For the guarded scenarios that intent is futile; the runtime
//! aborts the process while the panic is still crossing the nounwind frame,
//! and the catch branch below is dead code. Keeping the branch is the point:
//! it reads like it works.

use std::any::Any;
use std::panic::{self, PanicHookInfo};

use nounwind_common::config::Config;
use nounwind_common::{fail, success};
use tracing::debug;

use crate::scenario::Scenario;

/// Exit code returned when the enclosing handler recovers the payload.
/// Matches the clean return the demonstration's source text suggests.
pub const EXIT_RECOVERED: i32 = 0;

/// Runs a scenario under a catch-all handler and returns the process exit
/// code. Never returns for scenarios that abort.
pub fn run_guarded(scenario: Scenario, cfg: &Config) -> i32 {
    install_hook(cfg.backtrace);

    match panic::catch_unwind(move || scenario.invoke()) {
        Ok(()) => {
            success!("scenario '{}' returned without raising", scenario.name());
            EXIT_RECOVERED
        }
        Err(payload) => {
            // Only reachable when the raise never crossed a nounwind frame.
            success!(
                "handler caught panic payload: {}",
                describe_payload(payload.as_ref())
            );
            EXIT_RECOVERED
        }
    }
}

/// Replaces the default panic hook with one that logs through tracing.
///
/// The hook runs at the raise site, before unwinding starts, so its output
/// is visible even when the process is about to be aborted at the nounwind
/// frame.
fn install_hook(with_backtrace: bool) {
    panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        fail!("panic raised: {}", describe_payload(info.payload()));
        if let Some(location) = info.location() {
            debug!("raised at {location}");
        }
        if with_backtrace {
            let trace = backtrace::Backtrace::new();
            debug!("backtrace at raise site:\n{trace:?}");
        }
    }));
}

/// Renders a panic payload for logging. The demonstration raises an `i32`,
/// but the hook also sees the runtime's own string payloads (for example the
/// "cannot unwind" panic raised at the nounwind frame itself).
pub fn describe_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(value) = payload.downcast_ref::<i32>() {
        format!("{value} (i32)")
    } else if let Some(text) = payload.downcast_ref::<&str>() {
        format!("{text:?}")
    } else if let Some(text) = payload.downcast_ref::<String>() {
        format!("{text:?}")
    } else {
        "opaque payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_integer_payloads() {
        let boxed: Box<dyn Any + Send> = Box::new(10i32);
        assert_eq!(describe_payload(boxed.as_ref()), "10 (i32)");
    }

    #[test]
    fn describes_string_payloads() {
        let boxed: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(describe_payload(boxed.as_ref()), "\"boom\"");

        let boxed: Box<dyn Any + Send> = Box::new(String::from("boom"));
        assert_eq!(describe_payload(boxed.as_ref()), "\"boom\"");
    }

    #[test]
    fn describes_unexpected_payloads_opaquely() {
        let boxed: Box<dyn Any + Send> = Box::new(3.5f64);
        assert_eq!(describe_payload(boxed.as_ref()), "opaque payload");
    }
}

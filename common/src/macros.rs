//! Logging macros shared by every crate in the workspace.
//!
//! These wrap `tracing` events with harness-specific targets so the CLI
//! formatter can pick a status symbol per kind rather than per level.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "nounwind::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}

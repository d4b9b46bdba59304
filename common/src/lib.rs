pub mod config;
pub mod error;
pub mod macros;
pub mod outcome;

// Re-exported so the `#[macro_export]` macros can reach tracing through
// `$crate` from any downstream crate.
pub use tracing;

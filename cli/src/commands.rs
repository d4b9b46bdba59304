pub mod check;
pub mod list;
pub mod run;
pub mod verify;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use nounwind_core::scenario::Scenario;

#[derive(Parser)]
#[command(name = "nounwind")]
#[command(about = "A demonstration harness for panics that escape nounwind boundaries.")]
pub struct CommandLine {
    /// Reduce decorative output (-q drops banner and headers, -qq detail too)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Capture a backtrace at the raise site
    #[arg(short, long, global = true)]
    pub backtrace: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the bundled scenarios
    #[command(alias = "l")]
    List,
    /// Execute a scenario in this process and let it terminate how it will
    #[command(alias = "r")]
    Run { scenario: Scenario },
    /// Re-run scenarios in probe processes and check how they really end
    #[command(alias = "v")]
    Verify { scenario: Option<Scenario> },
    /// Lexically scan source for raises inside nounwind functions
    #[command(alias = "c")]
    Check { path: Option<PathBuf> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

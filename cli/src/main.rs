mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, list, run, verify};
use nounwind_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        quiet: commands.quiet,
        backtrace: commands.backtrace,
    };

    match commands.command {
        Commands::List => {
            print::banner(cfg.quiet);
            print::header("bundled scenarios", cfg.quiet);
            Ok(list::list(&cfg))
        }
        Commands::Run { scenario } => {
            print::header("running scenario", cfg.quiet);
            run::run(scenario, &cfg)
        }
        Commands::Verify { scenario } => {
            print::header("verifying terminations", cfg.quiet);
            verify::verify(scenario, &cfg).await
        }
        Commands::Check { path } => {
            print::header("lexical raise scan", cfg.quiet);
            check::check(path.as_deref(), &cfg)
        }
    }
}

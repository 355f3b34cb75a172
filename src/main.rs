//! `native-res` command-line entry point.

use anyhow::Result;
use clap::Parser;

use native_res::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    match args.command {
        cli::Command::Copy(opts) => commands::copy::run(&args.global, &opts, &log),
        cli::Command::List(opts) => commands::list::run(&opts),
        cli::Command::Completions { shell } => {
            commands::completions::run(shell);
            Ok(())
        }
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}

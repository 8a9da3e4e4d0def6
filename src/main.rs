mod cli;
mod counters;
mod error;
mod init;
mod logging;
mod progress;
mod report;
mod scan;
mod session;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan(args) => scan::execute(args),
        Commands::Counters(args) => counters::execute(args),
        Commands::Init { path, force } => init::execute(path, force),
    };

    if let Err(err) = result {
        ui::failure(&err.user_message());
        process::exit(1);
    }
}

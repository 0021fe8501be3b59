//! ssync - one-way directory sync over rsync
//!
//! Usage: ssync [FLAGS] <dest>
//!        ssync [FLAGS] <source> <dest>
//!
//! Exactly one endpoint is local. After the initial sync the local source is
//! watched and every burst of changes triggers another transfer.

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version go to stdout and are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    ssync::logging::init_logging(cli.debug);

    if let Err(err) = commands::sync::cmd_sync(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod error;
mod logging;
mod services;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match commands::dispatch(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let code = error::exit_code_for(&e);
            services::output::print_error(cli.json, &e, code);
            ExitCode::from(code)
        }
    }
}

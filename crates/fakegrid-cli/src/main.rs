use std::process::ExitCode;

use clap::Parser;

mod admin;
mod cli;
mod commands;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = cli::Cli::parse();
    match commands::run_command(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(1)
        }
    }
}

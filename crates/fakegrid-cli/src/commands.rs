use std::io;

use crate::admin;
use crate::cli::{AdminCommand, Cli, Command};

pub fn run_command(cli: Cli) -> anyhow::Result<u8> {
    match cli.command {
        Command::Admin(args) => match args.command {
            AdminCommand::AddGridManagerCert(args) => {
                let certificate =
                    admin::read_certificate(&args.filename, &mut io::stdin().lock())?;
                admin::add_grid_manager_cert(
                    &cli.node_directory,
                    &args.name,
                    &certificate,
                    &mut io::stderr().lock(),
                )
            }
        },
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fakegrid",
    about = "fakegrid — in-memory storage grid test double",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Node configuration directory (must contain fakegrid.cfg).
    #[arg(short = 'd', long, global = true, default_value = ".")]
    pub node_directory: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Node administration commands
    Admin(AdminArgs),
}

#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Store a grid-manager certificate in this node's configuration
    /// directory
    AddGridManagerCert(AddGridManagerCertArgs),
}

#[derive(Args)]
pub struct AddGridManagerCertArgs {
    /// Name to store the certificate under
    #[arg(long)]
    pub name: String,

    /// File to read the certificate from, or '-' for stdin
    #[arg(long)]
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_cert() {
        let cli = Cli::try_parse_from([
            "fakegrid",
            "admin",
            "add-grid-manager-cert",
            "--name",
            "zero",
            "--filename",
            "-",
        ])
        .unwrap();
        let Command::Admin(admin) = cli.command;
        let AdminCommand::AddGridManagerCert(args) = admin.command;
        assert_eq!(args.name, "zero");
        assert_eq!(args.filename, "-");
    }

    #[test]
    fn parse_node_directory() {
        let cli = Cli::try_parse_from([
            "fakegrid",
            "--node-directory",
            "/tmp/node",
            "admin",
            "add-grid-manager-cert",
            "--name",
            "zero",
            "--filename",
            "cert.json",
        ])
        .unwrap();
        assert_eq!(cli.node_directory, PathBuf::from("/tmp/node"));
    }

    #[test]
    fn node_directory_defaults_to_cwd() {
        let cli = Cli::try_parse_from([
            "fakegrid",
            "admin",
            "add-grid-manager-cert",
            "--name",
            "n",
            "--filename",
            "f",
        ])
        .unwrap();
        assert_eq!(cli.node_directory, PathBuf::from("."));
    }

    #[test]
    fn name_and_filename_are_required() {
        assert!(Cli::try_parse_from(["fakegrid", "admin", "add-grid-manager-cert"]).is_err());
        assert!(Cli::try_parse_from([
            "fakegrid",
            "admin",
            "add-grid-manager-cert",
            "--name",
            "zero",
        ])
        .is_err());
    }
}

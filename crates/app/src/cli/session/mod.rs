use clap::{Args, Subcommand};

mod issue;

#[derive(Debug, Args)]
pub(crate) struct SessionCommand {
    #[command(subcommand)]
    command: SessionSubcommand,
}

#[derive(Debug, Subcommand)]
enum SessionSubcommand {
    /// Mint an admin session token without logging in
    Issue(issue::IssueSessionArgs),
}

pub(crate) fn run(command: SessionCommand) -> Result<(), String> {
    match command.command {
        SessionSubcommand::Issue(args) => issue::run(args),
    }
}

use clap::{Parser, Subcommand};

mod db;
mod orders;
mod session;

#[derive(Debug, Parser)]
#[command(name = "orderdesk-app", about = "Orderdesk admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Orders(orders::OrdersCommand),
    Session(session::SessionCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Orders(command) => orders::run(command).await,
            Commands::Session(command) => session::run(command),
        }
    }
}

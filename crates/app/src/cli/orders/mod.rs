use clap::{Args, Subcommand};
use orderdesk_app::{
    database::{self, Db},
    domain::orders::{OrdersSettings, PgOrdersService},
};

mod delete;
mod list;
mod stats;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Print the most recent orders
    List(list::ListOrdersArgs),
    /// Print dashboard statistics
    Stats,
    /// Delete a single order
    Delete(delete::DeleteOrderArgs),
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    let database_url = command
        .database_url
        .ok_or_else(|| "DATABASE_URL or --database-url is required".to_string())?;

    let pool = database::connect(&database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgOrdersService::new(Db::new(pool), OrdersSettings::default());

    match command.command {
        OrdersSubcommand::List(args) => list::run(&service, args).await,
        OrdersSubcommand::Stats => stats::run(&service).await,
        OrdersSubcommand::Delete(args) => delete::run(&service, args).await,
    }
}

use clap::Args;
use orderdesk_app::domain::orders::{DEFAULT_ORDER_LIST_LIMIT, OrdersService, PgOrdersService};

#[derive(Debug, Args)]
pub(crate) struct ListOrdersArgs {
    /// Maximum number of orders to print
    #[arg(long, default_value_t = DEFAULT_ORDER_LIST_LIMIT)]
    limit: u32,
}

pub(crate) async fn run(service: &PgOrdersService, args: ListOrdersArgs) -> Result<(), String> {
    let orders = service
        .list_orders(args.limit)
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    for order in orders {
        println!("order_uuid: {}", order.uuid);
        println!("customer_email: {}", order.customer_email);
        println!("amount: {} {}", order.amount, order.currency);
        println!("status: {}", order.status);
        println!(
            "payment_id: {}",
            order.payment_id.as_deref().unwrap_or("none")
        );
        println!("created_at: {}", order.created_at);
        println!(
            "processed_at: {}",
            order
                .processed_at
                .map_or_else(|| "never".to_string(), |value| value.to_string())
        );
        println!();
    }

    Ok(())
}

use clap::Args;
use orderdesk_app::domain::orders::{OrdersService, PgOrdersService, records::OrderUuid};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct DeleteOrderArgs {
    /// UUID of the order to delete
    order_uuid: Uuid,
}

pub(crate) async fn run(service: &PgOrdersService, args: DeleteOrderArgs) -> Result<(), String> {
    service
        .delete_order(OrderUuid::from_uuid(args.order_uuid))
        .await
        .map_err(|error| format!("failed to delete order {}: {error}", args.order_uuid))?;

    println!("deleted order {}", args.order_uuid);

    Ok(())
}

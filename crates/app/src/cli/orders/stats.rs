use orderdesk_app::domain::orders::{OrdersService, PgOrdersService};

pub(crate) async fn run(service: &PgOrdersService) -> Result<(), String> {
    let stats = service
        .order_stats()
        .await
        .map_err(|error| format!("failed to compute stats: {error}"))?;

    println!("active: {}", stats.active);
    println!("canceled: {}", stats.canceled);
    println!("pending: {}", stats.pending);
    println!("total: {}", stats.total);
    println!("total_revenue: {}", stats.total_revenue);

    Ok(())
}

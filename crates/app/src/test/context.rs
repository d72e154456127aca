//! Test context for service-level integration tests.

use rust_decimal::Decimal;
use sqlx::query;

use crate::{
    database::Db,
    domain::orders::{OrdersSettings, PgOrdersService, records::OrderStatus},
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub(crate) db: TestDb,
    pub(crate) orders: PgOrdersService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let db = TestDb::new().await;

        Self {
            orders: PgOrdersService::new(Db::new(db.pool().clone()), OrdersSettings::default()),
            db,
        }
    }

    /// Write an order row directly, bypassing the service. Used to seed states
    /// that no service operation produces.
    pub(crate) async fn insert_raw_order(&self, email: &str, amount: Decimal, status: OrderStatus) {
        let stamped = !status.is_pending();

        query(
            "INSERT INTO orders (customer_email, amount, currency, status, payment_id, processed_at) \
             VALUES ($1, $2, 'EUR', $3, \
                     CASE WHEN $4 THEN 'PAY_RAW_' || gen_random_uuid()::text END, \
                     CASE WHEN $4 THEN clock_timestamp() END)",
        )
        .bind(email)
        .bind(amount)
        .bind(status.as_str())
        .bind(stamped)
        .execute(self.db.pool())
        .await
        .expect("Failed to insert raw order");
    }
}

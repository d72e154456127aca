//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::orders::{
    data::NewOrder,
    records::{Order, OrderStatus, OrderUuid},
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const FINALIZE_ORDER_SQL: &str = include_str!("sql/finalize_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewOrder,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(order.external_order_id)
            .bind(order.customer_email)
            .bind(order.product_id)
            .bind(order.product_name)
            .bind(order.amount)
            .bind(order.currency)
            .bind(order.billing_interval)
            .bind(order.source)
            .fetch_one(&mut **tx)
            .await
    }

    /// Stamp a pending order as completed. Returns `None` when the order does not
    /// exist or has already left the pending state.
    pub(crate) async fn finalize_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        payment_id: &str,
    ) -> Result<Option<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(FINALIZE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(payment_id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: Option<u32>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_SQL)
            .bind(limit.map(i64::from))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            external_order_id: row.try_get("external_order_id")?,
            customer_email: row.try_get("customer_email")?,
            product_id: row.try_get("product_id")?,
            product_name: row.try_get("product_name")?,
            amount: row.try_get("amount")?,
            currency: row.try_get("currency")?,
            billing_interval: row.try_get("billing_interval")?,
            source: row.try_get("source")?,
            payment_id: row.try_get("payment_id")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            processed_at: row
                .try_get::<Option<SqlxTimestamp>, _>("processed_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

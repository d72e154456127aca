//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::orders::{
        data::{OrderSubmission, ProcessedOrder},
        errors::OrdersServiceError,
        payment::generate_payment_id,
        records::{Order, OrderUuid},
        repository::PgOrdersRepository,
        stats::OrderStats,
    },
};

/// Number of orders returned by a listing when the caller gives no limit.
pub const DEFAULT_ORDER_LIST_LIMIT: u32 = 100;

/// Currency applied to submissions that do not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

#[derive(Debug, Clone)]
pub struct OrdersSettings {
    pub default_currency: String,
}

impl Default for OrdersSettings {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    settings: OrdersSettings,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, settings: OrdersSettings) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            settings,
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn submit_order(
        &self,
        submission: OrderSubmission,
    ) -> Result<ProcessedOrder, OrdersServiceError> {
        let new_order = submission.validate(&self.settings.default_currency)?;

        let mut tx = self.db.begin().await?;

        let pending = self.repository.create_order(&mut tx, new_order).await?;

        debug!(order_uuid = %pending.uuid, "order stored as pending");

        let payment_id = generate_payment_id();

        let completed = self
            .repository
            .finalize_order(&mut tx, pending.uuid, &payment_id)
            .await?
            .ok_or(OrdersServiceError::NotFinalized)?;

        tx.commit().await?;

        info!(
            order_uuid = %completed.uuid,
            payment_id = %payment_id,
            "order processed"
        );

        Ok(ProcessedOrder {
            order_uuid: completed.uuid,
            payment_id,
            status: completed.status,
        })
    }

    async fn list_orders(&self, limit: u32) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, Some(limit)).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_all_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, None).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn order_stats(&self) -> Result<OrderStats, OrdersServiceError> {
        let orders = self.list_all_orders().await?;

        Ok(OrderStats::tally(&orders))
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        info!(order_uuid = %order, "order deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate a submission, store it and mark it processed with a fresh
    /// payment identifier. Both writes commit together or not at all.
    async fn submit_order(
        &self,
        submission: OrderSubmission,
    ) -> Result<ProcessedOrder, OrdersServiceError>;

    /// Most recent orders first, at most `limit` of them.
    async fn list_orders(&self, limit: u32) -> Result<Vec<Order>, OrdersServiceError>;

    /// Every stored order, most recent first.
    async fn list_all_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Tally the current order set.
    async fn order_stats(&self) -> Result<OrderStats, OrdersServiceError>;

    /// Deletes the order with the given UUID.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}

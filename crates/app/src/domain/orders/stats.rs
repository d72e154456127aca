//! Order statistics for the dashboard.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::orders::records::{Order, OrderStatus};

/// Aggregate counts and revenue derived from a set of orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    /// Orders that completed processing.
    pub active: u64,

    /// Orders marked as failed.
    pub canceled: u64,

    /// Orders still waiting to be processed.
    pub pending: u64,

    /// Every order, whatever its status.
    pub total: u64,

    /// Sum of completed order amounts, rounded half-up to two decimal places.
    pub total_revenue: Decimal,
}

impl OrderStats {
    /// Tally the given orders. Amounts are summed exactly and only rounded once
    /// at the end.
    pub fn tally<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut stats = orders
            .into_iter()
            .fold(Self::default(), |mut stats, order| {
                stats.total += 1;

                match order.status {
                    OrderStatus::Completed => {
                        stats.active += 1;
                        stats.total_revenue += order.amount;
                    }
                    OrderStatus::Failed => stats.canceled += 1,
                    OrderStatus::Pending => stats.pending += 1,
                }

                stats
            });

        stats.total_revenue = stats
            .total_revenue
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        stats
    }
}

//! Order Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Processing state of an order.
///
/// An order is created `Pending` and leaves that state at most once. `Failed` is
/// part of the stored vocabulary but nothing in this crate produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Completed,
    Failed,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub external_order_id: Option<String>,
    pub customer_email: String,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub billing_interval: Option<String>,
    pub source: Option<String>,
    pub payment_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub processed_at: Option<Timestamp>,
}

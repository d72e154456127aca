//! Orders Data

use rust_decimal::Decimal;

use crate::domain::orders::{
    errors::OrdersServiceError,
    records::{OrderStatus, OrderUuid},
};

/// Message reported when a submission lacks an email or an amount.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields: customer_email, amount";

/// Order submission as received from a storefront integration.
///
/// Only `customer_email` and a non-zero `amount` are required. Nothing else is
/// checked: a negative amount, an unknown currency code or a malformed email are
/// all accepted as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSubmission {
    pub external_order_id: Option<String>,
    pub customer_email: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub billing_interval: Option<String>,
    pub source: Option<String>,
}

impl OrderSubmission {
    /// Check the required fields and build the pending order to store.
    ///
    /// Blank optional strings are treated as absent, and a blank currency falls
    /// back to `default_currency`.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::Validation`] when the email is missing or
    /// blank, or the amount is missing or zero.
    pub fn validate(self, default_currency: &str) -> Result<NewOrder, OrdersServiceError> {
        let customer_email = non_blank(self.customer_email)
            .ok_or(OrdersServiceError::Validation(MISSING_REQUIRED_FIELDS))?;

        let amount = self
            .amount
            .filter(|amount| !amount.is_zero())
            .ok_or(OrdersServiceError::Validation(MISSING_REQUIRED_FIELDS))?;

        Ok(NewOrder {
            external_order_id: non_blank(self.external_order_id),
            customer_email,
            product_id: non_blank(self.product_id),
            product_name: non_blank(self.product_name),
            amount,
            currency: non_blank(self.currency).unwrap_or_else(|| default_currency.to_string()),
            billing_interval: non_blank(self.billing_interval),
            source: non_blank(self.source),
        })
    }
}

/// New Order Data, always stored as pending.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub external_order_id: Option<String>,
    pub customer_email: String,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub billing_interval: Option<String>,
    pub source: Option<String>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedOrder {
    pub order_uuid: OrderUuid,
    pub payment_id: String,
    pub status: OrderStatus,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> OrderSubmission {
        OrderSubmission {
            customer_email: Some("a@b.com".to_string()),
            amount: Some(Decimal::new(1999, 2)),
            ..OrderSubmission::default()
        }
    }

    #[test]
    fn valid_submission_defaults_currency() -> Result<(), OrdersServiceError> {
        let order = submission().validate("EUR")?;

        assert_eq!(order.customer_email, "a@b.com");
        assert_eq!(order.amount, Decimal::new(1999, 2));
        assert_eq!(order.currency, "EUR");

        Ok(())
    }

    #[test]
    fn explicit_currency_wins_over_default() -> Result<(), OrdersServiceError> {
        let order = OrderSubmission {
            currency: Some("USD".to_string()),
            ..submission()
        }
        .validate("EUR")?;

        assert_eq!(order.currency, "USD");

        Ok(())
    }

    #[test]
    fn missing_email_is_rejected() {
        let result = OrderSubmission {
            customer_email: None,
            ..submission()
        }
        .validate("EUR");

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(MISSING_REQUIRED_FIELDS))),
            "expected Validation, got {result:?}"
        );
    }

    #[test]
    fn blank_email_is_rejected() {
        let result = OrderSubmission {
            customer_email: Some("   ".to_string()),
            ..submission()
        }
        .validate("EUR");

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }

    #[test]
    fn missing_amount_is_rejected() {
        let result = OrderSubmission {
            amount: None,
            ..submission()
        }
        .validate("EUR");

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }

    #[test]
    fn negative_amounts_pass_through() -> Result<(), OrdersServiceError> {
        let order = OrderSubmission {
            amount: Some(Decimal::new(-500, 2)),
            ..submission()
        }
        .validate("EUR")?;

        assert_eq!(order.amount, Decimal::new(-500, 2));

        Ok(())
    }

    #[test]
    fn zero_amount_is_rejected_as_missing() {
        for amount in [Decimal::ZERO, Decimal::new(0, 2)] {
            let result = OrderSubmission {
                amount: Some(amount),
                ..submission()
            }
            .validate("EUR");

            assert!(
                matches!(result, Err(OrdersServiceError::Validation(MISSING_REQUIRED_FIELDS))),
                "expected Validation for {amount}, got {result:?}"
            );
        }
    }

    #[test]
    fn blank_optionals_are_dropped() -> Result<(), OrdersServiceError> {
        let order = OrderSubmission {
            product_id: Some(String::new()),
            product_name: Some("Coffee Club".to_string()),
            billing_interval: Some(" ".to_string()),
            ..submission()
        }
        .validate("EUR")?;

        assert_eq!(order.product_id, None);
        assert_eq!(order.product_name.as_deref(), Some("Coffee Club"));
        assert_eq!(order.billing_interval, None);

        Ok(())
    }
}

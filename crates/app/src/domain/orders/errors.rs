//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// The submission is missing data the order cannot exist without.
    #[error("{0}")]
    Validation(&'static str),

    #[error("order not found")]
    NotFound,

    /// The store rejected the row against one of its constraints.
    #[error("invalid data")]
    InvalidData,

    /// The pending order could not be moved to its processed state.
    #[error("order could not be finalized")]
    NotFinalized,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

//! Orders

pub mod data;
pub mod errors;
pub mod payment;
pub mod records;
mod repository;
pub mod service;
pub mod stats;
pub mod subscriptions;

pub use errors::OrdersServiceError;
pub use service::*;

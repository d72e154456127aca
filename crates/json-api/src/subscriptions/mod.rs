//! Subscriptions
//!
//! Dashboard view over stored orders. Every route here requires an admin
//! session.

mod handlers;
pub(crate) mod models;

pub(crate) use handlers::*;

//! Authentication

mod handlers;
pub(crate) mod middleware;
pub(crate) mod models;

pub(crate) use handlers::*;

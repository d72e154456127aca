//! Order intake, payment stamping, and dashboard projections for Orderdesk.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod uuids;

#[cfg(test)]
mod test;

//! Orderdesk Domain Concerns

pub mod orders;

//! Shared fixtures for service tests that need a real `PostgreSQL`.

mod context;

pub(crate) use context::TestContext;

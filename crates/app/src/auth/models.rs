//! Auth data models.

use jiff::Timestamp;
use serde::Serialize;

/// Role carried by every session issued to the dashboard administrator.
pub const ADMIN_ROLE: &str = "admin";

/// The account a set of credentials resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// A verified bearer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub identity: AdminIdentity,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

/// Session issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: AdminSession,
}

//! Auth wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use orderdesk_app::auth::AdminIdentity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
}

impl From<AdminIdentity> for UserResponse {
    fn from(identity: AdminIdentity) -> Self {
        Self {
            id: identity.id,
            username: identity.username,
            role: identity.role,
        }
    }
}

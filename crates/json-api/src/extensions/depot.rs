//! Depot helper extensions.

use std::any::Any;

use orderdesk_app::auth::AdminSession;
use salvo::prelude::Depot;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_admin_session(&mut self, session: AdminSession);

    fn admin_session_or_401(&self) -> Result<&AdminSession, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn insert_admin_session(&mut self, session: AdminSession) {
        self.inject(session);
    }

    fn admin_session_or_401(&self) -> Result<&AdminSession, ApiError> {
        self.obtain::<AdminSession>()
            .map_err(|_ignored| ApiError::unauthorized("Access token required"))
    }
}

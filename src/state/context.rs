//! Session context shared by the screens of one running client

use crate::api::RegistrationApi;
use std::sync::Arc;

/// Everything a registration form needs from the surrounding application.
///
/// Built once at startup and handed to each wizard on construction.
#[derive(Clone)]
pub struct SessionContext {
    /// Tenant new volunteers are registered with
    pub tenant_id: i64,
    /// Backend the completed registration is sent to
    pub api: Arc<dyn RegistrationApi>,
}

impl SessionContext {
    pub fn new(tenant_id: i64, api: Arc<dyn RegistrationApi>) -> Self {
        Self { tenant_id, api }
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("tenant_id", &self.tenant_id)
            .finish_non_exhaustive()
    }
}

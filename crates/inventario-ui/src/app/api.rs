//! Login service context shared by every view.
//!
//! # Design
//! - Create exactly one REST client per app boot.
//! - Views see the `LoginService` seam, never the concrete client.

use crate::core::auth::LoginService;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared login service context for UI views.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton login service instance.
    pub(crate) login: Rc<dyn LoginService>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            login: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.login, &other.login)
    }
}

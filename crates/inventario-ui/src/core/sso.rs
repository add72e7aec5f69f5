//! Federated (SSO) login hand-off target.
//!
//! The backend on [`SSO_PORT`] builds the SAML request and forwards the
//! browser to the identity provider. Nothing comes back to this page; the
//! hand-off is a one-way navigation.

/// Backend port serving the SSO entrypoint.
pub const SSO_PORT: u16 = 3001;

/// Path of the SSO entrypoint.
pub const SSO_LOGIN_PATH: &str = "/api/sso/login";

/// One-way navigation command to the SSO entrypoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FederatedLogin {
    url: String,
}

impl FederatedLogin {
    /// Target derived from the hostname the UI was served from.
    #[must_use]
    pub fn for_host(hostname: &str) -> Self {
        let host = match hostname.trim() {
            "" => "localhost",
            host => host,
        };
        Self {
            url: format!("http://{host}:{SSO_PORT}{SSO_LOGIN_PATH}"),
        }
    }

    /// Absolute URL the browser is sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

//! Browser-side service clients: REST login and the SSO hand-off.

pub(crate) mod api;
pub(crate) mod sso;

//! SSO hand-off: full-page navigation to the backend SSO entrypoint.

use crate::core::sso::FederatedLogin;
use gloo::console;
use gloo::utils::window;

/// Navigate away to the SSO entrypoint for the current host.
///
/// Fire-and-forget: any in-flight request dies with the page. A failed
/// navigation is logged and the login form stays usable.
pub(crate) fn initiate() {
    let hostname = window().location().hostname().unwrap_or_default();
    let target = FederatedLogin::for_host(&hostname);
    if let Err(err) = navigate(&target) {
        console::error!("sso redirect failed", target.url(), err.to_string());
    }
}

fn navigate(target: &FederatedLogin) -> anyhow::Result<()> {
    window()
        .location()
        .set_href(target.url())
        .map_err(|err| anyhow::anyhow!("set location href: {err:?}"))
}

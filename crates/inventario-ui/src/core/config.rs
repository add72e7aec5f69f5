//! Host configuration for the shell.
//!
//! # Design
//! - Settings come from `data-*` attributes on the mount element, so the same
//!   bundle can be branded per deployment without a rebuild.
//! - Parsing is a pure function over an attribute lookup; the browser glue
//!   only supplies the lookup and the page location.
//! - Nothing here is persisted.

use crate::core::sso::SSO_PORT;

/// Default product name shown on the login card and sidebar header.
pub const DEFAULT_APP_TITLE: &str = "Inventário Pro";

/// Attribute toggling the SSO button.
pub const SSO_ENABLED_ATTR: &str = "data-sso-enabled";
/// Attribute overriding the product name.
pub const APP_TITLE_ATTR: &str = "data-app-title";
/// Attribute carrying a logo image reference (URL or data URI).
pub const APP_LOGO_ATTR: &str = "data-app-logo";
/// Attribute overriding the API base URL.
pub const API_BASE_URL_ATTR: &str = "data-api-base-url";

/// Origin parts of the page the UI was served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme with trailing colon, as reported by `location.protocol`.
    pub protocol: String,
    /// Hostname without port.
    pub hostname: String,
}

impl Default for PageLocation {
    fn default() -> Self {
        Self {
            protocol: "http:".to_string(),
            hostname: "localhost".to_string(),
        }
    }
}

impl PageLocation {
    /// Backend base URL on the API port of the same host.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        let protocol = if self.protocol.is_empty() {
            "http:"
        } else {
            self.protocol.as_str()
        };
        let host = if self.hostname.trim().is_empty() {
            "localhost"
        } else {
            self.hostname.as_str()
        };
        format!("{protocol}//{host}:{SSO_PORT}")
    }
}

/// Branding and feature flags supplied by the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Base URL for API calls, without trailing slash.
    pub api_base_url: String,
    /// Whether the SSO button is offered.
    pub sso_enabled: bool,
    /// Product name.
    pub app_title: String,
    /// Optional logo image reference.
    pub app_logo: Option<String>,
}

impl ShellConfig {
    /// Build the configuration from mount-element attributes.
    #[must_use]
    pub fn from_attributes<F>(lookup: F, location: &PageLocation) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            api_base_url: non_blank(API_BASE_URL_ATTR).map_or_else(
                || location.api_base_url(),
                |url| url.trim_end_matches('/').to_string(),
            ),
            sso_enabled: non_blank(SSO_ENABLED_ATTR).is_some_and(|value| parse_flag(&value)),
            app_title: non_blank(APP_TITLE_ATTR).unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
            app_logo: non_blank(APP_LOGO_ATTR),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::from_attributes(|_| None, &PageLocation::default())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn served_from(hostname: &str) -> PageLocation {
        PageLocation {
            protocol: "https:".to_string(),
            hostname: hostname.to_string(),
        }
    }

    #[test]
    fn defaults_without_attributes() {
        let config = ShellConfig::from_attributes(lookup(&[]), &served_from("inventario.lan"));
        assert_eq!(config.api_base_url, "https://inventario.lan:3001");
        assert!(!config.sso_enabled);
        assert_eq!(config.app_title, DEFAULT_APP_TITLE);
        assert_eq!(config.app_logo, None);
    }

    #[test]
    fn attributes_override_defaults() {
        let config = ShellConfig::from_attributes(
            lookup(&[
                (SSO_ENABLED_ATTR, "TRUE"),
                (APP_TITLE_ATTR, " Estoque TI "),
                (APP_LOGO_ATTR, "/logo.png"),
                (API_BASE_URL_ATTR, "https://api.example.com/"),
            ]),
            &served_from("inventario.lan"),
        );
        assert!(config.sso_enabled);
        assert_eq!(config.app_title, "Estoque TI");
        assert_eq!(config.app_logo.as_deref(), Some("/logo.png"));
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn blank_and_unknown_values_keep_defaults() {
        let config = ShellConfig::from_attributes(
            lookup(&[
                (SSO_ENABLED_ATTR, "maybe"),
                (APP_TITLE_ATTR, "   "),
                (APP_LOGO_ATTR, ""),
            ]),
            &served_from("inventario.lan"),
        );
        assert!(!config.sso_enabled);
        assert_eq!(config.app_title, DEFAULT_APP_TITLE);
        assert_eq!(config.app_logo, None);
    }

    #[test]
    fn default_config_targets_localhost() {
        assert_eq!(ShellConfig::default().api_base_url, "http://localhost:3001");
    }
}

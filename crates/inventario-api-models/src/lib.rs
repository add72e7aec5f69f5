#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Inventario API.
//!
//! The web UI decodes login responses into these types and uses [`Page`] as
//! the closed set of navigable sections. Wire names follow the backend, which
//! labels pages with their Portuguese display names.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Navigable application sections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    /// Overview dashboard.
    #[serde(rename = "Dashboard")]
    Dashboard,
    /// Equipment inventory listing.
    #[serde(rename = "Inventário de Equipamentos")]
    EquipmentInventory,
    /// Software license control.
    #[serde(rename = "Controle de Licenças")]
    LicenseControl,
    /// User and permission administration.
    #[serde(rename = "Usuários e Permissões")]
    UsersAndPermissions,
    /// Application settings.
    #[serde(rename = "Configurações")]
    Settings,
    /// Audit trail.
    #[serde(rename = "Auditoria")]
    Audit,
}

impl Page {
    /// Every page in canonical menu order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Dashboard,
            Self::EquipmentInventory,
            Self::LicenseControl,
            Self::UsersAndPermissions,
            Self::Settings,
            Self::Audit,
        ]
    }

    /// Backend wire name, also used as the default display label.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::EquipmentInventory => "Inventário de Equipamentos",
            Self::LicenseControl => "Controle de Licenças",
            Self::UsersAndPermissions => "Usuários e Permissões",
            Self::Settings => "Configurações",
            Self::Audit => "Auditoria",
        }
    }

    /// Stable machine key used for translation lookups and DOM ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::EquipmentInventory => "equipment_inventory",
            Self::LicenseControl => "license_control",
            Self::UsersAndPermissions => "users_permissions",
            Self::Settings => "settings",
            Self::Audit => "audit",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Role assigned to an authenticated user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Regular operator.
    User,
}

impl UserRole {
    /// Default page visibility for the role, in menu order.
    ///
    /// The navigation shell never widens this set; it only renders what the
    /// host hands it.
    #[must_use]
    pub fn granted_pages(self) -> Vec<Page> {
        match self {
            Self::Admin => Page::all().to_vec(),
            Self::User => vec![
                Page::Dashboard,
                Page::EquipmentInventory,
                Page::LicenseControl,
            ],
        }
    }
}

/// Authenticated user record returned by `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Optional friendly name for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Role used by the host to filter pages.
    pub role: UserRole,
}

impl User {
    /// Name shown in the shell: display name when present, else the username.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Body of `POST /api/login`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain-text password sent over the login call only.
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Error payload returned by the API on non-success responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable failure reason, when the server provides one.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Server-provided reason with blank values treated as absent.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(ToString::to_string)
    }
}

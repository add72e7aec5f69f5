//! Environment helpers for the app shell.

use crate::core::config::{PageLocation, ShellConfig};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::utils::{document, window};

const DEFAULT_WIDTH: f64 = 1280.0;

pub(crate) fn load_locale() -> LocaleCode {
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Read branding and flags from the `#root` mount element.
pub(crate) fn load_config() -> ShellConfig {
    let location = window().location();
    let page = PageLocation {
        protocol: location.protocol().unwrap_or_default(),
        hostname: location.hostname().unwrap_or_default(),
    };
    let root = document().get_element_by_id("root");
    ShellConfig::from_attributes(
        |name| root.as_ref().and_then(|el| el.get_attribute(name)),
        &page,
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn current_width() -> u16 {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(DEFAULT_WIDTH);
    width.clamp(0.0, f64::from(u16::MAX)) as u16
}

//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod breakpoints;
pub mod config;
pub mod icons;
pub mod navigation;
pub mod sso;
pub mod store;

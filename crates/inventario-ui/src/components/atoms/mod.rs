//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod icons;

pub(crate) use empty_state::EmptyState;

//! Placeholder panel for pages whose content is not mounted yet.
//!
//! # Design
//! - Keep copy entirely prop-driven.
//! - Render the description only when provided.

use crate::components::atoms::icons::Icon;
use crate::core::icons::IconName;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub(crate) icon: IconName,
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) description: Option<AttrValue>,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <section class="empty-state" data-testid="page-content">
            <Icon name={props.icon} size={40} class="muted" />
            <h3>{props.title.clone()}</h3>
            {props.description.clone().map(|text| html! {
                <p class="muted">{text}</p>
            }).unwrap_or_default()}
        </section>
    }
}

//! App root: boots configuration, tracks the viewport, and switches between
//! the login screen and the navigation shell.

pub(crate) mod api;
mod preferences;

use crate::app::api::ApiCtx;
use crate::components::atoms::EmptyState;
use crate::components::login::LoginView;
use crate::components::shell::AppShell;
use crate::components::sidebar::page_label;
use crate::core::breakpoints::Breakpoint;
use crate::core::icons::page_icon;
use crate::core::navigation::Selection;
use crate::core::store::AppStore;
use crate::i18n::TranslationBundle;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use inventario_api_models::{Page, User};
use preferences::{current_width, load_config, load_locale};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(InventarioApp)]
fn inventario_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let bundle = use_memo(|_| TranslationBundle::new(load_locale()), ());
    let api_ctx = {
        let base_url = config.api_base_url.clone();
        use_memo(move |_| ApiCtx::new(base_url), ())
    };
    let width = use_state(current_width);
    let dispatch = Dispatch::<AppStore>::new();
    let session = use_selector(|store: &AppStore| store.session.clone());

    {
        let width = width.clone();
        use_effect(move || {
            apply_breakpoint(Breakpoint::for_width(*width));
            let handler = EventListener::new(&window(), "resize", {
                let width = width.clone();
                move |_event| {
                    let next = current_width();
                    if next != *width {
                        width.set(next);
                    }
                }
            });
            move || drop(handler)
        });
    }

    let on_login_success = {
        let dispatch = dispatch.clone();
        let viewport_width = *width;
        Callback::from(move |user: User| {
            let mut outcome = Ok(());
            dispatch.reduce_mut(|store| outcome = store.sign_in(user, viewport_width));
            if let Err(err) = outcome {
                console::error!("sign-in rejected by navigation", err.to_string());
            }
        })
    };
    let on_select = {
        let dispatch = dispatch.clone();
        let viewport_width = *width;
        Callback::from(move |page: Page| {
            let mut selection = Selection::Ignored;
            dispatch.reduce_mut(|store| selection = store.select_page(page, viewport_width));
            if selection == Selection::Ignored {
                console::warn!("ignored navigation to page not granted", page.wire_name());
            }
        })
    };
    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |is_open: bool| {
            dispatch.reduce_mut(|store| store.set_sidebar_open(is_open));
        })
    };
    let on_sign_out = Callback::from(move |()| dispatch.reduce_mut(AppStore::sign_out));

    let app_title = AttrValue::from(config.app_title.clone());
    let app_logo = config.app_logo.clone().map(AttrValue::from);
    let body = match &*session {
        Some(signed_in) => {
            let active = signed_in.navigation.active_page();
            html! {
                <AppShell
                    user={signed_in.user.clone()}
                    navigation={signed_in.navigation.clone()}
                    breakpoint={Breakpoint::for_width(*width)}
                    on_select={on_select}
                    on_toggle={on_toggle}
                    on_sign_out={on_sign_out}
                    app_title={app_title}
                    app_logo={app_logo}
                >
                    <EmptyState
                        icon={page_icon(active)}
                        title={page_label(&bundle, active)}
                        description={bundle.text("shell.page_empty", "")}
                    />
                </AppShell>
            }
        }
        None => html! {
            <LoginView
                on_login_success={on_login_success}
                sso_enabled={config.sso_enabled}
                app_title={app_title}
                app_logo={app_logo}
            />
        },
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                {body}
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn apply_breakpoint(bp: Breakpoint) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        let _ = body.set_attribute("data-bp", bp.name());
    }
}

/// Entrypoint for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<InventarioApp>::with_root(root).render();
    } else {
        yew::Renderer::<InventarioApp>::new().render();
    }
}

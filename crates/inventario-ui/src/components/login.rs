//! Login card: credentials form, inline failure alert, optional SSO button.

use crate::app::api::ApiCtx;
use crate::components::atoms::icons::Icon;
use crate::core::auth::{AuthSession, SubmitOutcome};
use crate::core::config::ShellConfig;
use crate::core::icons::IconName;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::sso;
use inventario_api_models::User;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginProps {
    pub(crate) on_login_success: Callback<User>,
    pub(crate) sso_enabled: bool,
    pub(crate) app_title: AttrValue,
    #[prop_or_default]
    pub(crate) app_logo: Option<AttrValue>,
}

#[function_component(LoginView)]
pub(crate) fn login_view(props: &LoginProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api = use_context::<ApiCtx>();
    let session = use_memo(
        move |_| {
            let ctx = api.unwrap_or_else(|| ApiCtx::new(ShellConfig::default().api_base_url));
            AuthSession::new(ctx.login)
        },
        (),
    );
    let refresh = use_force_update();
    let form = session.form();
    let loading = form.is_loading();

    let on_username = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                session.set_username(input.value());
                refresh.force_update();
            }
        })
    };
    let on_password = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                session.set_password(input.value());
                refresh.force_update();
            }
        })
    };
    let on_submit = {
        let session = session.clone();
        let refresh = refresh.clone();
        let on_success = props.on_login_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if session.is_loading() {
                return;
            }
            let session = session.clone();
            let refresh = refresh.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                let pending = session.submit();
                refresh.force_update();
                let outcome = pending.await;
                refresh.force_update();
                if let SubmitOutcome::Succeeded(user) = outcome {
                    on_success.emit(user);
                }
            });
        })
    };
    let on_sso = Callback::from(|_: MouseEvent| sso::initiate());

    let logo = props.app_logo.as_ref().map_or_else(
        || html! { <Icon name={IconName::ShieldCheck} size={48} class="brand-mark" /> },
        |src| html! { <img src={src.clone()} alt={t("login.logo_alt")} class="brand-logo" /> },
    );
    let alert = form.failure().map_or_else(Html::default, |failure| {
        html! { <div class="alert error" role="alert">{failure.message(&bundle)}</div> }
    });
    let sso_block = if props.sso_enabled {
        html! {
            <>
                <div class="divider"><span>{t("login.or")}</span></div>
                <button type="button" class="outline wide" onclick={on_sso}>
                    <Icon name={IconName::KeyRound} size={18} />
                    {t("login.sso")}
                </button>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="login-screen">
            <div class="card login-card">
                <header class="login-header">
                    {logo}
                    <h1>{props.app_title.clone()}</h1>
                    <p class="muted">{t("login.subtitle")}</p>
                </header>
                {alert}
                <form onsubmit={on_submit}>
                    <label class="stack" for="username">
                        <span>{t("login.username")}</span>
                        <input
                            id="username"
                            data-testid="username-input"
                            type="text"
                            autocomplete="username"
                            value={form.username.clone()}
                            oninput={on_username}
                            placeholder={t("login.username_placeholder")}
                        />
                    </label>
                    <label class="stack" for="password">
                        <span>{t("login.password")}</span>
                        <input
                            id="password"
                            data-testid="password-input"
                            type="password"
                            autocomplete="current-password"
                            value={form.password.clone()}
                            oninput={on_password}
                            placeholder={t("login.password_placeholder")}
                        />
                    </label>
                    <div class="actions stack">
                        <button type="submit" data-testid="login-button" class="solid wide" disabled={loading}>
                            {if loading { t("login.submitting") } else { t("login.submit") }}
                        </button>
                        {sso_block}
                    </div>
                </form>
            </div>
        </div>
    }
}

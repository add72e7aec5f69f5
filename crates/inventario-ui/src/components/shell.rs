use crate::components::atoms::icons::Icon;
use crate::components::sidebar::{Sidebar, page_label};
use crate::core::breakpoints::Breakpoint;
use crate::core::icons::IconName;
use crate::core::navigation::NavigationShell;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use inventario_api_models::{Page, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) user: User,
    pub(crate) navigation: NavigationShell,
    pub(crate) breakpoint: Breakpoint,
    pub(crate) on_select: Callback<Page>,
    pub(crate) on_toggle: Callback<bool>,
    pub(crate) on_sign_out: Callback<()>,
    pub(crate) app_title: AttrValue,
    #[prop_or_default]
    pub(crate) app_logo: Option<AttrValue>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let nav = &props.navigation;
    let open_nav = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(true))
    };
    let sign_out = {
        let on_sign_out = props.on_sign_out.clone();
        Callback::from(move |_: MouseEvent| on_sign_out.emit(()))
    };

    html! {
        <div class={classes!("app-shell", format!("bp-{}", props.breakpoint.name()))}>
            <Sidebar
                menu={nav.menu()}
                is_open={nav.is_open()}
                narrow={props.breakpoint.is_drawer()}
                on_select={props.on_select.clone()}
                on_toggle={props.on_toggle.clone()}
                app_title={props.app_title.clone()}
                app_logo={props.app_logo.clone()}
            />
            <div class="main">
                <header class="topbar">
                    {if nav.is_open() {
                        html! {}
                    } else {
                        html! {
                            <button
                                class="ghost mobile-only"
                                type="button"
                                aria-label={bundle.text("shell.open", "")}
                                onclick={open_nav}
                            >
                                <Icon name={IconName::Menu} size={24} />
                            </button>
                        }
                    }}
                    <h2 class="page-title">{page_label(&bundle, nav.active_page())}</h2>
                    <div class="top-actions">
                        <Icon name={IconName::User} size={16} />
                        <span class="muted" title={bundle.text("shell.signed_in_as", "")}>
                            {props.user.label().to_string()}
                        </span>
                        <button
                            class="ghost"
                            type="button"
                            aria-label={bundle.text("shell.sign_out", "")}
                            onclick={sign_out}
                        >
                            <Icon name={IconName::LogOut} size={18} />
                        </button>
                    </div>
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

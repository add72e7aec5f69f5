//! Collapsible navigation sidebar.
//!
//! Open: icon + label rows and a header with logo and title. Collapsed: icon
//! rows with the label as tooltip. On narrow layouts the open sidebar floats
//! over an overlay that closes it when clicked.

use crate::components::atoms::icons::Icon;
use crate::core::icons::IconName;
use crate::core::navigation::MenuEntry;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use inventario_api_models::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SidebarProps {
    pub(crate) menu: Vec<MenuEntry>,
    pub(crate) is_open: bool,
    pub(crate) narrow: bool,
    pub(crate) on_select: Callback<Page>,
    pub(crate) on_toggle: Callback<bool>,
    pub(crate) app_title: AttrValue,
    #[prop_or_default]
    pub(crate) app_logo: Option<AttrValue>,
}

#[function_component(Sidebar)]
pub(crate) fn sidebar(props: &SidebarProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let close = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(false))
    };
    let open = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(true))
    };

    let overlay = if props.is_open && props.narrow {
        html! { <div class="sidebar-overlay" onclick={close.clone()} /> }
    } else {
        html! {}
    };
    let mark = props.app_logo.as_ref().map_or_else(
        || html! { <Icon name={IconName::ShieldCheck} size={32} class="brand-mark" /> },
        |src| html! { <img src={src.clone()} alt="Logo" class="brand-logo" /> },
    );
    let header = if props.is_open {
        html! {
            <div class="brand">
                {mark}
                <h1 title={props.app_title.clone()}>{props.app_title.clone()}</h1>
            </div>
        }
    } else {
        mark
    };

    html! {
        <>
            {overlay}
            <aside class={classes!("sidebar", if props.is_open { "open" } else { "closed" })}>
                <div class="sidebar-header">
                    {header}
                    <button
                        class="ghost mobile-only close"
                        type="button"
                        aria-label={bundle.text("shell.close", "")}
                        onclick={close.clone()}
                    >
                        <Icon name={IconName::X} size={24} />
                    </button>
                </div>
                <nav aria-label={bundle.text("shell.navigation", "")}>
                    <ul>
                        {for props.menu.iter().map(|entry| nav_item(*entry, &bundle, &props.on_select))}
                    </ul>
                </nav>
                <div class="sidebar-footer">
                    {if props.is_open {
                        html! {}
                    } else {
                        html! {
                            <button
                                class="ghost expand"
                                type="button"
                                aria-label={bundle.text("shell.expand", "")}
                                onclick={open}
                            >
                                <Icon name={IconName::ChevronsRight} size={20} />
                            </button>
                        }
                    }}
                </div>
                {if props.is_open {
                    html! {
                        <button
                            class="ghost desktop-only collapse"
                            type="button"
                            aria-label={bundle.text("shell.collapse", "")}
                            onclick={close}
                        >
                            <Icon name={IconName::ChevronLeft} size={16} />
                        </button>
                    }
                } else {
                    html! {}
                }}
            </aside>
        </>
    }
}

fn nav_item(entry: MenuEntry, bundle: &TranslationBundle, on_select: &Callback<Page>) -> Html {
    let label = page_label(bundle, entry.page);
    let onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(entry.page))
    };
    let classes = classes!(
        "nav-item",
        entry.active.then_some("active"),
        (!entry.show_label).then_some("icon-only")
    );
    let tooltip = (!entry.show_label).then(|| label.clone());
    html! {
        <li key={entry.page.key()}>
            <button
                type="button"
                class={classes}
                title={tooltip}
                aria-current={entry.active.then_some("page")}
                onclick={onclick}
            >
                <Icon name={entry.icon} size={24} />
                {if entry.show_label {
                    html! { <span class="label">{label}</span> }
                } else {
                    html! {}
                }}
            </button>
        </li>
    }
}

pub(crate) fn page_label(bundle: &TranslationBundle, page: Page) -> String {
    bundle.text(&format!("nav.{}", page.key()), page.wire_name())
}

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use common::{
    section::{Section, scroll_to_section},
    tags::IconTag,
    theme::{Theme, ThemeState},
};

use crate::{
    Route,
    common::{
        dom::{DocumentSurface, set_root_class, use_scroll_tracker},
        storage::LocalPreference,
    },
    components::{footer::Footer, icon::Icon},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: Section,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let section = props.section;

    rsx! {
        button {
            class: "nav-link",
            onclick: move |_| {
                scroll_to_section(&DocumentSurface, section);
            },
            "{section.label()}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();

    let icon = match theme().get() {
        Theme::Dark => IconTag::Sun,
        Theme::Light => IconTag::Moon,
    };

    rsx! {
        button {
            class: "theme-toggle",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                let next = theme.write().toggle();
                next.store();
                debug!({ theme = %next }, "toggled theme");
            },
            Icon { tag: icon }
        }
    }
}

// top bar
//
// transparent over the hero until the page scrolls past the threshold.  the section
// buttons only make sense on the home page; the detail view gets the brand and the
// theme toggle
#[component]
fn NavBarInner() -> Element {
    let scrolled = use_scroll_tracker();
    let route: Route = use_route();

    let on_home = matches!(route, Route::Home {});
    let class = if scrolled() || !on_home {
        "app-header scrolled"
    } else {
        "app-header"
    };

    let owner = use_context::<common::config::PortfolioConfig>().site.owner;

    rsx! {
        header { class: "{class}",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {},
                        Icon { tag: IconTag::Code, class: "logo-mark" }
                        span { "{owner}" }
                    }
                }

                div { class: "nav-actions",
                    if on_home {
                        nav { class: "nav-links",
                            for section in Section::NAV {
                                NavBarButton { key: "{section.anchor()}", section }
                            }
                        }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}

// the layout every route renders inside of
#[component]
pub fn Shell() -> Element {
    let theme = use_context::<Signal<ThemeState>>();

    use_effect(move || set_root_class(theme().get().css_class()));

    rsx! {
        div { class: "app",
            NavBarInner {}
            main { class: "page-content", Outlet::<Route> {} }
            Footer {}
        }
    }
}

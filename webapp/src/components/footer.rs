use dioxus::prelude::*;

use common::{
    config::PortfolioConfig,
    profile::{FOOTER_LINE, SOCIAL_LINKS},
    tags::IconTag,
};

use crate::components::icon::Icon;

#[component]
pub fn Footer() -> Element {
    let owner = use_context::<PortfolioConfig>().site.owner;

    rsx! {
        footer { class: "app-footer",
            div { class: "container footer-content",
                div { class: "footer-brand",
                    Icon { tag: IconTag::Code, class: "logo-mark" }
                    span { "{owner}" }
                }
                p { class: "footer-line", "{FOOTER_LINE}" }
                div { class: "footer-social",
                    for link in SOCIAL_LINKS {
                        a {
                            key: "{link.label}",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{link.label}",
                            Icon { tag: link.icon }
                        }
                    }
                }
            }
        }
    }
}

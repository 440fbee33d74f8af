use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, error};

use common::{
    catalog::{Catalog, Project},
    config::PortfolioConfig,
    detail::{DetailState, DetailTab, Resolution, resolve_slug},
    share::{COPIED_MESSAGE, TOAST_DURATION_MS, share_project},
    slug::project_path,
    tags::IconTag,
    theme::ThemeState,
};

use crate::{
    Route,
    common::{colors::TagColor, dom::window_origin},
    components::icon::Icon,
    project::share::BrowserShare,
};

#[derive(Clone, PartialEq, Props)]
struct TabProps {
    project: Project,
    playing: Signal<bool>,
}

#[component]
fn OverviewTab(props: TabProps) -> Element {
    let project = props.project;
    let mut playing = props.playing;

    rsx! {
        div { class: "detail-overview",
            div { class: "detail-hero",
                match (&project.video_url, playing()) {
                    (Some(video), true) => rsx! {
                        iframe { src: "{video}", allowfullscreen: true }
                    },
                    (Some(_), false) => rsx! {
                        button {
                            class: "play-button",
                            "aria-label": "Play video",
                            onclick: move |_| playing.set(true),
                            Icon { tag: IconTag::Play }
                        }
                    },
                    (None, _) => rsx! {
                        img { src: "{project.hero_image}", alt: "{project.title}" }
                    },
                }
            }

            div { class: "detail-columns",
                div {
                    h2 { "Project Overview" }
                    p { class: "detail-long", "{project.long_description}" }
                    ul { class: "detail-facts",
                        li {
                            Icon { tag: IconTag::Calendar }
                            "Completed: {project.completion_date}"
                        }
                        li {
                            Icon { tag: IconTag::Clock }
                            "Duration: {project.duration}"
                        }
                        li {
                            Icon { tag: IconTag::Tag }
                            "Category: {project.category}"
                        }
                    }
                }
                div {
                    h2 { "Key Highlights" }
                    ul { class: "detail-highlights",
                        for (index , highlight) in project.highlights.iter().enumerate() {
                            li { key: "{index}", "{highlight}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturesTab(props: TabProps) -> Element {
    rsx! {
        div { class: "detail-grid two",
            for (index , feature) in props.project.features.iter().enumerate() {
                div { key: "{index}", class: "detail-tile",
                    div { class: "icon-badge", Icon { tag: feature.icon } }
                    h3 { "{feature.title}" }
                    p { "{feature.description}" }
                }
            }
        }
    }
}

#[component]
fn TechTab(props: TabProps) -> Element {
    rsx! {
        div { class: "detail-grid three",
            for (index , tech) in props.project.tech_stack.iter().enumerate() {
                div { key: "{index}", class: "detail-tile",
                    div { class: "detail-tile-header",
                        div { class: "icon-badge small", Icon { tag: tech.icon } }
                        h3 { "{tech.name}" }
                    }
                    p { "{tech.description}" }
                }
            }
        }
    }
}

#[component]
fn GalleryTab(props: TabProps) -> Element {
    let title = props.project.title.clone();
    let shots = props.project.gallery.iter().enumerate().map(|(i, img)| (i + 1, img));

    rsx! {
        div { class: "detail-grid three",
            for (number , image) in shots {
                div { key: "{number}", class: "detail-shot",
                    img { src: "{image}", alt: "{title} screenshot {number}" }
                }
            }
        }
    }
}

// project detail
//
// the route parameter is the only source of truth for which project is shown.  the
// effect keeps the tab state in step with it and sends unknown slugs back home
#[component]
pub fn ProjectDetail(slug: String) -> Element {
    let catalog = use_context::<Rc<Catalog>>();
    let config = use_context::<PortfolioConfig>();
    let theme = use_context::<Signal<ThemeState>>();

    let mut state = use_signal(DetailState::default);
    let mut playing = use_signal(|| false);

    // the toast shown most recently, so that an older timer cannot hide a newer toast
    let mut toast = use_signal(|| Option::<u32>::None);
    let mut toasts = use_signal(|| 0u32);

    let lookup = catalog.clone();
    use_effect(use_reactive((&slug,), move |(slug,)| {
        match state.write().sync(&lookup, &project_path(&slug)) {
            Resolution::Detail(project) => {
                debug!({ project = %project.title }, "showing project");
                playing.set(false);
            }
            Resolution::Home | Resolution::Redirect => {
                debug!({ slug = %slug }, "no project for slug, redirecting");
                navigator().replace(Route::Home {});
            }
        }
    }));

    let Some(project) = resolve_slug(&catalog, &slug).cloned() else {
        return rsx! {};
    };

    let active = state.read().active_tab();
    let accent = project.color.accent_style(theme().get());
    let origin = config
        .site
        .origin
        .clone()
        .or_else(window_origin)
        .unwrap_or_default();

    let shared = project.clone();

    rsx! {
        div { class: "detail-page container accent", style: "{accent}",
            div { class: "detail-actions",
                button {
                    class: "back-button",
                    onclick: move |_| {
                        let path = state.write().close();
                        match path.parse::<Route>() {
                            Ok(route) => {
                                navigator().push(route);
                            }
                            Err(err) => error!("failed to parse route {path}: {err}"),
                        }
                    },
                    Icon { tag: IconTag::ArrowLeft }
                    span { "Back to Projects" }
                }
                div { class: "detail-actions-right",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let project = shared.clone();
                            let origin = origin.clone();
                            spawn(async move {
                                let outcome = share_project(&BrowserShare::new(), &origin, &project)
                                    .await;
                                debug!({ outcome = ?outcome }, "shared project");

                                if outcome.shows_toast() {
                                    let id = toasts() + 1;
                                    toasts.set(id);
                                    toast.set(Some(id));

                                    Timeout::new(
                                            TOAST_DURATION_MS,
                                            move || {
                                                if let Ok(mut toast) = toast.try_write() {
                                                    if *toast == Some(id) {
                                                        *toast = None;
                                                    }
                                                }
                                            },
                                        )
                                        .forget();
                                }
                            });
                        },
                        Icon { tag: IconTag::Share }
                        span { "Share" }
                    }
                    if let Some(link) = project.link.clone() {
                        a {
                            class: "btn btn-accent",
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { tag: IconTag::ExternalLink }
                            span { "Visit Project" }
                        }
                    }
                }
            }

            if toast().is_some() {
                div { class: "toast", role: "status", "{COPIED_MESSAGE}" }
            }

            div { class: "detail-header",
                div { class: "detail-title",
                    div { class: "icon-badge", Icon { tag: project.icon } }
                    h1 { "{project.title}" }
                }
                p { class: "detail-description", "{project.description}" }
                div { class: "chip-row",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "chip solid", "{tech}" }
                    }
                }
            }

            div { class: "detail-tabs", role: "tablist",
                for tab in DetailTab::ALL {
                    button {
                        key: "{tab.id()}",
                        class: if tab == active { "detail-tab active" } else { "detail-tab" },
                        role: "tab",
                        onclick: move |_| state.write().set_active_tab(tab),
                        Icon { tag: tab.icon() }
                        span { "{tab.label()}" }
                    }
                }
            }

            div { class: "detail-content",
                match active {
                    DetailTab::Overview => rsx! {
                        OverviewTab { project: project.clone(), playing }
                    },
                    DetailTab::Features => rsx! {
                        FeaturesTab { project: project.clone(), playing }
                    },
                    DetailTab::Tech => rsx! {
                        TechTab { project: project.clone(), playing }
                    },
                    DetailTab::Gallery => rsx! {
                        GalleryTab { project: project.clone(), playing }
                    },
                }
            }
        }
    }
}

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::error;

use common::{
    catalog::{Catalog, Project, ProjectStatus},
    detail::select,
    tags::IconTag,
    theme::ThemeState,
};

use crate::{Route, common::colors::TagColor, components::icon::Icon};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

// a completed project opens its detail view; upcoming ones are display only
#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let theme = use_context::<Signal<ThemeState>>();

    let accent = project.color.accent_style(theme().get());
    let completed = project.is_completed();
    let path = select(&project);

    rsx! {
        div {
            class: if completed { "project-card accent clickable" } else { "project-card accent" },
            style: "{accent}",
            onclick: move |_| {
                if !completed {
                    return;
                }
                match path.parse::<Route>() {
                    Ok(route) => {
                        navigator().push(route);
                    }
                    Err(err) => error!("failed to parse route {path}: {err}"),
                }
            },
            div { class: "project-card-header",
                div { class: "icon-badge", Icon { tag: project.icon } }
                if completed {
                    Icon { tag: IconTag::ExternalLink, class: "project-card-link" }
                } else {
                    span { class: "project-card-soon", "Coming Soon" }
                }
            }
            h3 { class: "project-card-title", "{project.title}" }
            p { class: "project-card-description", "{project.description}" }
            div { class: "chip-row",
                for tech in project.technologies.iter() {
                    span { key: "{tech}", class: "chip", "{tech}" }
                }
            }
            if !project.card_tags.is_empty() {
                div { class: "project-card-tags",
                    for (icon , label) in project.card_tags.iter().cloned() {
                        span { key: "{label}",
                            Icon { tag: icon }
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProjectGridProps {
    status: ProjectStatus,
}

#[component]
pub fn ProjectGrid(props: ProjectGridProps) -> Element {
    let catalog = use_context::<Rc<Catalog>>();

    let projects = match props.status {
        ProjectStatus::Completed => catalog.completed().cloned().collect::<Vec<_>>(),
        ProjectStatus::Upcoming => catalog.upcoming().cloned().collect::<Vec<_>>(),
    };

    rsx! {
        div { class: "project-grid",
            for project in projects {
                ProjectCard { key: "{project.title}", project }
            }
        }
    }
}

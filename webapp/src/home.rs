use dioxus::prelude::*;

use common::{
    catalog::ProjectStatus,
    profile::*,
    section::{Section, scroll_to_section},
    tags::IconTag,
    theme::ThemeState,
};

use crate::{
    common::{colors::TagColor, dom::DocumentSurface},
    components::{activity::ActivityCalendar, contact::MessageForm, icon::Icon},
    project::ProjectGrid,
};

#[derive(Clone, PartialEq, Props)]
struct SectionHeadingProps {
    title: &'static str,
    subtitle: Option<&'static str>,
}

#[component]
fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { class: "section-title", "{props.title}" }
            div { class: "section-rule" }
            if let Some(subtitle) = props.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct BulletListProps {
    title: &'static str,
    bullets: &'static [Bullet],
}

#[component]
fn BulletList(props: BulletListProps) -> Element {
    let theme = use_context::<Signal<ThemeState>>();

    rsx! {
        div { class: "panel",
            h4 { "{props.title}" }
            div { class: "bullet-list",
                for bullet in props.bullets {
                    div {
                        key: "{bullet.text}",
                        class: "bullet accent",
                        style: bullet.color.accent_style(theme().get()),
                        span { class: "bullet-dot" }
                        span { "{bullet.text}" }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SkillGroupsProps {
    groups: &'static [SkillGroup],
}

#[component]
fn SkillGroups(props: SkillGroupsProps) -> Element {
    let theme = use_context::<Signal<ThemeState>>();

    rsx! {
        for group in props.groups {
            div {
                key: "{group.title}",
                class: "skill-card accent",
                style: group.color.accent_style(theme().get()),
                div { class: "icon-badge", Icon { tag: group.icon } }
                h3 { "{group.title}" }
                ul {
                    for skill in group.skills {
                        li { key: "{skill}",
                            span { class: "bullet-dot" }
                            "{skill}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title",
                    "{HEADLINE}"
                    span { class: "hero-accent", "{HEADLINE_ACCENT}" }
                }
                p { class: "hero-subtitle", "{TAGLINE}" }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-accent btn-lg",
                        onclick: move |_| {
                            scroll_to_section(&DocumentSurface, Section::Portfolio);
                        },
                        "View My Work"
                    }
                    button {
                        class: "btn btn-outline btn-lg",
                        onclick: move |_| {
                            scroll_to_section(&DocumentSurface, Section::Contact);
                        },
                        "Get In Touch"
                    }
                }
            }
            button {
                class: "hero-scroll",
                "aria-label": "Scroll to about",
                onclick: move |_| {
                    scroll_to_section(&DocumentSurface, Section::About);
                },
                Icon { tag: IconTag::ChevronDown }
            }
        }
    }
}

#[component]
fn About() -> Element {
    let theme = use_context::<Signal<ThemeState>>();

    rsx! {
        section { id: Section::About.anchor(), class: "page-section",
            div { class: "container",
                SectionHeading { title: "About Me" }
                div { class: "two-column",
                    div {
                        h3 { class: "lead-title", "{ABOUT_TITLE}" }
                        for paragraph in ABOUT_PARAGRAPHS {
                            p { key: "{paragraph}", class: "lead", "{paragraph}" }
                        }
                        div { class: "badge-row",
                            for badge in ABOUT_BADGES {
                                div {
                                    key: "{badge.title}",
                                    class: "badge accent",
                                    style: badge.color.accent_style(theme().get()),
                                    Icon { tag: badge.icon }
                                    h4 { "{badge.title}" }
                                    p { "{badge.caption}" }
                                }
                            }
                        }
                    }
                    BulletList { title: "Education & Expertise", bullets: EXPERTISE }
                }
            }
        }
    }
}

#[component]
fn Skills() -> Element {
    rsx! {
        section { id: Section::Skills.anchor(), class: "page-section alt",
            div { class: "container",
                SectionHeading { title: "Technical Skills" }
                div { class: "card-grid three", SkillGroups { groups: SKILL_GROUPS } }
            }
        }
    }
}

#[component]
fn AiExpertise() -> Element {
    rsx! {
        section { id: Section::Ai.anchor(), class: "page-section",
            div { class: "container",
                SectionHeading { title: "AI & Automation" }
                div { class: "two-column",
                    div {
                        h3 { class: "lead-title", "{AI_TITLE}" }
                        p { class: "lead", "{AI_SUMMARY}" }
                        div { class: "card-grid two", SkillGroups { groups: AI_GROUPS } }
                    }
                    BulletList { title: "AI Solutions", bullets: AI_SOLUTIONS }
                }
            }
        }
    }
}

#[component]
fn Services() -> Element {
    let theme = use_context::<Signal<ThemeState>>();

    rsx! {
        section { id: Section::Services.anchor(), class: "page-section alt",
            div { class: "container",
                SectionHeading { title: "Services" }
                div { class: "card-grid three",
                    for service in SERVICES {
                        div {
                            key: "{service.title}",
                            class: "service-card accent",
                            style: service.color.accent_style(theme().get()),
                            div { class: "icon-badge", Icon { tag: service.icon } }
                            h3 { "{service.title}" }
                            p { "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        section { id: Section::Contact.anchor(), class: "page-section contact-section",
            div { class: "container",
                SectionHeading { title: "Let's Work Together", subtitle: CONTACT_PITCH }
                div { class: "two-column",
                    div { class: "contact-info",
                        h3 { "Get In Touch" }
                        for channel in CONTACT_CHANNELS {
                            div { key: "{channel.label}", class: "contact-channel",
                                div { class: "icon-badge", Icon { tag: channel.icon } }
                                div {
                                    div { class: "contact-label", "{channel.label}" }
                                    match channel.href {
                                        Some(href) => rsx! {
                                            a { href: "{href}", "{channel.value}" }
                                        },
                                        None => rsx! {
                                            span { "{channel.value}" }
                                        },
                                    }
                                }
                            }
                        }
                        div { class: "contact-social",
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
                    MessageForm {}
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            Hero {}
            About {}
            Skills {}
            AiExpertise {}

            section { id: Section::Portfolio.anchor(), class: "page-section alt",
                div { class: "container",
                    SectionHeading { title: "Portfolio" }
                    ProjectGrid { status: ProjectStatus::Completed }
                }
            }

            section { class: "page-section",
                div { class: "container",
                    SectionHeading {
                        title: "Under Progress",
                        subtitle: "Exciting projects in development",
                    }
                    ProjectGrid { status: ProjectStatus::Upcoming }
                }
            }

            section { id: Section::Github.anchor(), class: "page-section alt",
                div { class: "container",
                    SectionHeading { title: "Days I Code" }
                    div { class: "calendar-panel",
                        ActivityCalendar {}
                        p { class: "calendar-caption",
                            "A visual representation of my coding journey and contributions"
                        }
                    }
                }
            }

            Services {}
            Contact {}
        }
    }
}

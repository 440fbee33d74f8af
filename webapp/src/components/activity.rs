use dioxus::prelude::*;
use tracing::error;

use api::activity::fetch_contributions;
use common::{
    calendar::{CalendarConfig, CalendarLayout},
    config::PortfolioConfig,
    theme::{Theme, ThemeState},
};

#[derive(Clone, Debug, PartialEq)]
struct Block {
    x: u32,
    y: u32,
    fill: String,
    date: String,
    count: u32,
}

fn blocks(calendar: &CalendarConfig, layout: &CalendarLayout, theme: Theme) -> Vec<Block> {
    layout
        .weeks
        .iter()
        .enumerate()
        .flat_map(|(week, days)| {
            days.iter()
                .enumerate()
                .filter_map(move |(weekday, day)| day.as_ref().map(|day| (week, weekday, *day)))
        })
        .map(|(week, weekday, day)| {
            let (x, y) = calendar.block_origin(week, weekday);
            Block {
                x,
                y,
                fill: calendar.level_color(theme, day.level).to_owned(),
                date: day.date.format("%Y-%m-%d").to_string(),
                count: day.count,
            }
        })
        .collect()
}

#[derive(Clone, PartialEq, Props)]
struct CalendarGridProps {
    calendar: CalendarConfig,
    layout: CalendarLayout,
    theme: Theme,
}

#[component]
fn CalendarGrid(props: CalendarGridProps) -> Element {
    let calendar = props.calendar;
    let layout = props.layout;
    let theme = props.theme;

    let width = calendar.width(layout.weeks.len());
    let height = calendar.height();
    let size = calendar.block_size;

    let labels = layout
        .months
        .iter()
        .map(|m| (calendar.block_origin(m.week, 0).0, m.name))
        .collect::<Vec<_>>();

    let blocks = blocks(&calendar, &layout, theme);
    let total = calendar.total_count_label(layout.total);
    let legend = calendar
        .palette(theme)
        .iter()
        .cloned()
        .collect::<Vec<String>>();

    rsx! {
        div { class: "calendar-scroll",
            svg {
                class: "calendar-grid",
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                for (x , name) in labels {
                    text {
                        key: "{x}",
                        class: "calendar-month",
                        x: "{x}",
                        y: "{calendar.font_size}",
                        font_size: "{calendar.font_size}",
                        "{name}"
                    }
                }
                for block in blocks {
                    rect {
                        key: "{block.date}",
                        x: "{block.x}",
                        y: "{block.y}",
                        width: "{size}",
                        height: "{size}",
                        rx: "2",
                        fill: "{block.fill}",
                        "data-date": "{block.date}",
                        "data-count": "{block.count}",
                    }
                }
            }
        }
        div { class: "calendar-footer",
            span { class: "calendar-count", "{total}" }
            div { class: "calendar-legend",
                span { "Less" }
                for (level , color) in legend.into_iter().enumerate() {
                    span {
                        key: "{level}",
                        class: "legend-block",
                        style: "background-color: {color};",
                    }
                }
                span { "More" }
            }
        }
    }
}

// contribution calendar
//
// the feed is fetched once per mount.  until it arrives a placeholder of the right height
// holds the space; a failed fetch leaves a link to the profile instead
#[component]
pub fn ActivityCalendar() -> Element {
    let calendar = use_context::<PortfolioConfig>().calendar;
    let theme = use_context::<Signal<ThemeState>>();

    let url = calendar.contributions_url();
    let feed = use_resource(move || {
        let url = url.clone();
        async move {
            match fetch_contributions(&url).await {
                Ok(resp) => Some(CalendarLayout::from_contributions(
                    &resp.contributions,
                    resp.last_year_total(),
                )),
                Err(err) => {
                    error!({ url = %url }, "failed to fetch contributions: {err:#}");
                    None
                }
            }
        }
    });

    let layout = feed.read().clone();
    let profile = calendar.profile_url();
    let height = calendar.height();

    match layout {
        Some(Some(layout)) if !layout.is_empty() => rsx! {
            CalendarGrid { calendar, layout, theme: theme().get() }
        },
        Some(_) => rsx! {
            p { class: "calendar-fallback",
                "Contribution history is unavailable right now. "
                a {
                    href: "{profile}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "See it on GitHub"
                }
            }
        },
        None => rsx! {
            div { class: "skeleton", style: "height: {height}px; width: 100%;" }
        },
    }
}

use dioxus::prelude::*;

use common::tags::IconTag;

// glyph lookup for the icon tags
//
// plain unicode so the bundle does not need an icon font
fn glyph(tag: IconTag) -> &'static str {
    match tag {
        IconTag::ArrowLeft => "←",
        IconTag::BarChart => "📊",
        IconTag::Book => "📖",
        IconTag::Building => "🏢",
        IconTag::Calendar => "📅",
        IconTag::ChevronDown => "⌄",
        IconTag::Clock => "🕒",
        IconTag::Cloud => "☁",
        IconTag::Code => "</>",
        IconTag::Database => "🗄",
        IconTag::ExternalLink => "↗",
        IconTag::FileText => "📄",
        IconTag::Github => "🐙",
        IconTag::Globe => "🌐",
        IconTag::Heart => "♥",
        IconTag::Image => "🖼",
        IconTag::Layout => "▦",
        IconTag::Linkedin => "in",
        IconTag::Lock => "🔒",
        IconTag::Mail => "✉",
        IconTag::MapPin => "📍",
        IconTag::Monitor => "🖥",
        IconTag::Moon => "☾",
        IconTag::Phone => "☎",
        IconTag::Play => "▶",
        IconTag::Server => "🖧",
        IconTag::Settings => "⚙",
        IconTag::Share => "⤴",
        IconTag::Shield => "🛡",
        IconTag::Smartphone => "📱",
        IconTag::Sun => "☀",
        IconTag::Tag => "🏷",
        IconTag::TrendingUp => "📈",
        IconTag::Users => "👥",
        IconTag::Zap => "⚡",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    tag: IconTag,
    #[props(default, into)]
    class: String,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let glyph = glyph(props.tag);

    rsx! {
        span { class: "icon {props.class}", "aria-hidden": "true", "{glyph}" }
    }
}

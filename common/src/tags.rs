use serde::{Deserialize, Serialize};

// presentation tags
//
// content records carry these instead of css class names or icon components, and the
// webapp resolves them through its own lookup tables at render time

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Emerald,
    Amber,
    Purple,
    Red,
    Indigo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTag {
    ArrowLeft,
    BarChart,
    Book,
    Building,
    Calendar,
    ChevronDown,
    Clock,
    Cloud,
    Code,
    Database,
    ExternalLink,
    FileText,
    Github,
    Globe,
    Heart,
    Image,
    Layout,
    Linkedin,
    Lock,
    Mail,
    MapPin,
    Monitor,
    Moon,
    Phone,
    Play,
    Server,
    Settings,
    Share,
    Shield,
    Smartphone,
    Sun,
    Tag,
    TrendingUp,
    Users,
    Zap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tags_deserialize_from_lowercase_names() {
        let tag: ColorTag = serde_json::from_str("\"emerald\"").unwrap();
        assert_eq!(tag, ColorTag::Emerald);
        assert!(serde_json::from_str::<ColorTag>("\"chartreuse\"").is_err());
    }

    #[test]
    fn icon_tags_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&IconTag::TrendingUp).unwrap(),
            "\"trending_up\""
        );
    }
}

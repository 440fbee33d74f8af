use common::{tags::ColorTag, theme::Theme};

// css values behind the color tags carried by projects, services and badges
pub trait TagColor {
    fn to_css_color(self) -> &'static str;

    fn to_light_css_color(self) -> &'static str;

    fn to_dark_css_color(self) -> &'static str;

    // custom properties consumed by the .accent rules in the stylesheet
    fn accent_style(self, theme: Theme) -> String
    where
        Self: Sized + Copy,
    {
        match theme {
            Theme::Light => format!(
                "--accent: {}; --accent-soft: {};",
                self.to_css_color(),
                self.to_light_css_color()
            ),
            Theme::Dark => format!(
                "--accent: {}; --accent-soft: color-mix(in srgb, {} 20%, transparent);",
                self.to_dark_css_color(),
                self.to_css_color()
            ),
        }
    }
}

impl TagColor for ColorTag {
    fn to_css_color(self) -> &'static str {
        match self {
            Self::Blue => "#2563EB",
            Self::Emerald => "#059669",
            Self::Amber => "#D97706",
            Self::Purple => "#9333EA",
            Self::Red => "#DC2626",
            Self::Indigo => "#4F46E5",
        }
    }

    fn to_light_css_color(self) -> &'static str {
        match self {
            Self::Blue => "#EFF6FF",
            Self::Emerald => "#ECFDF5",
            Self::Amber => "#FFFBEB",
            Self::Purple => "#FAF5FF",
            Self::Red => "#FEF2F2",
            Self::Indigo => "#EEF2FF",
        }
    }

    fn to_dark_css_color(self) -> &'static str {
        match self {
            Self::Blue => "#60A5FA",
            Self::Emerald => "#34D399",
            Self::Amber => "#FBBF24",
            Self::Purple => "#C084FC",
            Self::Red => "#F87171",
            Self::Indigo => "#818CF8",
        }
    }
}

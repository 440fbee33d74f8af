use std::fmt;

use serde::{Deserialize, Serialize};

// display theme
//
// the theme is owned by the application root and handed down through context; nothing
// in this crate keeps a global copy of it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        ThemeState { current: initial }
    }

    // a persisted preference always wins over the configured default
    pub fn restore(stored: Option<Theme>, fallback: Theme) -> Self {
        ThemeState::new(stored.unwrap_or(fallback))
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }
}

use std::fmt;

use api::store::RestStore;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{calendar::CalendarConfig, profile::OWNER_NAME, theme::Theme};

// portfolio configuration
//
// everything the site needs at startup that is not static content.  the webapp embeds the
// toml document at build time, so there is no file to go missing at runtime; a document that
// fails to parse falls back to the defaults
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub site: SiteConfig,
    pub theme: ThemeConfig,
    pub store: StoreConfig,
    pub calendar: CalendarConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    // share links use window.location.origin when this is unset
    pub origin: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            owner: String::from(OWNER_NAME),
            origin: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default: Theme,
}

#[derive(Clone, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    pub url: String,
    pub api_key: String,
}

// keep the key out of the logs
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

impl StoreConfig {
    pub fn client(&self) -> RestStore {
        RestStore::new(self.url.clone(), self.api_key.clone())
    }
}

impl PortfolioConfig {
    // a key supplied at build time beats whatever is in the document
    pub fn with_store_key(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.store.api_key = key.trim().to_owned();
        }
        self
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: PortfolioConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<PortfolioConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    debug!({ store = ?data.config.store }, "parsed config");

    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"
[config.site]
owner = "Someone Else"
origin = "https://portfolio.example.com"

[config.theme]
default = "dark"

[config.store]
url = "https://abc.supabase.co"
api_key = "anon-key"

[config.calendar]
username = "octocat"
block_size = 12
light = ["#fff", "#eee", "#ddd", "#ccc", "#bbb"]
"##;

    #[test]
    fn parses_full_document() {
        let cfg = parse_config(FULL).unwrap();

        assert_eq!(cfg.site.owner, "Someone Else");
        assert_eq!(cfg.site.origin.as_deref(), Some("https://portfolio.example.com"));
        assert_eq!(cfg.theme.default, Theme::Dark);
        assert_eq!(cfg.store.url, "https://abc.supabase.co");
        assert_eq!(cfg.calendar.username, "octocat");
        assert_eq!(cfg.calendar.block_size, 12);
        // unspecified calendar fields keep their defaults
        assert_eq!(cfg.calendar.block_margin, 5);
        assert_eq!(cfg.calendar.dark, CalendarConfig::default().dark);
    }

    #[test]
    fn empty_table_gives_defaults() {
        let cfg = parse_config("[config]\n").unwrap();
        assert_eq!(cfg, PortfolioConfig::default());
        assert_eq!(cfg.theme.default, Theme::Light);
        assert_eq!(cfg.site.owner, OWNER_NAME);
    }

    #[test]
    fn missing_config_table_is_an_error() {
        assert!(parse_config("[site]\nowner = \"x\"\n").is_err());
        assert!(parse_config("[config.theme]\ndefault = \"sepia\"\n").is_err());
    }

    #[test]
    fn build_time_key_overrides_document() {
        let cfg = parse_config(FULL).unwrap();

        assert_eq!(cfg.clone().with_store_key(Some(" build-key ")).store.api_key, "build-key");
        assert_eq!(cfg.clone().with_store_key(Some("")).store.api_key, "anon-key");
        assert_eq!(cfg.with_store_key(None).store.api_key, "anon-key");
    }

    #[test]
    fn debug_output_redacts_key() {
        let cfg = parse_config(FULL).unwrap();
        let out = format!("{:?}", cfg.store);

        assert!(out.contains("abc.supabase.co"));
        assert!(!out.contains("anon-key"));
    }

    #[test]
    fn store_client_uses_configured_url() {
        let cfg = parse_config(FULL).unwrap();
        assert_eq!(
            cfg.store.client().collection_url("messages"),
            "https://abc.supabase.co/rest/v1/messages"
        );
    }
}

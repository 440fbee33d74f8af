#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{Level, debug, error};

// the local `common` module shadows the crate of the same name at the root
use ::common::{
    catalog::Catalog,
    config::{PortfolioConfig, parse_config},
    detail::{Resolution, resolve},
    theme::{Theme, ThemeState},
};

mod common;
use crate::common::storage::LocalPreference;

mod components;
use components::navigation::Shell;

mod home;
use home::Home;

mod project;
use project::ProjectDetail;

// the site config is compiled in; only the store key may come from the build environment
const CONFIG: &str = include_str!("../portfolio.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/project/:slug")]
        ProjectDetail { slug: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

// anything the router did not match goes through the same resolution as the detail view,
// which in practice means back to the root
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let catalog = use_context::<Rc<Catalog>>();
    let path = format!("/{}", segments.join("/"));

    use_effect(move || {
        let target = match resolve(&catalog, &path) {
            Resolution::Detail(project) => Route::ProjectDetail {
                slug: project.slug(),
            },
            Resolution::Home | Resolution::Redirect => Route::Home {},
        };

        debug!({ path = %path }, "redirecting unmatched path");
        navigator().replace(target);
    });

    rsx! {}
}

fn load_config() -> PortfolioConfig {
    let config = match parse_config(CONFIG) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse site config, using defaults: {err:#}");
            PortfolioConfig::default()
        }
    };

    config.with_store_key(option_env!("PORTFOLIO_STORE_KEY"))
}

fn load_catalog() -> Rc<Catalog> {
    match Catalog::builtin() {
        Ok(catalog) => Rc::new(catalog),
        Err(err) => {
            error!("failed to build project catalog: {err:#}");
            Rc::new(Catalog::default())
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(load_catalog);

    let fallback = config.theme.default;
    use_context_provider(|| Signal::new(ThemeState::restore(Theme::fetch(), fallback)));

    rsx! {
        style { "{crate::common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

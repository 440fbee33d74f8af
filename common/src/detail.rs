use tracing::debug;

use crate::{
    catalog::{Catalog, Project},
    slug::{ROOT_PATH, is_root, slug_from_path},
    tags::IconTag,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DetailTab {
    #[default]
    Overview,
    Features,
    Tech,
    Gallery,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Features,
        DetailTab::Tech,
        DetailTab::Gallery,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Features => "features",
            DetailTab::Tech => "tech",
            DetailTab::Gallery => "gallery",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Features => "Features",
            DetailTab::Tech => "Technology",
            DetailTab::Gallery => "Gallery",
        }
    }

    pub fn icon(self) -> IconTag {
        match self {
            DetailTab::Overview => IconTag::FileText,
            DetailTab::Features => IconTag::Layout,
            DetailTab::Tech => IconTag::Code,
            DetailTab::Gallery => IconTag::Image,
        }
    }
}

// what a path means for the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Home,
    Detail(&'a Project),
    // unknown slug or a path we do not serve; go back to the root view
    Redirect,
}

// path to push when a project card is clicked
pub fn select(project: &Project) -> String {
    project.path()
}

pub fn resolve_slug<'a>(catalog: &'a Catalog, slug: &str) -> Option<&'a Project> {
    let found = catalog.find_by_slug(slug);

    if found.is_none() {
        debug!({ slug = slug }, "no project for slug");
    }

    found
}

pub fn resolve<'a>(catalog: &'a Catalog, path: &str) -> Resolution<'a> {
    if is_root(path) {
        return Resolution::Home;
    }

    match slug_from_path(path).and_then(|slug| resolve_slug(catalog, slug)) {
        Some(project) => Resolution::Detail(project),
        None => Resolution::Redirect,
    }
}

// detail view state
//
// the selected project is only ever a copy of the slug that the current path resolved
// to; the catalog remains the source of truth
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    selected: Option<String>,
    active_tab: DetailTab,
}

impl DetailState {
    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    // switching to a different project starts over on the overview tab
    pub fn show(&mut self, project: &Project) {
        let slug = project.slug();

        if self.selected.as_deref() != Some(slug.as_str()) {
            self.selected = Some(slug);
            self.active_tab = DetailTab::Overview;
        }
    }

    // applies whatever the path resolves to, and hands the resolution back so the caller
    // can redirect
    pub fn sync<'a>(&mut self, catalog: &'a Catalog, path: &str) -> Resolution<'a> {
        let resolution = resolve(catalog, path);

        match resolution {
            Resolution::Detail(project) => self.show(project),
            Resolution::Home | Resolution::Redirect => self.clear(),
        }

        resolution
    }

    pub fn set_active_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }

    // returns the path to navigate back to
    pub fn close(&mut self) -> &'static str {
        self.clear();
        ROOT_PATH
    }

    fn clear(&mut self) {
        self.selected = None;
        self.active_tab = DetailTab::default();
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{catalog::tests::project, slug::slugify};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn select_then_resolve_round_trips_every_project() {
        let catalog = catalog();

        for project in catalog.projects() {
            let path = select(project);
            assert_eq!(path, format!("/project/{}", slugify(&project.title)));

            assert_matches!(
                resolve(&catalog, &path),
                Resolution::Detail(found) if found.title == project.title
            );
        }
    }

    #[test]
    fn invoice_scenario() {
        let catalog = catalog();
        let invoice = catalog
            .projects()
            .iter()
            .find(|p| p.title == "Invoice Approval System")
            .unwrap();

        let path = select(invoice);
        assert_eq!(path, "/project/invoice-approval-system");

        // a reload starts from nothing but the path
        let mut state = DetailState::default();
        assert_matches!(
            state.sync(&catalog, &path),
            Resolution::Detail(p) if p.title == "Invoice Approval System"
        );
        assert_eq!(state.selected.as_deref(), Some("invoice-approval-system"));
    }

    #[test]
    fn unknown_slug_redirects_and_clears() {
        let catalog = catalog();
        let mut state = DetailState::default();
        state.sync(&catalog, "/project/invoice-approval-system");

        assert_eq!(state.sync(&catalog, "/project/unknown-slug"), Resolution::Redirect);
        assert_eq!(state.selected.as_deref(), None);
    }

    #[test]
    fn root_and_foreign_paths() {
        let catalog = catalog();
        assert_eq!(resolve(&catalog, "/"), Resolution::Home);
        assert_eq!(resolve(&catalog, "/blog/post"), Resolution::Redirect);
        assert_eq!(resolve(&catalog, "/project/"), Resolution::Redirect);
    }

    #[test]
    fn close_clears_selection() {
        let mut state = DetailState::default();
        state.show(&project("Invoice Approval System"));
        state.set_active_tab(DetailTab::Gallery);

        assert_eq!(state.close(), "/");
        assert_eq!(state.selected.as_deref(), None);
        assert_eq!(state.active_tab(), DetailTab::Overview);
    }

    #[test]
    fn tab_survives_reselecting_the_same_project() {
        let alpha = project("Alpha");
        let mut state = DetailState::default();

        state.show(&alpha);
        state.set_active_tab(DetailTab::Tech);
        state.show(&alpha);
        assert_eq!(state.active_tab(), DetailTab::Tech);

        state.show(&project("Beta"));
        assert_eq!(state.active_tab(), DetailTab::Overview);
    }

    #[test]
    fn tab_labels() {
        let labels: Vec<&str> = DetailTab::ALL.into_iter().map(DetailTab::label).collect();
        assert_eq!(labels, vec!["Overview", "Features", "Technology", "Gallery"]);
        assert_eq!(DetailTab::Tech.id(), "tech");
    }
}

use std::collections::HashMap;

use crate::{
    slug::{project_path, slugify},
    tags::{ColorTag, IconTag},
};

mod builtin;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Completed,
    Upcoming,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: IconTag,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechItem {
    pub name: String,
    pub description: String,
    pub icon: IconTag,
}

// a showcase entry
//
// projects are built once at startup and never change afterwards.  the title doubles as
// the identity, see slug()
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub color: ColorTag,
    pub icon: IconTag,
    pub status: ProjectStatus,
    pub link: Option<String>,
    pub technologies: Vec<String>,
    pub video_url: Option<String>,
    pub hero_image: String,
    pub completion_date: String,
    pub duration: String,
    pub category: String,
    // the two short labels under the card on the home page
    pub card_tags: Vec<(IconTag, String)>,
    pub highlights: Vec<String>,
    pub features: Vec<Feature>,
    pub tech_stack: Vec<TechItem>,
    pub gallery: Vec<String>,
}

impl Project {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    pub fn path(&self) -> String {
        project_path(&self.slug())
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProjectStatus::Completed
    }
}

// project catalog
//
// lookups go through the slug, so construction refuses two titles that slugify to the
// same key rather than letting the second one become unreachable
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> anyhow::Result<Self> {
        let mut by_slug = HashMap::with_capacity(projects.len());

        for (idx, project) in projects.iter().enumerate() {
            if let Some(prev) = by_slug.insert(project.slug(), idx) {
                return Err(anyhow::Error::msg(format!(
                    "projects \"{}\" and \"{}\" share the slug {}",
                    projects[prev].title,
                    project.title,
                    project.slug()
                )));
            }
        }

        Ok(Catalog { projects, by_slug })
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Catalog::new(builtin::projects())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn completed(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.is_completed())
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.is_completed())
    }

    // exact match only; no case folding or whitespace normalization on the way in
    pub fn find_by_slug(&self, slug: &str) -> Option<&Project> {
        self.by_slug.get(slug).map(|idx| &self.projects[*idx])
    }

}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(title: &str) -> Project {
        Project {
            title: title.to_owned(),
            description: format!("{title} description"),
            long_description: String::new(),
            color: ColorTag::Blue,
            icon: IconTag::Code,
            status: ProjectStatus::Completed,
            link: None,
            technologies: Vec::new(),
            video_url: None,
            hero_image: String::new(),
            completion_date: String::new(),
            duration: String::new(),
            category: String::new(),
            card_tags: Vec::new(),
            highlights: Vec::new(),
            features: Vec::new(),
            tech_stack: Vec::new(),
            gallery: Vec::new(),
        }
    }

    #[test]
    fn builtin_catalog_builds() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.projects().len(), 8);
        assert_eq!(catalog.completed().count(), 4);
        assert_eq!(catalog.upcoming().count(), 4);
    }

    #[test]
    fn every_builtin_project_is_reachable_by_slug() {
        let catalog = Catalog::builtin().unwrap();

        for project in catalog.projects() {
            let found = catalog.find_by_slug(&project.slug()).unwrap();
            assert_eq!(found.title, project.title);
        }
    }

    #[test]
    fn completed_projects_are_fully_described() {
        let catalog = Catalog::builtin().unwrap();

        for project in catalog.completed() {
            assert!(!project.technologies.is_empty(), "{}", project.title);
            assert!(!project.highlights.is_empty(), "{}", project.title);
            assert!(!project.features.is_empty(), "{}", project.title);
            assert!(!project.tech_stack.is_empty(), "{}", project.title);
            assert!(!project.gallery.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = Catalog::builtin().unwrap();

        assert!(catalog.find_by_slug("invoice-approval-system").is_some());
        assert!(catalog.find_by_slug("Invoice-Approval-System").is_none());
        assert!(catalog.find_by_slug("unknown-slug").is_none());
    }

    #[test]
    fn colliding_titles_are_rejected() {
        let err = Catalog::new(vec![project("Form System"), project("form  SYSTEM")]).unwrap_err();
        assert!(err.to_string().contains("form-system"));
    }

    #[test]
    fn empty_catalog_finds_nothing() {
        let catalog = Catalog::default();
        assert!(catalog.projects().is_empty());
        assert!(catalog.find_by_slug("anything").is_none());
    }
}

use std::sync::LazyLock;

use regex::Regex;

pub const ROOT_PATH: &str = "/";
pub const PROJECT_PREFIX: &str = "/project/";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// routing key for a project title: lowercase, with every run of whitespace replaced by a
// single hyphen.  this is one-way, so uniqueness is checked when the catalog is built
pub fn slugify(title: &str) -> String {
    WHITESPACE
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

pub fn project_path(slug: &str) -> String {
    format!("{PROJECT_PREFIX}{slug}")
}

// pulls the slug out of /project/{slug}, ignoring any query string or fragment and a
// single trailing slash
pub fn slug_from_path(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or(path);

    let slug = path.strip_prefix(PROJECT_PREFIX)?;
    let slug = slug.strip_suffix('/').unwrap_or(slug);

    if slug.is_empty() || slug.contains('/') {
        None
    } else {
        Some(slug)
    }
}

pub fn is_root(path: &str) -> bool {
    matches!(path.split(['?', '#']).next(), Some("") | Some(ROOT_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Invoice Approval System"), "invoice-approval-system");
        assert_eq!(slugify("Web-Based POS System"), "web-based-pos-system");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(slugify("Enterprise  Portal\tSystem"), "enterprise-portal-system");
    }

    #[test]
    fn punctuation_is_kept() {
        assert_eq!(
            slugify("Corporate Management Portal (SaaS)"),
            "corporate-management-portal-(saas)"
        );
    }

    #[test]
    fn case_only_differences_collide() {
        assert_eq!(slugify("Form System"), slugify("FORM   system"));
    }

    #[test]
    fn paths_round_trip() {
        let path = project_path("invoice-approval-system");
        assert_eq!(path, "/project/invoice-approval-system");
        assert_eq!(slug_from_path(&path), Some("invoice-approval-system"));
    }

    #[test]
    fn slug_from_path_edge_cases() {
        assert_eq!(slug_from_path("/project/abc/"), Some("abc"));
        assert_eq!(slug_from_path("/project/abc?ref=share#top"), Some("abc"));
        assert_eq!(slug_from_path("/project/"), None);
        assert_eq!(slug_from_path("/project/a/b"), None);
        assert_eq!(slug_from_path("/projects/abc"), None);
        assert_eq!(slug_from_path("/"), None);
    }

    #[test]
    fn root_detection() {
        assert!(is_root("/"));
        assert!(is_root(""));
        assert!(is_root("/?utm=x"));
        assert!(!is_root("/project/abc"));
    }
}

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::Project;

// how long the "copied" toast stays up
pub const TOAST_DURATION_MS: u32 = 2000;
pub const COPIED_MESSAGE: &str = "Project link copied to clipboard!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

pub fn share_url(origin: &str, project: &Project) -> String {
    format!("{}{}", origin.trim_end_matches('/'), project.path())
}

pub fn payload(origin: &str, project: &Project) -> SharePayload {
    SharePayload {
        title: project.title.clone(),
        text: project.description.clone(),
        url: share_url(origin, project),
    }
}

// the platform's share capabilities
//
// in the browser this is navigator.share and navigator.clipboard, either of which may be
// missing
#[async_trait(?Send)]
pub trait ShareTarget {
    fn can_share(&self) -> bool;

    async fn share(&self, payload: &SharePayload) -> anyhow::Result<()>;

    async fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    // handed to the native share sheet, whether or not the user went through with it
    Shared,
    Copied,
    Unavailable,
}

impl ShareOutcome {
    pub fn shows_toast(self) -> bool {
        self == ShareOutcome::Copied
    }
}

// share action
//
// none of the failure paths are surfaced; a cancelled share sheet is not an error from the
// user's point of view
pub async fn share_project<T: ShareTarget + ?Sized>(
    target: &T,
    origin: &str,
    project: &Project,
) -> ShareOutcome {
    let payload = payload(origin, project);

    if target.can_share() {
        if let Err(err) = target.share(&payload).await {
            debug!("share sheet failed or was dismissed: {err:#}");
        }
        return ShareOutcome::Shared;
    }

    match target.copy_to_clipboard(&payload.url).await {
        Ok(()) => ShareOutcome::Copied,
        Err(err) => {
            debug!("clipboard fallback failed: {err:#}");
            ShareOutcome::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::catalog::tests::project;

    #[derive(Default)]
    struct FakeTarget {
        native: bool,
        share_fails: bool,
        clipboard: bool,
        shared: RefCell<Vec<SharePayload>>,
        copied: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ShareTarget for FakeTarget {
        fn can_share(&self) -> bool {
            self.native
        }

        async fn share(&self, payload: &SharePayload) -> anyhow::Result<()> {
            self.shared.borrow_mut().push(payload.clone());
            if self.share_fails {
                Err(anyhow::Error::msg("AbortError: share canceled"))
            } else {
                Ok(())
            }
        }

        async fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()> {
            if self.clipboard {
                self.copied.borrow_mut().push(text.to_owned());
                Ok(())
            } else {
                Err(anyhow::Error::msg("clipboard unavailable"))
            }
        }
    }

    #[test]
    fn url_is_origin_plus_project_path() {
        let p = project("Invoice Approval System");
        assert_eq!(
            share_url("https://example.com/", &p),
            "https://example.com/project/invoice-approval-system"
        );
        assert_eq!(
            share_url("https://example.com", &p),
            "https://example.com/project/invoice-approval-system"
        );
    }

    #[tokio::test]
    async fn native_share_gets_title_text_and_url() {
        let target = FakeTarget {
            native: true,
            ..Default::default()
        };
        let p = project("Alpha");

        assert_eq!(
            share_project(&target, "https://example.com", &p).await,
            ShareOutcome::Shared
        );

        let shared = target.shared.borrow();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].title, "Alpha");
        assert_eq!(shared[0].text, "Alpha description");
        assert_eq!(shared[0].url, "https://example.com/project/alpha");
        assert!(target.copied.borrow().is_empty());
    }

    #[tokio::test]
    async fn cancelled_share_is_swallowed() {
        let target = FakeTarget {
            native: true,
            share_fails: true,
            clipboard: true,
            ..Default::default()
        };

        let outcome = share_project(&target, "https://example.com", &project("Alpha")).await;
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(!outcome.shows_toast());
        assert!(target.copied.borrow().is_empty());
    }

    #[tokio::test]
    async fn falls_back_to_clipboard() {
        let target = FakeTarget {
            clipboard: true,
            ..Default::default()
        };

        let outcome = share_project(&target, "https://example.com", &project("Alpha")).await;
        assert_eq!(outcome, ShareOutcome::Copied);
        assert!(outcome.shows_toast());
        assert_eq!(
            *target.copied.borrow(),
            vec![String::from("https://example.com/project/alpha")]
        );
    }

    #[tokio::test]
    async fn nothing_available_is_silent() {
        let target = FakeTarget::default();

        let outcome = share_project(&target, "https://example.com", &project("Alpha")).await;
        assert_eq!(outcome, ShareOutcome::Unavailable);
        assert!(!outcome.shows_toast());
    }
}

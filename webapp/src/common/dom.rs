use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use common::{scroll::ScrollTracker, section::ScrollSurface};

// the live document, for the section navigator
pub struct DocumentSurface;

impl ScrollSurface for DocumentSurface {
    fn scroll_into_view(&self, id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));

        let Some(element) = element else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);

        true
    }
}

// window.location.origin, used for share links when the config does not pin one
pub fn window_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

// the theme class goes on <html> so that the page background follows it too
pub fn set_root_class(class: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        root.set_class_name(class);
    }
}

fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn observe(mut tracker: Signal<ScrollTracker>) {
    let mut next = *tracker.peek();

    // only crossings are written back, so subscribers re-render once per crossing
    if next.observe(scroll_offset()) {
        tracker.set(next);
    }
}

// use_scroll_tracker
//
// registers a scroll listener on the window for the lifetime of the calling component and
// reports whether the page is past the threshold.  the listener lives in hook storage, so
// it is unregistered when the component is dropped
pub fn use_scroll_tracker() -> Memo<bool> {
    let tracker = use_signal(ScrollTracker::default);

    use_hook(|| {
        web_sys::window().map(|window| {
            Rc::new(EventListener::new(&window, "scroll", move |_| {
                observe(tracker)
            }))
        })
    });

    // a page restored part way down never fires an initial scroll event
    use_effect(move || observe(tracker));

    use_memo(move || tracker.read().is_past_threshold())
}

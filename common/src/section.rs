use tracing::debug;

// page sections
//
// the in-page anchors the navigation bar and the call-to-action buttons scroll to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Ai,
    Portfolio,
    Github,
    Services,
    Contact,
}

impl Section {
    // in navigation bar order
    pub const NAV: [Section; 7] = [
        Section::About,
        Section::Skills,
        Section::Ai,
        Section::Portfolio,
        Section::Github,
        Section::Services,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Ai => "ai-expertise",
            Section::Portfolio => "portfolio",
            Section::Github => "github",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Ai => "AI",
            Section::Portfolio => "Portfolio",
            Section::Github => "GitHub",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }
}

// anything that can look up an anchor by id and bring it into view
//
// returns false when no element has that id
pub trait ScrollSurface {
    fn scroll_into_view(&self, id: &str) -> bool;
}

// smooth-scroll navigation
//
// unknown ids are ignored; callers get the result back but nothing is surfaced to the user
pub fn scroll_to<S: ScrollSurface + ?Sized>(surface: &S, id: &str) -> bool {
    let found = surface.scroll_into_view(id);

    if !found {
        debug!(section = id, "no anchor for section, ignoring");
    }

    found
}

pub fn scroll_to_section<S: ScrollSurface + ?Sized>(surface: &S, section: Section) -> bool {
    scroll_to(surface, section.anchor())
}

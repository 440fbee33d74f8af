use constcat::concat;

mod components;
mod detail;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use detail::DETAIL_STYLES;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
r#"
/* Application shell */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: transparent;
  transition: background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.app-header.scrolled {
  background-color: var(--header-scrolled);
  backdrop-filter: blur(4px);
  box-shadow: var(--shadow-lg);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  max-width: var(--container-width);
  margin: 0 auto;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-6);
}

.logo a {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
}

.app-header:not(.scrolled) .logo a,
.app-header:not(.scrolled) .nav-link {
  color: white;
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-links {
  display: flex;
  gap: var(--space-8);
}

.nav-link {
  background: none;
  border: none;
  font: inherit;
  font-weight: 500;
  color: var(--text-secondary);
  cursor: pointer;
  transition: color var(--transition-normal) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
}

.theme-toggle {
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-md);
  background-color: var(--surface-raised);
  font-size: 1.25rem;
  cursor: pointer;
}

.app-footer {
  padding: var(--space-12) 0;
  background-color: var(--neutral-900);
  color: white;
  text-align: center;
}

.theme-dark .app-footer {
  background-color: black;
}

.footer-brand {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
  font-size: 1.5rem;
  font-weight: 700;
}

.footer-brand .icon {
  color: #34D399;
}

.footer-line {
  color: var(--neutral-400);
  margin-bottom: var(--space-6);
}

.footer-social {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }
}
"#,
    HOME_STYLES,
    DETAIL_STYLES
);

pub const HOME_STYLES: &str = r#"
/* Home Page Styles */

.home-container {
  display: flex;
  flex-direction: column;
}

/* Hero Section */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, #1E3A8A, #1E40AF, #312E81);
  color: white;
  text-align: center;
}

.hero-content {
  max-width: 896px;
  padding: 0 var(--space-6);
}

.hero-title {
  font-size: 4.5rem;
  font-weight: 700;
  line-height: 1.1;
  margin-bottom: var(--space-6);
}

.hero-accent {
  display: block;
  color: #34D399;
}

.hero-subtitle {
  font-size: 1.5rem;
  margin-bottom: var(--space-8);
  color: #DBEAFE;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
}

.hero-scroll {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
  background: none;
  border: none;
  color: rgba(255, 255, 255, 0.7);
  font-size: 2rem;
  cursor: pointer;
}

/* Sections */
.page-section {
  padding: var(--space-20) 0;
  background-color: var(--background);
  scroll-margin-top: var(--header-height);
}

.page-section.alt {
  background-color: var(--background-alt);
}

.section-heading {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.section-rule {
  width: 96px;
  height: 4px;
  margin: 0 auto;
  background-color: var(--primary-light);
}

.section-subtitle {
  margin-top: var(--space-4);
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.lead-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.lead {
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.badge-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-6);
}

.badge {
  text-align: center;
  padding: var(--space-6);
}

.badge .icon {
  font-size: 2rem;
  color: var(--accent);
  margin-bottom: var(--space-3);
}

.panel h4 {
  font-size: 1.25rem;
  margin-bottom: var(--space-6);
}

.bullet-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.bullet {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.bullet-dot {
  display: inline-block;
  width: 12px;
  height: 12px;
  border-radius: var(--radius-full);
  background-color: var(--accent);
}

.skill-card h3,
.service-card h3 {
  font-size: 1.25rem;
  margin: var(--space-4) 0;
}

.skill-card ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.skill-card li {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-secondary);
}

.service-card p {
  color: var(--text-secondary);
}

/* Projects */
.project-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-8);
}

.project-card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-6);
}

.project-card-link {
  color: var(--accent);
  font-size: 1.5rem;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.project-card:hover .project-card-link {
  transform: scale(1.1);
}

.project-card-soon {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--accent);
}

.project-card-title {
  font-size: 1.5rem;
  margin-bottom: var(--space-4);
}

.project-card-description {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.project-card-tags {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.project-card-tags span {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
}

/* Contribution calendar */
.calendar-panel {
  padding: var(--space-8);
  border-radius: var(--radius-xl);
  background: linear-gradient(135deg, #EFF6FF, #E0E7FF);
}

.theme-dark .calendar-panel {
  background: linear-gradient(135deg, rgba(30, 58, 138, 0.3), rgba(55, 48, 163, 0.3));
}

.calendar-scroll {
  display: flex;
  justify-content: center;
  overflow-x: auto;
}

.calendar-month {
  fill: var(--text-secondary);
}

.calendar-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: var(--space-4);
  color: var(--text-secondary);
}

.calendar-count {
  color: var(--text-primary);
}

.calendar-legend {
  display: flex;
  align-items: center;
  gap: var(--space-1);
}

.legend-block {
  display: inline-block;
  width: 15px;
  height: 15px;
  border-radius: 2px;
}

.calendar-caption,
.calendar-fallback {
  text-align: center;
  margin-top: var(--space-6);
  color: var(--text-secondary);
}

/* Contact */
.contact-section {
  background: linear-gradient(135deg, #1E3A8A, #312E81);
  color: white;
}

.contact-section .section-subtitle,
.contact-section .lead {
  color: rgba(255, 255, 255, 0.9);
}

.contact-section .section-rule {
  background-color: #34D399;
}

.contact-info h3,
.contact-form-title {
  font-size: 1.5rem;
  margin-bottom: var(--space-6);
}

.contact-channel {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
  --accent: rgba(255, 255, 255, 0.2);
}

.contact-channel a {
  color: white;
}

.contact-label {
  font-size: 0.875rem;
  color: #BFDBFE;
}

.contact-social {
  display: flex;
  gap: var(--space-4);
}

.contact-social a,
.footer-social a {
  display: inline-flex;
  padding: var(--space-3);
  border-radius: var(--radius-md);
  background-color: rgba(255, 255, 255, 0.2);
  color: white;
}

.contact-form-card {
  padding: var(--space-8);
  border-radius: var(--radius-xl);
  background-color: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(4px);
}

@media (max-width: 768px) {
  .hero-title {
    font-size: 3rem;
  }

  .project-grid,
  .badge-row {
    grid-template-columns: 1fr;
  }
}
"#;

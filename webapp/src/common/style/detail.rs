pub const DETAIL_STYLES: &str = r#"
/* Project Detail Styles */

.detail-page {
  padding-top: calc(var(--header-height) + var(--space-8));
  padding-bottom: var(--space-16);
}

.detail-actions {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-8);
}

.detail-actions-right {
  display: flex;
  gap: var(--space-4);
}

.back-button {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  background: none;
  border: none;
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
}

.back-button:hover {
  color: var(--secondary);
}

.detail-header {
  padding: var(--space-8);
  margin-bottom: var(--space-8);
  border-radius: var(--radius-xl);
  background: linear-gradient(135deg, var(--surface-raised), var(--background));
}

.detail-title {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.detail-title h1 {
  font-size: 2.25rem;
}

.detail-description {
  max-width: 768px;
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.detail-tabs {
  display: flex;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
  border-bottom: 1px solid var(--border);
}

.detail-tab {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
  transition: color var(--transition-normal) var(--easing-standard);
}

.detail-tab:hover {
  color: var(--secondary);
}

.detail-tab.active {
  border-bottom-color: var(--accent);
  color: var(--accent);
}

.detail-content {
  padding: var(--space-8);
  border-radius: var(--radius-xl);
  background-color: var(--surface-raised);
}

.detail-hero {
  position: relative;
  aspect-ratio: 16 / 9;
  border-radius: var(--radius-lg);
  overflow: hidden;
  background-color: var(--neutral-700);
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: var(--space-8);
}

.detail-hero img,
.detail-hero iframe,
.detail-shot img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border: none;
}

.play-button {
  padding: var(--space-4);
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--secondary);
  color: white;
  font-size: 2rem;
  cursor: pointer;
}

.detail-columns {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
}

.detail-columns h2 {
  font-size: 1.5rem;
  margin-bottom: var(--space-6);
}

.detail-long {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.detail-facts,
.detail-highlights {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  color: var(--text-secondary);
}

.detail-facts li {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.detail-facts .icon {
  color: #34D399;
}

.detail-highlights li::before {
  content: "";
  display: inline-block;
  width: 8px;
  height: 8px;
  margin-right: var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--secondary);
}

.detail-grid {
  display: grid;
  gap: var(--space-6);
}

.detail-grid.two {
  grid-template-columns: repeat(2, 1fr);
}

.detail-grid.three {
  grid-template-columns: repeat(3, 1fr);
}

.detail-tile {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
}

.detail-tile h3 {
  margin: var(--space-4) 0 var(--space-2);
}

.detail-tile-header {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.detail-tile p {
  color: var(--text-secondary);
}

.detail-shot {
  aspect-ratio: 16 / 9;
  border-radius: var(--radius-lg);
  overflow: hidden;
  background-color: var(--neutral-700);
}

@media (max-width: 768px) {
  .detail-columns,
  .detail-grid.two,
  .detail-grid.three {
    grid-template-columns: 1fr;
  }
}
"#;

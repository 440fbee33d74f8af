pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:hover {
  text-decoration: none;
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px rgba(52, 211, 153, 0.5);
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-accent {
  background-color: var(--secondary);
  color: white;
}

.btn-accent:hover {
  background-color: var(--secondary-dark);
}

.btn-secondary {
  background-color: var(--surface-raised);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--neutral-300);
}

.btn-outline {
  background-color: transparent;
  color: white;
  border: 2px solid white;
}

.btn-outline:hover {
  background-color: white;
  color: var(--primary);
}

.btn-lg {
  padding: var(--space-4) var(--space-8);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

/* Icons */
.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  line-height: 1;
}

.icon-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 56px;
  height: 56px;
  border-radius: var(--radius-md);
  background-color: var(--accent);
  color: white;
  font-size: 1.5rem;
}

.icon-badge.small {
  width: 40px;
  height: 40px;
  font-size: 1.125rem;
}

/* Chips */
.chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.chip {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  font-weight: 500;
  background-color: var(--accent-soft);
  color: var(--accent);
}

.chip.solid {
  background-color: var(--accent);
  color: white;
}

/* Cards */
.project-card,
.skill-card,
.service-card,
.badge,
.panel {
  background-color: var(--accent-soft);
  border-radius: var(--radius-xl);
  padding: var(--space-8);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.project-card:hover,
.service-card:hover,
.skill-card:hover {
  box-shadow: var(--shadow-lg);
}

.clickable {
  cursor: pointer;
}

/* Form Elements */
.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.form-input,
.form-textarea {
  width: 100%;
  margin-bottom: var(--space-4);
  padding: var(--space-3) var(--space-4);
  border: 1px solid rgba(255, 255, 255, 0.3);
  border-radius: var(--radius-md);
  background-color: rgba(255, 255, 255, 0.2);
  color: white;
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input::placeholder,
.form-textarea::placeholder {
  color: rgba(255, 255, 255, 0.7);
}

.form-input:focus,
.form-textarea:focus {
  border-color: transparent;
  box-shadow: 0 0 0 2px #34D399;
  outline: none;
}

.form-textarea {
  resize: none;
}

.form-status {
  padding: var(--space-4);
  margin-bottom: var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid transparent;
}

.form-status.success {
  background-color: rgba(16, 185, 129, 0.2);
  border-color: rgba(52, 211, 153, 0.4);
  color: #D1FAE5;
}

.form-status.error {
  background-color: rgba(239, 68, 68, 0.2);
  border-color: rgba(248, 113, 113, 0.4);
  color: #FEE2E2;
}

/* Toast */
.toast {
  position: fixed;
  top: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
  z-index: 60;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
  box-shadow: var(--shadow-lg);
}

/* Skeleton loader */
.skeleton {
  background: linear-gradient(
    90deg,
    var(--neutral-200) 25%,
    var(--neutral-300) 50%,
    var(--neutral-200) 75%
  );
  background-size: 200% 100%;
  animation: skeleton-loading 1.5s infinite;
  border-radius: var(--radius-md);
  height: 1em;
}

@keyframes skeleton-loading {
  0% { background-position: -200% 0; }
  100% { background-position: 200% 0; }
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.two-column {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: start;
}

.card-grid {
  display: grid;
  gap: var(--space-6);
}

.card-grid.two {
  grid-template-columns: repeat(2, 1fr);
}

.card-grid.three {
  grid-template-columns: repeat(3, 1fr);
}

@media (max-width: 768px) {
  .two-column,
  .form-row,
  .card-grid.two,
  .card-grid.three {
    grid-template-columns: 1fr;
  }
}
"#;

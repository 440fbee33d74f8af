pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #1E3A8A;          /* Brand navy */
  --primary-light: #3B82F6;
  --primary-dark: #172554;
  --secondary: #059669;        /* Emerald for calls to action */
  --secondary-dark: #047857;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Semantic Colors */
  --success: #10B981;
  --error: #EF4444;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --background-alt: #FFFFFF;
  --surface: #FFFFFF;
  --surface-raised: var(--neutral-100);
  --header-scrolled: rgba(255, 255, 255, 0.95);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);

  /* Layout */
  --header-height: 72px;
  --container-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);

  /* Per-card accent, overridden inline from the color tags */
  --accent: var(--primary-light);
  --accent-soft: #EFF6FF;
}

.theme-dark {
  --primary: #BFDBFE;
  --primary-light: #60A5FA;

  --background: var(--neutral-900);
  --background-alt: #0B1120;
  --surface: var(--neutral-800);
  --surface-raised: rgba(55, 65, 81, 0.5);
  --header-scrolled: rgba(31, 41, 55, 0.95);

  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-700);

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.5);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.5);
}"#;

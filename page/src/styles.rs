//! CSS for the page.
//!
//! Inlined into `<style>` by the static renderer and by the browser build.
//! `vseprostavby css` writes it out as a standalone stylesheet.
//!
//! # Layout
//!
//! - Mobile first; the `md` breakpoint is 768px
//! - Below `md` the inline nav links are hidden behind `.nav-toggle`
//! - Grids: services 1/2/3 columns, references 1/2 columns

/// Breakpoint where the desktop navigation replaces the menu button.
pub const MD_BREAKPOINT_PX: u32 = 768;

/// Complete stylesheet.
pub const SITE_CSS: &str = r#"
:root {
    --blue-100: #dbeafe;
    --blue-200: #bfdbfe;
    --blue-300: #93c5fd;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --blue-800: #1e40af;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --container-max: 1200px;
    --radius: 8px;
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.1);
    --shadow-lg: 0 10px 15px rgba(0, 0, 0, 0.1);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    background: var(--gray-50);
    color: var(--gray-800);
    line-height: 1.5;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Header */

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    box-shadow: var(--shadow-sm);
}

.nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding-top: 16px;
    padding-bottom: 16px;
}

.nav-brand {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--blue-800);
    letter-spacing: -0.025em;
}

.nav-links {
    display: none;
    align-items: center;
    gap: 32px;
}

.nav-link {
    color: var(--gray-600);
    font-weight: 500;
    transition: color 0.2s;
}

.nav-link:hover,
.mobile-nav-link:hover {
    color: var(--blue-600);
}

.nav-toggle {
    background: none;
    border: 0;
    padding: 0;
    cursor: pointer;
}

.mobile-panel {
    position: absolute;
    top: 100%;
    left: 0;
    width: 100%;
    background: #fff;
    box-shadow: var(--shadow-lg);
}

.mobile-panel[hidden] {
    display: none;
}

.mobile-panel-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
    padding: 32px 0;
}

.mobile-nav-link {
    font-size: 1.25rem;
    color: var(--gray-700);
    transition: color 0.2s;
}

@media (min-width: 768px) {
    .nav-links {
        display: flex;
    }

    .nav-toggle-wrap,
    .mobile-panel {
        display: none;
    }
}

/* Icons */

.icon-sm { width: 28px; height: 28px; }
.icon-md { width: 32px; height: 32px; }
.icon-lg { width: 64px; height: 64px; }

/* Hero */

.hero {
    position: relative;
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #fff;
    overflow: hidden;
}

.hero-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    z-index: 0;
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    z-index: 10;
}

.hero-content {
    position: relative;
    z-index: 20;
    text-align: center;
    padding: 0 16px;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 800;
    letter-spacing: -0.025em;
    margin: 0 0 16px;
    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.6);
}

.hero-subtitle {
    font-size: 1.125rem;
    max-width: 48rem;
    margin: 0 auto 32px;
    text-shadow: 0 1px 4px rgba(0, 0, 0, 0.6);
}

.btn-cta {
    display: inline-block;
    background: var(--blue-600);
    color: #fff;
    font-weight: 700;
    font-size: 1.125rem;
    padding: 12px 32px;
    border-radius: 9999px;
    transition: transform 0.2s, background 0.2s;
}

.btn-cta:hover {
    background: var(--blue-700);
    transform: scale(1.05);
}

@media (min-width: 768px) {
    .hero-title { font-size: 3.75rem; }
    .hero-subtitle { font-size: 1.5rem; }
}

/* Sections */

.section {
    padding: 80px 0;
}

.section-white { background: #fff; }
.section-gray { background: var(--gray-100); }
.section-blue { background: var(--blue-800); color: #fff; }

.section-header {
    text-align: center;
    margin-bottom: 48px;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--gray-900);
    margin: 0;
}

.section-blue .section-title { color: #fff; }

.section-description {
    font-size: 1.125rem;
    color: var(--gray-600);
    margin: 8px 0 0;
}

.section-blue .section-description { color: var(--blue-200); }

@media (min-width: 768px) {
    .section-title { font-size: 2.25rem; }
}

/* Services */

.services-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.service-card {
    display: flex;
    align-items: center;
    gap: 16px;
    background: var(--gray-50);
    padding: 24px;
    border-radius: var(--radius);
    box-shadow: var(--shadow-sm);
    transition: box-shadow 0.3s, transform 0.3s;
}

.service-card:hover {
    box-shadow: var(--shadow-lg);
    transform: translateY(-4px);
}

.service-icon {
    background: var(--blue-100);
    padding: 12px;
    border-radius: 9999px;
}

.service-name {
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0;
}

@media (min-width: 640px) {
    .services-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .services-grid { grid-template-columns: repeat(3, 1fr); }
}

/* About */

.about {
    text-align: center;
}

.about .section-title {
    margin-bottom: 24px;
}

.about-text {
    max-width: 48rem;
    margin: 0 auto;
    font-size: 1.125rem;
    line-height: 1.75;
    color: var(--gray-700);
}

/* References */

.references-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.reference-card {
    background: #fff;
    border-radius: var(--radius);
    box-shadow: var(--shadow-md);
    overflow: hidden;
}

.reference-media {
    position: relative;
    height: 256px;
    background: var(--gray-200);
    overflow: hidden;
}

.reference-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.3s;
}

.reference-card:hover .reference-image {
    transform: scale(1.05);
}

.reference-placeholder {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--gray-300);
}

.reference-body {
    padding: 24px;
}

.reference-title {
    font-size: 1.25rem;
    font-weight: 700;
    margin: 0;
}

.reference-location {
    color: var(--gray-600);
    margin: 4px 0 0;
}

@media (min-width: 768px) {
    .references-grid { grid-template-columns: repeat(2, 1fr); }
}

/* Contact */

.contact-box {
    max-width: 56rem;
    margin: 0 auto;
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(4px);
    padding: 32px;
    border-radius: var(--radius);
}

.contact-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    text-align: center;
}

.contact-column {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.contact-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
}

.contact-value {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0;
}

.contact-note,
.contact-link {
    color: var(--blue-200);
    margin: 0;
}

.contact-link:hover {
    color: #fff;
}

@media (min-width: 768px) {
    .contact-grid {
        grid-template-columns: repeat(2, 1fr);
        text-align: left;
    }

    .contact-item {
        flex-direction: row;
    }
}

/* Footer */

.footer {
    background: var(--gray-900);
    color: var(--gray-400);
    padding: 24px 0;
    text-align: center;
}

.footer p {
    margin: 0;
}

.footer-attribution {
    margin-top: 8px !important;
    font-size: 0.875rem;
}

.footer-attribution a:hover {
    color: #fff;
}
"#;

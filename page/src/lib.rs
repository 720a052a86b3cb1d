//! # vseprostavby-page
//!
//! The VŠE PRO STAVBY.CZ landing page as [Leptos](https://leptos.dev/)
//! components.
//!
//! Two ways to ship it:
//!
//! - **Static HTML** - [`render_page`] renders the whole document through
//!   Leptos SSR, with CSS and a small menu script inlined
//! - **Browser** - the `web` crate mounts [`components::SitePage`] with
//!   Leptos CSR after calling [`head::initialize`]
//!
//! ## Quick Start
//!
//! ```rust
//! use vseprostavby_page::{render_page, RenderOptions};
//!
//! let html = render_page(&RenderOptions {
//!     year: Some(2025),
//!     ..Default::default()
//! });
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("tel:+420737383621"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - the constant lists the page is projected from
//! - [`menu`] - mobile menu state machine
//! - [`head`] - title/favicon values and startup initialization
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod head;
pub mod menu;
pub mod styles;

use menu::MenuState;

/// Knobs for [`render_page`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Footer year; `None` reads the system clock at render time
    pub year: Option<i32>,
    /// Mobile menu state in the rendered markup
    pub initial_menu: MenuState,
    /// Inline the menu script so the static page stays interactive
    pub inline_script: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            year: None,
            initial_menu: MenuState::Closed,
            inline_script: true,
        }
    }
}

impl RenderOptions {
    /// Pinned year, or the current one.
    pub fn resolved_year(&self) -> i32 {
        self.year.unwrap_or_else(components::current_year)
    }
}

/// Render the complete page as an HTML document.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
#[cfg(feature = "ssr")]
pub fn render_page(options: &RenderOptions) -> String {
    use components::PageDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    // Signals in the header need a reactive owner even for one-shot SSR
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <PageDocument options=options.clone() /> };
        doc.to_html()
    });
    tracing::debug!(bytes = html.len(), menu = options.initial_menu.as_str(), "page rendered");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_complete_document() {
        let html = render_page(&RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"cs\""));
        assert!(html.contains("VŠEPROSTAVBY.CZ"));
    }

    #[test]
    fn default_options_are_closed_and_scripted() {
        let options = RenderOptions::default();
        assert_eq!(options.initial_menu, MenuState::Closed);
        assert!(options.inline_script);
        assert_eq!(options.year, None);
    }

    #[test]
    fn pinned_year_wins() {
        let options = RenderOptions {
            year: Some(1999),
            ..Default::default()
        };
        assert_eq!(options.resolved_year(), 1999);
    }

    #[test]
    fn script_is_optional() {
        let with = render_page(&RenderOptions::default());
        let without = render_page(&RenderOptions {
            inline_script: false,
            ..Default::default()
        });

        assert!(with.contains("data-role=\"menu-toggle\""));
        assert!(with.contains("panel.dataset.menuState"));
        assert!(!without.contains("panel.dataset.menuState"));
    }
}

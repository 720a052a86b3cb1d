//! Leptos components for the page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (SSR only: <html>, <head>, inline CSS and menu script)
//! └── SitePage (mounted directly by the browser build)
//!     ├── Header
//!     │   └── MobilePanel
//!     ├── Hero         #home
//!     ├── Services     #services
//!     │   └── ServiceCard (per service)
//!     ├── About        #about
//!     ├── References   #references
//!     │   └── ReferenceCard (per reference)
//!     ├── Contact      #contact
//!     └── Footer
//! ```

mod about;
mod contact;
mod document;
mod footer;
mod header;
mod hero;
mod icons;
mod references;
mod section;
mod services;

pub use about::About;
pub use contact::Contact;
pub use document::{MENU_SCRIPT, PageDocument};
pub use footer::{Footer, copyright_line, current_year};
pub use header::Header;
pub use hero::Hero;
pub use icons::{ICON_MAIL, ICON_MAP_PIN, ICON_MENU, ICON_PHONE, ICON_PHOTO, ICON_USER, IconImg};
pub use references::References;
pub use section::SectionHeader;
pub use services::Services;

use crate::menu::MenuState;
use leptos::prelude::*;

/// The whole page body, sections in fixed order.
#[component]
pub fn SitePage(
    /// Year in the footer copyright line
    #[prop(default = current_year())]
    year: i32,
    /// Mobile menu state at mount
    #[prop(optional)]
    initial_menu: MenuState,
    /// Emit the mobile panel while closed, for the inline menu script
    #[prop(optional)]
    static_markup: bool,
) -> impl IntoView {
    view! {
        <div class="page">
            <Header initial_menu=initial_menu static_markup=static_markup />
            <main>
                <Hero />
                <Services />
                <About />
                <References />
                <Contact />
            </main>
            <Footer year=year />
        </div>
    }
}

//! Sticky header: brand, desktop links, and the collapsible mobile menu.

use super::{ICON_MENU, IconImg};
use crate::content::{BRAND, NAV_LINKS};
use crate::menu::MenuState;
use leptos::prelude::*;

/// Site header with navigation.
///
/// The menu button and every mobile link drive one [`MenuState`] signal.
/// With `static_markup` the panel is always emitted (hidden while closed)
/// so the inline menu script can show it without a reactive runtime.
#[component]
pub fn Header(
    /// Menu state at mount
    #[prop(optional)]
    initial_menu: MenuState,
    /// Keep the panel in the markup while closed
    #[prop(optional)]
    static_markup: bool,
) -> impl IntoView {
    let menu = RwSignal::new(initial_menu);
    let toggle_menu = move |_| menu.update(|m| *m = m.toggle());

    view! {
        <header class="site-header">
            <nav class="container nav">
                <a href="#home" class="nav-brand">{BRAND}</a>
                <div class="nav-links">
                    {NAV_LINKS.iter().map(|link| view! {
                        <a href=link.href class="nav-link">{link.name}</a>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="nav-toggle-wrap">
                    <button
                        type="button"
                        class="nav-toggle"
                        data-role="menu-toggle"
                        aria-label="Toggle menu"
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu.get().aria_expanded()
                        on:click=toggle_menu
                    >
                        <IconImg src=ICON_MENU alt="Menu" class="icon-sm" />
                    </button>
                </div>
            </nav>

            {if static_markup {
                view! { <MobilePanel menu=menu /> }.into_any()
            } else {
                view! {
                    <Show when=move || menu.get().is_open()>
                        <MobilePanel menu=menu />
                    </Show>
                }.into_any()
            }}
        </header>
    }
}

/// Overlay listing every nav link; following one closes the menu.
#[component]
fn MobilePanel(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <div
            id="mobile-menu"
            class="mobile-panel"
            data-menu-state=move || menu.get().as_str()
            hidden=move || !menu.get().is_open()
        >
            <div class="mobile-panel-inner">
                {NAV_LINKS.iter().map(|link| view! {
                    <a
                        href=link.href
                        class="mobile-nav-link"
                        on:click=move |_| menu.update(|m| *m = m.close())
                    >
                        {link.name}
                    </a>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

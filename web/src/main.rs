// VŠE PRO STAVBY.CZ landing page - browser entry point (Leptos CSR)

mod browser;

use leptos::prelude::*;
use vseprostavby_page::components::SitePage;
use vseprostavby_page::head;
use vseprostavby_page::styles::SITE_CSS;

fn main() {
    console_error_panic_hook::set_once();

    // One-shot head setup before the first render
    if let Err(err) = head::initialize(&mut browser::BrowserDocument) {
        browser::log_error(&format!("[vseprostavby] head init failed: {err}"));
    }

    leptos::mount::mount_to_body(|| {
        view! {
            <style>{SITE_CSS}</style>
            <SitePage />
        }
    });
}

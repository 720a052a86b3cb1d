//! Root document component - the complete HTML page for static export.

use super::SitePage;
use crate::RenderOptions;
use crate::head::PAGE_HEAD;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

/// The complete HTML document.
#[component]
pub fn PageDocument(options: RenderOptions) -> impl IntoView {
    let year = options.resolved_year();

    view! {
        <html lang="cs">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{PAGE_HEAD.title}</title>
                <link rel="icon" href=PAGE_HEAD.favicon_url />
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <SitePage
                    year=year
                    initial_menu=options.initial_menu
                    static_markup=options.inline_script
                />
                {options.inline_script.then(|| view! { <script>{MENU_SCRIPT}</script> })}
            </body>
        </html>
    }
}

/// Mobile menu behaviour for the static export.
///
/// Same transitions as [`crate::menu::MenuState`]: the button toggles,
/// any panel link closes.
pub const MENU_SCRIPT: &str = r#"
(() => {
  const panel = document.getElementById('mobile-menu');
  const toggle = document.querySelector('[data-role="menu-toggle"]');
  if (!panel || !toggle) return;

  const render = (state) => {
    panel.dataset.menuState = state;
    panel.hidden = state !== 'open';
    toggle.setAttribute('aria-expanded', state === 'open' ? 'true' : 'false');
  };

  toggle.addEventListener('click', () => {
    render(panel.dataset.menuState === 'open' ? 'closed' : 'open');
  });

  panel.querySelectorAll('a').forEach(link => {
    link.addEventListener('click', () => render('closed'));
  });
})();
"#;

use crate::content::{ATTRIBUTION_URL, COMPANY_NAME};
use chrono::Datelike;
use leptos::prelude::*;

/// Calendar year from the local system clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Copyright line for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {COMPANY_NAME}. Všechna práva vyhrazena.")
}

#[component]
pub fn Footer(
    /// Year in the copyright line
    #[prop(default = current_year())]
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{copyright_line(year)}</p>
                <p class="footer-attribution">
                    <a href=ATTRIBUTION_URL target="_blank" rel="noopener noreferrer">
                        "Vytvořeno s láskou od DigitalFusion"
                    </a>
                </p>
            </div>
        </footer>
    }
}

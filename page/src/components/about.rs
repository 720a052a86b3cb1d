use crate::content::ABOUT_TEXT;
use leptos::prelude::*;

/// Company description.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section section-gray">
            <div class="container about">
                <h2 class="section-title">"O nás"</h2>
                <p class="about-text">{ABOUT_TEXT}</p>
            </div>
        </section>
    }
}

use crate::content::HERO_IMAGE;
use leptos::prelude::*;

/// Full-viewport banner with the call to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <img
                src=HERO_IMAGE
                alt="Rodinný dům po rekonstrukci"
                class="hero-image"
            />
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title">"STAVEBNÍ PRÁCE A REKONSTRUKCE"</h1>
                <p class="hero-subtitle">"Komplexní řešení pro Vaši stavbu od A do Z."</p>
                <a href="#contact" class="btn-cta">"Nezávazná poptávka"</a>
            </div>
        </section>
    }
}

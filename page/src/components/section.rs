use leptos::prelude::*;

/// Centered title and lead paragraph above a section's content.
#[component]
pub fn SectionHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-description">{description}</p>
        </div>
    }
}

//! Portfolio gallery.

use super::{ICON_PHOTO, IconImg, SectionHeader};
use crate::content::{REFERENCES, Reference, ReferenceVisual};
use leptos::prelude::*;

/// References grid, one card per entry in [`REFERENCES`].
#[component]
pub fn References() -> impl IntoView {
    view! {
        <section id="references" class="section section-white">
            <div class="container">
                <SectionHeader
                    title="Naše reference"
                    description="Pohled na naši dokončenou práci."
                />
                <div class="references-grid">
                    {REFERENCES.iter().map(|reference| view! { <ReferenceCard reference=*reference /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// A project card. The picture slot holds either the photo or the
/// placeholder icon, never both.
#[component]
fn ReferenceCard(reference: Reference) -> impl IntoView {
    let media = match reference.visual {
        ReferenceVisual::WithImage(src) => view! {
            <img src=src alt=reference.image_alt() class="reference-image" loading="lazy" />
        }
        .into_any(),
        ReferenceVisual::Placeholder => view! {
            <div class="reference-placeholder">
                <IconImg src=ICON_PHOTO alt="Placeholder" class="icon-lg" />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="reference-card">
            <div class="reference-media">{media}</div>
            <div class="reference-body">
                <h3 class="reference-title">{reference.title}</h3>
                <p class="reference-location">{reference.location}</p>
            </div>
        </div>
    }
}

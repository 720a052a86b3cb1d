use super::{IconImg, SectionHeader};
use crate::content::{SERVICES, Service};
use leptos::prelude::*;

/// Services grid, one card per entry in [`SERVICES`] order.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section section-white">
            <div class="container">
                <SectionHeader
                    title="Oblasti působnosti"
                    description="Zajišťujeme široké spektrum stavebních činností."
                />
                <div class="services-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=*service /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-icon">
                <IconImg src=service.icon_url alt=format!("{} icon", service.name) />
            </div>
            <h3 class="service-name">{service.name}</h3>
        </div>
    }
}

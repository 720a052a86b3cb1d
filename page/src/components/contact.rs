use super::{ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, ICON_USER, IconImg, SectionHeader};
use crate::content::CONTACT;
use leptos::prelude::*;

/// Contact block: person, phone, e-mail, address.
///
/// Phone and e-mail hand off to the device through `tel:` / `mailto:` links.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section section-blue">
            <div class="container">
                <SectionHeader
                    title="Kontaktujte nás"
                    description="Jsme tu pro vaše dotazy a projekty."
                />
                <div class="contact-box">
                    <div class="contact-grid">
                        <div class="contact-column">
                            <ContactItem icon=ICON_USER icon_alt="Kontakt osoba" value=CONTACT.person>
                                <p class="contact-note">{CONTACT.role}</p>
                            </ContactItem>
                            <ContactItem icon=ICON_PHONE icon_alt="Telefon" value=CONTACT.phone_display>
                                <a href=CONTACT.phone_uri class="contact-link">"Zavolejte nám"</a>
                            </ContactItem>
                        </div>
                        <div class="contact-column">
                            <ContactItem icon=ICON_MAIL icon_alt="Email" value=CONTACT.email>
                                <a href=CONTACT.mailto() class="contact-link">"Napište nám"</a>
                            </ContactItem>
                            <ContactItem icon=ICON_MAP_PIN icon_alt="Adresa" value=CONTACT.address>
                                <p class="contact-note">{CONTACT.registration}</p>
                            </ContactItem>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(
    icon: &'static str,
    icon_alt: &'static str,
    value: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="contact-item">
            <IconImg src=icon alt=icon_alt class="icon-md" />
            <div>
                <h3 class="contact-value">{value}</h3>
                {children()}
            </div>
        </div>
    }
}

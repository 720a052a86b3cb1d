//! Tabler icons, loaded as `<img>` from the jsDelivr CDN.

use crate::content::tabler_icon;
use leptos::prelude::*;

/// Hamburger icon on the mobile menu button
pub const ICON_MENU: &str = tabler_icon!("menu-2");
/// Stand-in for references without a photo
pub const ICON_PHOTO: &str = tabler_icon!("photo");
/// Contact person
pub const ICON_USER: &str = tabler_icon!("user");
/// Phone number
pub const ICON_PHONE: &str = tabler_icon!("phone");
/// E-mail address
pub const ICON_MAIL: &str = tabler_icon!("mail");
/// Postal address
pub const ICON_MAP_PIN: &str = tabler_icon!("map-pin");

/// Renders an icon image.
///
/// # Example
///
/// ```rust,ignore
/// view! { <IconImg src=ICON_PHONE alt="Telefon" class="icon-md" /> }
/// ```
#[component]
pub fn IconImg(
    /// Icon address
    src: &'static str,
    /// Alt text shown when the icon cannot be fetched
    #[prop(into)]
    alt: String,
    /// CSS size class
    #[prop(default = "icon-sm")]
    class: &'static str,
) -> impl IntoView {
    view! { <img src=src alt=alt class=class /> }
}

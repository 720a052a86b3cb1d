//! Site content - the hand-authored lists the page is projected from.
//!
//! Everything here is `const` data fixed at build time. The types are:
//!
//! - **Borrowed** - `&'static str` fields, components never clone strings
//! - **Serializable** - exported as JSON by the CLI `content` command
//!
//! # Example
//!
//! ```rust
//! use vseprostavby_page::content::{REFERENCES, ReferenceVisual};
//!
//! let with_images = REFERENCES
//!     .iter()
//!     .filter(|r| matches!(r.visual, ReferenceVisual::WithImage(_)))
//!     .count();
//! assert_eq!(with_images, 2);
//! ```

use serde::Serialize;

/// Base address of the Tabler icon set on jsDelivr.
macro_rules! tabler_icon {
    ($name:literal) => {
        concat!(
            "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/",
            $name,
            ".svg"
        )
    };
}
pub(crate) use tabler_icon;

/// Brand text shown in the header.
pub const BRAND: &str = "VŠEPROSTAVBY.CZ";

/// Company name as used in running text and the footer.
pub const COMPANY_NAME: &str = "VŠE PRO STAVBY.CZ";

/// An in-page navigation destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display text
    pub name: &'static str,
    /// Same-document fragment, e.g. `#services`
    pub href: &'static str,
}

/// An offered service category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    /// Display label
    pub name: &'static str,
    /// External icon address
    pub icon_url: &'static str,
}

/// What a reference card shows in its picture slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "src", rename_all = "snake_case")]
pub enum ReferenceVisual {
    /// Project photo at the given address
    WithImage(&'static str),
    /// No photo yet - render the generic placeholder icon
    Placeholder,
}

impl ReferenceVisual {
    /// Decide the visual from an optional image address.
    pub const fn from_image(image_url: Option<&'static str>) -> Self {
        match image_url {
            Some(src) => Self::WithImage(src),
            None => Self::Placeholder,
        }
    }

    /// Image address, if the reference has one.
    pub const fn image_url(&self) -> Option<&'static str> {
        match *self {
            Self::WithImage(src) => Some(src),
            Self::Placeholder => None,
        }
    }
}

/// A completed customer project shown in the portfolio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Project name
    pub title: &'static str,
    /// Place name
    pub location: &'static str,
    /// Photo or placeholder, fixed when the entry is defined
    pub visual: ReferenceVisual,
}

impl Reference {
    /// Build an entry; a missing image becomes [`ReferenceVisual::Placeholder`].
    pub const fn new(
        title: &'static str,
        location: &'static str,
        image_url: Option<&'static str>,
    ) -> Self {
        Self {
            title,
            location,
            visual: ReferenceVisual::from_image(image_url),
        }
    }

    /// Alt text for the project photo.
    pub fn image_alt(&self) -> String {
        format!("{} - {}", self.title, self.location)
    }
}

/// Static contact block data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    /// Contact person
    pub person: &'static str,
    /// Their role in the company
    pub role: &'static str,
    /// Phone number as displayed
    pub phone_display: &'static str,
    /// `tel:` URI for the phone link
    pub phone_uri: &'static str,
    /// E-mail address
    pub email: &'static str,
    /// Postal address
    pub address: &'static str,
    /// Company registration number line
    pub registration: &'static str,
}

impl ContactDetails {
    /// `mailto:` URI for the email link.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Header navigation, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { name: "Služby", href: "#services" },
    NavLink { name: "Reference", href: "#references" },
    NavLink { name: "O nás", href: "#about" },
    NavLink { name: "Kontakt", href: "#contact" },
];

/// Service categories, in display order.
pub const SERVICES: [Service; 9] = [
    Service { name: "Zednické práce", icon_url: tabler_icon!("trowel") },
    Service { name: "Obklady a dlažby", icon_url: tabler_icon!("layout-grid") },
    Service { name: "Sádrokartonářské práce", icon_url: tabler_icon!("wall") },
    Service { name: "Zateplení fasády", icon_url: tabler_icon!("building-skyscraper") },
    Service { name: "Stavby na klíč", icon_url: tabler_icon!("key") },
    Service { name: "Rekonstrukce", icon_url: tabler_icon!("home-cog") },
    Service { name: "Zámková dlažba", icon_url: tabler_icon!("road") },
    Service { name: "Střechy", icon_url: tabler_icon!("roof") },
    Service { name: "Bourací a výkopové práce", icon_url: tabler_icon!("bulldozer") },
];

/// Portfolio entries. Two of them have no photo yet.
pub const REFERENCES: [Reference; 4] = [
    Reference::new(
        "Oprava fasády",
        "Tanvald",
        Some("/images/project-tanvald-cottage-renovation-after.jpg"),
    ),
    Reference::new(
        "Celková rekonstrukce rodinného domu",
        "Praha",
        Some("/images/project-family-house-reconstruction-after.jpg"),
    ),
    Reference::new("Rekonstrukce bytu", "Liberec", None),
    Reference::new("Pokládka dlažby", "Železný Brod", None),
];

/// Contact block content.
pub const CONTACT: ContactDetails = ContactDetails {
    person: "Marcel Bílek",
    role: "Jednatel společnosti",
    phone_display: "737 383 621",
    phone_uri: "tel:+420737383621",
    email: "info@vseprostavby.cz",
    address: "Maršovice 159, 468 21",
    registration: "IČO: 75017009",
};

/// Hero background photo.
pub const HERO_IMAGE: &str = "/images/project-family-house-reconstruction-after.jpg";

/// Company paragraph for the about section.
pub const ABOUT_TEXT: &str = "Naše společnost VŠE PRO STAVBY.CZ vznikla v roce 2010. \
Hlavní naší činností jsou stavební práce, rekonstrukce a výstavby rodinných domů na klíč. \
Zajišťujeme veškeré řemeslné práce spojené se stavebnictvím. \
Cílem naší společnosti je především spokojený zákazník, kterého provázíme celým procesem stavby.";

/// Footer attribution target.
pub const ATTRIBUTION_URL: &str = "https://digitalfusion.cz";

/// Snapshot of every content list, for export.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteContent {
    /// Header navigation
    pub nav_links: &'static [NavLink],
    /// Services grid
    pub services: &'static [Service],
    /// References gallery
    pub references: &'static [Reference],
    /// Contact block
    pub contact: &'static ContactDetails,
}

impl SiteContent {
    /// The compiled-in site content.
    pub fn current() -> Self {
        Self {
            nav_links: &NAV_LINKS,
            services: &SERVICES,
            references: &REFERENCES,
            contact: &CONTACT,
        }
    }

    /// Serialize to JSON, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

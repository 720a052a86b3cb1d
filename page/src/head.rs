//! Document head values and the one-shot startup initialization.
//!
//! The static renderer writes [`PAGE_HEAD`] straight into `<head>`. In the
//! browser, [`initialize`] is called once before mounting and applies the
//! same values through a [`DocumentHead`] implementation.

use thiserror::Error;

/// Title and favicon for the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageHead {
    /// `document.title`
    pub title: &'static str,
    /// `href` of the `link[rel~='icon']` element
    pub favicon_url: &'static str,
}

/// The values every page load applies.
pub const PAGE_HEAD: PageHead = PageHead {
    title: "VŠE PRO STAVBY.CZ - Stavební práce, Rekonstrukce, Výstavba RD",
    favicon_url: "https://via.placeholder.com/32x32/1E40AF/FFFFFF?text=VS",
};

/// Errors raised while applying head values to a live document.
#[derive(Debug, Error)]
pub enum HeadError {
    /// No global `window` (not running in a browser)
    #[error("no window object available")]
    NoWindow,
    /// The window has no document
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<head>` to append the favicon link to
    #[error("document has no <head> element")]
    NoHead,
    /// A DOM call was rejected
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// The subset of a document that head initialization touches.
pub trait DocumentHead {
    /// Set the document title.
    fn set_title(&mut self, title: &str) -> Result<(), HeadError>;

    /// Point the favicon link at `href`, creating the link when the document
    /// has none.
    fn set_favicon(&mut self, href: &str) -> Result<(), HeadError>;
}

/// Apply [`PAGE_HEAD`] to `doc`. Call once at startup; there is no teardown.
pub fn initialize<D: DocumentHead + ?Sized>(doc: &mut D) -> Result<(), HeadError> {
    apply(doc, &PAGE_HEAD)
}

/// Apply arbitrary head values to `doc`.
pub fn apply<D: DocumentHead + ?Sized>(doc: &mut D, head: &PageHead) -> Result<(), HeadError> {
    doc.set_title(head.title)?;
    doc.set_favicon(head.favicon_url)?;
    tracing::debug!(title = head.title, favicon = head.favicon_url, "document head initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory document: a title and the `href`s of its icon links.
    #[derive(Default)]
    struct FakeDocument {
        title: String,
        icon_links: Vec<String>,
        reject_favicon: bool,
    }

    impl DocumentHead for FakeDocument {
        fn set_title(&mut self, title: &str) -> Result<(), HeadError> {
            self.title = title.to_string();
            Ok(())
        }

        fn set_favicon(&mut self, href: &str) -> Result<(), HeadError> {
            if self.reject_favicon {
                return Err(HeadError::Dom("appendChild".into()));
            }
            match self.icon_links.first_mut() {
                Some(link) => *link = href.to_string(),
                None => self.icon_links.push(href.to_string()),
            }
            Ok(())
        }
    }

    #[test]
    fn sets_title_and_creates_favicon() {
        let mut doc = FakeDocument::default();
        initialize(&mut doc).unwrap();

        assert_eq!(doc.title, "VŠE PRO STAVBY.CZ - Stavební práce, Rekonstrukce, Výstavba RD");
        assert_eq!(
            doc.icon_links,
            vec!["https://via.placeholder.com/32x32/1E40AF/FFFFFF?text=VS".to_string()]
        );
    }

    #[test]
    fn reuses_existing_favicon_link() {
        let mut doc = FakeDocument {
            icon_links: vec!["/favicon.ico".into()],
            ..Default::default()
        };
        initialize(&mut doc).unwrap();

        assert_eq!(doc.icon_links.len(), 1);
        assert_eq!(doc.icon_links[0], PAGE_HEAD.favicon_url);
    }

    #[test]
    fn repeated_initialization_is_stable() {
        let mut doc = FakeDocument::default();
        initialize(&mut doc).unwrap();
        initialize(&mut doc).unwrap();

        assert_eq!(doc.icon_links.len(), 1);
        assert_eq!(doc.title, PAGE_HEAD.title);
    }

    #[test]
    fn propagates_dom_errors() {
        let mut doc = FakeDocument {
            reject_favicon: true,
            ..Default::default()
        };
        let err = initialize(&mut doc).unwrap_err();

        assert!(matches!(err, HeadError::Dom(_)));
        assert_eq!(err.to_string(), "DOM operation failed: appendChild");
        // title is applied before the favicon
        assert_eq!(doc.title, PAGE_HEAD.title);
    }
}

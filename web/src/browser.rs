//! [`DocumentHead`] for the live browser document.

use vseprostavby_page::head::{DocumentHead, HeadError};
use wasm_bindgen::JsValue;

/// Selector matching any favicon link (`rel="icon"`, `rel="shortcut icon"`).
const ICON_SELECTOR: &str = "link[rel~='icon']";

/// The page's `window.document`.
pub struct BrowserDocument;

impl BrowserDocument {
    fn document() -> Result<web_sys::Document, HeadError> {
        web_sys::window()
            .ok_or(HeadError::NoWindow)?
            .document()
            .ok_or(HeadError::NoDocument)
    }
}

fn dom_err(err: JsValue) -> HeadError {
    HeadError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl DocumentHead for BrowserDocument {
    fn set_title(&mut self, title: &str) -> Result<(), HeadError> {
        Self::document()?.set_title(title);
        Ok(())
    }

    fn set_favicon(&mut self, href: &str) -> Result<(), HeadError> {
        let document = Self::document()?;
        let link = match document.query_selector(ICON_SELECTOR).map_err(dom_err)? {
            Some(link) => link,
            None => {
                let link = document.create_element("link").map_err(dom_err)?;
                link.set_attribute("rel", "icon").map_err(dom_err)?;
                document
                    .head()
                    .ok_or(HeadError::NoHead)?
                    .append_child(&link)
                    .map_err(dom_err)?;
                link
            }
        };
        link.set_attribute("href", href).map_err(dom_err)
    }
}

/// Log to the browser console.
pub fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use vseprostavby_page::head::{PAGE_HEAD, initialize};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn initializes_live_document() {
        initialize(&mut BrowserDocument).unwrap();

        let document = BrowserDocument::document().unwrap();
        assert_eq!(document.title(), PAGE_HEAD.title);

        let link = document.query_selector(ICON_SELECTOR).unwrap().unwrap();
        assert_eq!(link.get_attribute("href").as_deref(), Some(PAGE_HEAD.favicon_url));
    }

    #[wasm_bindgen_test]
    fn does_not_duplicate_icon_link() {
        initialize(&mut BrowserDocument).unwrap();
        initialize(&mut BrowserDocument).unwrap();

        let document = BrowserDocument::document().unwrap();
        let links = document.query_selector_all(ICON_SELECTOR).unwrap();
        assert_eq!(links.length(), 1);
    }
}

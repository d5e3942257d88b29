/// Orthoview Web - HTML/SVG renderer for the projection explorer
///
/// Renders the projection page as a standalone HTML document, and exposes a
/// WASM entry point that mounts the same markup into a browser document.

use wasm_bindgen::prelude::*;

pub mod diagram;
pub mod markup;
pub mod page;

pub use diagram::Diagram;
pub use page::{Page, STYLESHEET};

use orthoview_core::{PAGE_DESCRIPTION, PAGE_TITLE};

const STYLE_ELEMENT_ID: &str = "orthoview-style";

/// Head entries a standalone document carries and `mount` installs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadContent {
    pub title: &'static str,
    pub description: &'static str,
    pub stylesheet: &'static str,
}

pub const HEAD: HeadContent = HeadContent {
    title: PAGE_TITLE,
    description: PAGE_DESCRIPTION,
    stylesheet: STYLESHEET,
};

#[wasm_bindgen]
pub struct PageRenderer {
    page: Page<'static>,
}

#[wasm_bindgen]
impl PageRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PageRenderer {
        PageRenderer {
            page: Page::default(),
        }
    }

    /// Render the full HTML document
    pub fn render(&self) -> String {
        self.page.to_string()
    }

    /// Install title, description and stylesheet into the document head and
    /// replace the element's content with the page
    pub fn mount(&self, element_id: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id `{element_id}`")))?;
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no head"))?;

        document.set_title(HEAD.title);

        let meta = match document.query_selector(r#"meta[name="description"]"#)? {
            Some(meta) => meta,
            None => {
                let meta = document.create_element("meta")?;
                meta.set_attribute("name", "description")?;
                head.append_child(&meta)?;
                meta
            }
        };
        meta.set_attribute("content", HEAD.description)?;

        // Reuse the style element across mounts
        let style = match document.get_element_by_id(STYLE_ELEMENT_ID) {
            Some(style) => style,
            None => {
                let style = document.create_element("style")?;
                style.set_id(STYLE_ELEMENT_ID);
                head.append_child(&style)?;
                style
            }
        };
        style.set_text_content(Some(HEAD.stylesheet));

        element.set_inner_html(&self.page.render_main());
        log::debug!("mounted projection page into #{element_id}");
        Ok(())
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_matches_default_page() {
        let renderer = PageRenderer::new();
        assert_eq!(renderer.render(), Page::default().to_string());
    }

    #[test]
    fn test_mounted_head_matches_document_head() {
        let html = PageRenderer::new().render();
        assert!(html.contains(&format!("<title>{}</title>", HEAD.title)));
        assert!(html.contains(&format!(
            r#"<meta name="description" content="{}">"#,
            HEAD.description
        )));
        assert!(html.contains(&format!("<style>\n{}</style>", HEAD.stylesheet)));
    }
}

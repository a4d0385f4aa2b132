use crate::describe;
use p5rs_common::SketchError;
use p5rs_core::{Document, MountPoint};

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn current() -> Result<Self, SketchError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SketchError::host("no document available"))?;
        Ok(Self { document })
    }

    pub(crate) fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Document for WebDocument {
    type Mount = WebMount;

    fn query(&self, selector: &str) -> Result<Option<WebMount>, SketchError> {
        self.document
            .query_selector(selector)
            .map(|element| element.map(WebMount))
            .map_err(|err| SketchError::host(format!("invalid selector `{selector}`: {}", describe(&err))))
    }
}

/// The element the sketch's canvas is created in.
#[derive(Debug, Clone)]
pub struct WebMount(web_sys::Element);

impl WebMount {
    pub fn element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl MountPoint for WebMount {
    fn clear(&self) {
        self.0.set_inner_html("");
    }
}

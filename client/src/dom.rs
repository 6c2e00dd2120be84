use hoops_pool_shared::StandingsView;
use web_sys::{Document, Element};

pub struct DomView {
    document: Document,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn container(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            web_sys::console::warn_1(&format!("Missing page container #{id}").into());
        }
        element
    }
}

impl StandingsView for DomView {
    fn set_text(&self, container_id: &str, text: &str) {
        if let Some(element) = self.container(container_id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_inner_html(&self, container_id: &str, html: &str) {
        if let Some(element) = self.container(container_id) {
            element.set_inner_html(html);
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn console_bindings_are_enabled() {
        // Only resolves when web-sys is built with its `console` feature.
        let error: fn(&wasm_bindgen::JsValue) = web_sys::console::error_1;
        let warn: fn(&wasm_bindgen::JsValue) = web_sys::console::warn_1;
        let _ = (error, warn);
    }
}

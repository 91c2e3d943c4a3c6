use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::viewer::ports::{TabButton, TabStrip};

const BUTTON_SELECTOR: &str = "button[data-key]";
const BUTTON_CLASS: &str = "tab btn small";

/// Tab container; one `<button data-key>` per item.
pub struct TabContainer {
    document: Document,
    container: Element,
}

impl TabContainer {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    pub fn element(&self) -> &Element {
        &self.container
    }
}

impl TabStrip for TabContainer {
    fn render(&self, buttons: &[TabButton]) {
        self.container.set_inner_html("");
        for button in buttons {
            let Ok(node) = self.document.create_element("button") else {
                continue;
            };
            let _ = node.set_attribute("type", "button");
            let _ = node.set_attribute("data-key", &button.key);
            node.set_class_name(BUTTON_CLASS);
            node.set_text_content(Some(&button.text));
            let _ = self.container.append_child(&node);
        }
    }

    fn set_active(&self, key: &str) {
        let Ok(nodes) = self.container.query_selector_all(BUTTON_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(node) = nodes.get(i) else { continue };
            let Ok(button) = node.dyn_into::<Element>() else {
                continue;
            };
            let active = button.get_attribute("data-key").as_deref() == Some(key);
            let classes = button.class_list();
            let _ = classes.toggle_with_force("active", active);
            let _ = classes.toggle_with_force("primary", active);
        }
    }
}

/// Key of the tab button a click landed on, if any.
pub fn clicked_key(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(BUTTON_SELECTOR).ok()??;
    button.get_attribute("data-key")
}

use web_sys::{Element, HtmlElement};

use crate::viewer::ports::{HintDisplay, TextSink, ToggleButton};

/// Element whose whole text content is replaced (status, title).
pub struct TextNode(pub Element);

impl TextSink for TextNode {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Network hint paragraph, collapsed when hidden.
pub struct HintNode(pub HtmlElement);

impl HintDisplay for HintNode {
    fn show(&self, text: &str) {
        self.0.set_text_content(Some(text));
        let _ = self.0.style().set_property("display", "block");
    }

    fn hide(&self) {
        let _ = self.0.style().set_property("display", "none");
    }
}

/// Rotate button: label, `aria-pressed` and `active` class follow the flag.
pub struct RotateButton(pub Element);

impl ToggleButton for RotateButton {
    fn set_pressed(&self, pressed: bool) {
        self.0
            .set_text_content(Some(if pressed { "Stop" } else { "Rotate" }));
        let _ = self
            .0
            .set_attribute("aria-pressed", if pressed { "true" } else { "false" });
        let _ = self.0.class_list().toggle_with_force("active", pressed);
    }
}

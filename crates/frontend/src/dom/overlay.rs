//! Loading overlay with a progress bar.
//!
//! Fading is left to the page CSS (`.loading-overlay.hidden`); collapsing
//! sets `display: none` so the faded overlay stops covering the controls.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::viewer::ports::LoadingOverlay;

const HIDDEN_CLASS: &str = "hidden";

const OVERLAY_MARKUP: &str = r#"
  <div class="loading-card">
    <div class="loading-title">Loading 3D model</div>
    <div class="loading-sub"></div>
    <div class="loading-bar"><div class="loading-bar__fill"></div></div>
    <div class="loading-pct">0%</div>
  </div>
"#;

pub struct OverlayNode {
    root: HtmlElement,
}

impl OverlayNode {
    pub fn new(root: HtmlElement) -> Self {
        Self { root }
    }

    /// Reuse the element with `id` or build one inside the widget's parent.
    pub fn ensure(document: &Document, widget: &Element, id: &str) -> Option<Self> {
        if let Some(existing) = document.get_element_by_id(id) {
            return existing.dyn_into::<HtmlElement>().ok().map(Self::new);
        }

        let host = widget
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
            .or_else(|| document.body())?;
        let root = document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        root.set_id(id);
        root.set_class_name("loading-overlay hidden");
        root.set_inner_html(OVERLAY_MARKUP);

        let host_style = host.style();
        if host_style
            .get_property_value("position")
            .map(|position| position.is_empty())
            .unwrap_or(true)
        {
            let _ = host_style.set_property("position", "relative");
        }
        host.append_child(&root).ok()?;
        log::debug!("[viewer] created overlay #{}", id);
        Some(Self::new(root))
    }

    /// Overlay belonging to a widget on an auto-hide page: first inside the
    /// widget's parent, then anywhere on the page.
    pub fn find_for(document: &Document, widget: &Element) -> Option<Self> {
        const SELECTORS: [&str; 2] = ["#loadingOverlay", ".loading-overlay"];

        let scoped = widget.parent_element().and_then(|parent| {
            SELECTORS
                .iter()
                .find_map(|selector| parent.query_selector(selector).ok().flatten())
        });
        let found = scoped.or_else(|| {
            SELECTORS
                .iter()
                .find_map(|selector| document.query_selector(selector).ok().flatten())
        })?;
        found.dyn_into::<HtmlElement>().ok().map(Self::new)
    }

    fn part(&self, selector: &str) -> Option<Element> {
        self.root.query_selector(selector).ok().flatten()
    }
}

impl LoadingOverlay for OverlayNode {
    fn show(&self) {
        let _ = self.root.style().remove_property("display");
        let _ = self.root.class_list().remove_1(HIDDEN_CLASS);
    }

    fn fade_out(&self) {
        let _ = self.root.class_list().add_1(HIDDEN_CLASS);
    }

    fn collapse(&self) {
        let _ = self.root.style().set_property("display", "none");
    }

    fn set_percent(&self, percent: u8) {
        let percent = percent.min(100);
        if let Some(fill) = self
            .part(".loading-bar__fill")
            .and_then(|fill| fill.dyn_into::<HtmlElement>().ok())
        {
            let _ = fill.style().set_property("width", &format!("{}%", percent));
        }
        if let Some(label) = self.part(".loading-pct") {
            label.set_text_content(Some(&format!("{}%", percent)));
        }
    }

    fn set_caption(&self, text: &str) {
        if let Some(sub) = self.part(".loading-sub") {
            sub.set_text_content(Some(text));
        }
    }
}

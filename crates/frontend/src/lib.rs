pub mod dom;
pub mod viewer;

use contracts::{ConfigError, ElementIds, ViewerConfig};
use wasm_bindgen::prelude::*;

use crate::dom::registry;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Controller mounted on the page. Freeing the handle leaves the viewer
/// running; call `detach` to stop it.
#[wasm_bindgen]
pub struct ViewerHandle {
    id: u32,
}

#[wasm_bindgen]
impl ViewerHandle {
    /// Select an item by key. Unknown keys are ignored and return `false`.
    pub fn select(&self, key: &str) -> bool {
        registry::controller(self.id).is_some_and(|controller| controller.borrow_mut().select_item(key))
    }

    #[wasm_bindgen(js_name = toggleRotate)]
    pub fn toggle_rotate(&self) -> Option<bool> {
        registry::controller(self.id).map(|controller| controller.borrow_mut().toggle_rotate())
    }

    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&self) {
        if let Some(controller) = registry::controller(self.id) {
            controller.borrow_mut().reset_view();
        }
    }

    #[wasm_bindgen(js_name = activeKey)]
    pub fn active_key(&self) -> Option<String> {
        registry::controller(self.id)
            .and_then(|controller| controller.borrow().active_key().map(str::to_string))
    }

    /// Stop dispatching page events to this viewer. In-flight model fetches
    /// are the widget's business and keep running.
    pub fn detach(&self) -> bool {
        registry::detach(self.id)
    }
}

fn mount(config: Result<ViewerConfig, ConfigError>) -> Option<ViewerHandle> {
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            let document = dom::document().ok();
            report_with_defaults(document.as_ref(), &err);
            return None;
        }
    };
    dom::mount_tabbed_viewer(&config)
        .ok()
        .map(|id| ViewerHandle { id })
}

fn report_with_defaults(document: Option<&web_sys::Document>, err: &ConfigError) {
    dom::report(document, &ElementIds::default().status, err);
}

/// `setupTabbedViewer({ items: [...] })`. Never throws: configuration
/// problems end up in the status node and the console, and `undefined` is
/// returned.
#[wasm_bindgen(js_name = setupTabbedViewer)]
pub fn setup_tabbed_viewer(config: JsValue) -> Option<ViewerHandle> {
    let config = serde_wasm_bindgen::from_value::<ViewerConfig>(config)
        .map_err(|err| ConfigError::InvalidConfig(err.to_string()));
    mount(config)
}

#[wasm_bindgen(js_name = setupTabbedViewerFromJson)]
pub fn setup_tabbed_viewer_from_json(json: &str) -> Option<ViewerHandle> {
    mount(ViewerConfig::from_json(json))
}

/// Read the configuration from `<script type="application/json" id=...>`.
#[wasm_bindgen(js_name = setupFromScript)]
pub fn setup_from_script(script_id: &str) -> Option<ViewerHandle> {
    let config = dom::document().and_then(|document| {
        let text = document
            .get_element_by_id(script_id)
            .and_then(|script| script.text_content())
            .ok_or_else(|| ConfigError::MissingElement(script_id.to_string()))?;
        ViewerConfig::from_json(&text)
    });
    mount(config)
}

/// Hide the loading overlay of every `<model-viewer>` once it has loaded.
/// Waits for `DOMContentLoaded` when called while the page is still parsing.
#[wasm_bindgen(js_name = attachLoadingOverlays)]
pub fn attach_loading_overlays() {
    let Ok(document) = dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        dom::autohide::attach_all(&document);
        return;
    }
    let target = document.clone();
    if let Some(subscription) =
        dom::events::EventSubscription::listen(&document, "DOMContentLoaded", move |_| {
            dom::autohide::attach_all(&target);
        })
    {
        subscription.forget();
    }
}

//! Auto-hide of loading overlays for every `<model-viewer>` on the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::viewer::ports::Scheduler;
use crate::viewer::{OverlayAutoHide, LOAD_FALLBACK_DELAY};

use super::events::{total_progress, EventSubscription};
use super::overlay::OverlayNode;
use super::timers::BrowserScheduler;
use super::widget::ModelViewerElement;

const MARKER_ATTR: &str = "data-overlay-autohide";

/// Attach a watcher to each widget that has an overlay. Widgets already
/// watched are skipped. Returns the number of new watchers.
pub fn attach_all(document: &Document) -> usize {
    let Ok(nodes) = document.query_selector_all("model-viewer") else {
        return 0;
    };
    let mut attached = 0;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(widget) = node.dyn_into::<Element>() else {
            continue;
        };
        if widget.has_attribute(MARKER_ATTR) {
            continue;
        }
        let Some(overlay) = OverlayNode::find_for(document, &widget) else {
            continue;
        };
        attach_one(widget, overlay);
        attached += 1;
    }
    log::debug!("[viewer] overlay auto-hide attached to {} widget(s)", attached);
    attached
}

fn attach_one(widget: Element, overlay: OverlayNode) {
    let _ = widget.set_attribute(MARKER_ATTR, "");
    let watcher = Rc::new(RefCell::new(OverlayAutoHide::new(
        Rc::new(overlay),
        Rc::new(BrowserScheduler),
    )));

    let on_progress = Rc::clone(&watcher);
    if let Some(subscription) = EventSubscription::listen(&widget, "progress", move |event| {
        on_progress.borrow_mut().on_progress(total_progress(&event));
    }) {
        subscription.forget();
    }

    let on_load = Rc::clone(&watcher);
    if let Some(subscription) = EventSubscription::listen(&widget, "load", move |_| {
        on_load.borrow_mut().on_loaded();
    }) {
        subscription.forget();
    }

    let model = ModelViewerElement::new(widget);
    BrowserScheduler.defer(
        LOAD_FALLBACK_DELAY,
        Box::new(move || watcher.borrow_mut().poll(&model)),
    );
}

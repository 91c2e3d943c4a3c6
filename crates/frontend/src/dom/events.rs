//! Event subscriptions that can be cancelled again.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Event, EventTarget};

pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(err) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("[viewer] cannot listen to '{}': {:?}", event, err);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Stop dispatching to the handler and release it.
    pub fn cancel(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }

    /// Keep the listener for the lifetime of the page.
    pub fn forget(self) {
        self.callback.forget();
    }
}

/// `event.detail.totalProgress` of a model-viewer `progress` event.
pub fn total_progress(event: &Event) -> Option<f64> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    Reflect::get(&detail, &JsValue::from_str("totalProgress"))
        .ok()?
        .as_f64()
}

//! `<model-viewer>` behind the [`ModelWidget`] port.
//!
//! Attributes are used where the element reflects them; the few imperative
//! methods (`jumpCameraToGoal`, `resetTurntableRotation`, ...) are probed
//! through `Reflect` and silently skipped when the element version lacks them.

use contracts::CameraSnapshot;
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::viewer::ports::ModelWidget;

const ATTR_SRC: &str = "src";
const ATTR_AUTO_ROTATE: &str = "auto-rotate";
const ATTR_CAMERA_ORBIT: &str = "camera-orbit";
const ATTR_FIELD_OF_VIEW: &str = "field-of-view";
const ATTR_EXPOSURE: &str = "exposure";
const ATTR_IOS_SRC: &str = "ios-src";

pub struct ModelViewerElement {
    element: Element,
}

impl ModelViewerElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let Err(err) = self.element.set_attribute(name, value) {
            log::warn!("[viewer] cannot set {}: {:?}", name, err);
        }
    }

    fn set_or_remove(&self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.set_attr(name, value),
            None => {
                let _ = self.element.remove_attribute(name);
            }
        }
    }

    fn set_prop(&self, name: &str, value: &str) {
        let _ = Reflect::set(&self.element, &JsValue::from_str(name), &JsValue::from_str(value));
    }
}

/// Call a zero-argument method if the object has one.
pub(crate) fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    let method = Reflect::get(target, &JsValue::from_str(name))?;
    let method: Function = method.dyn_into()?;
    method.call0(target)
}

impl ModelWidget for ModelViewerElement {
    fn set_src(&self, src: &str) {
        self.set_attr(ATTR_SRC, src);
    }

    fn ensure_defaults(&self) {
        if !self.element.has_attribute("camera-controls") {
            self.set_attr("camera-controls", "");
        }
        if !self.element.has_attribute("environment-image") {
            self.set_attr("environment-image", "neutral");
        }
    }

    fn disable_ar(&self) {
        let _ = self.element.remove_attribute(ATTR_IOS_SRC);
    }

    fn reframe(&self) {
        self.set_prop("cameraOrbit", "auto auto auto");
        self.set_prop("cameraTarget", "auto auto auto");
        self.set_prop("fieldOfView", "auto");

        // the new goal only exists after the element processed the props
        let target: JsValue = self.element.clone().into();
        let jump = Closure::once_into_js(move || {
            let _ = call_method(&target, "jumpCameraToGoal");
        });
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(jump.unchecked_ref());
        }
    }

    fn auto_rotate(&self) -> bool {
        self.element.has_attribute(ATTR_AUTO_ROTATE)
    }

    fn set_auto_rotate(&self, enabled: bool) {
        self.set_or_remove(ATTR_AUTO_ROTATE, enabled.then_some(""));
    }

    fn camera_snapshot(&self) -> Option<CameraSnapshot> {
        Some(CameraSnapshot {
            camera_orbit: self.element.get_attribute(ATTR_CAMERA_ORBIT),
            field_of_view: self.element.get_attribute(ATTR_FIELD_OF_VIEW),
            exposure: self.element.get_attribute(ATTR_EXPOSURE),
            auto_rotate: self.auto_rotate(),
        })
    }

    fn apply_camera(&self, snapshot: &CameraSnapshot) {
        self.set_or_remove(ATTR_CAMERA_ORBIT, snapshot.camera_orbit.as_deref());
        self.set_or_remove(ATTR_FIELD_OF_VIEW, snapshot.field_of_view.as_deref());
        self.set_or_remove(ATTR_EXPOSURE, snapshot.exposure.as_deref());
        self.set_auto_rotate(snapshot.auto_rotate);
        let _ = call_method(&self.element, "jumpCameraToGoal");
    }

    fn reset_turntable(&self) {
        for method in ["resetTurntableRotation", "resetCameraOrbit"] {
            if call_method(&self.element, method).is_err() {
                log::debug!("[viewer] {} not available", method);
            }
        }
    }

    fn is_loaded(&self) -> bool {
        Reflect::get(&self.element, &JsValue::from_str("loaded"))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }
}

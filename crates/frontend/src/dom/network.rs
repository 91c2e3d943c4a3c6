//! `navigator.connection` probe. Non-standard, so every access is defensive
//! and any failure reads as "capability unavailable".

use contracts::{ConnectionReading, NetworkProbe};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::EventTarget;

use crate::viewer::ports::ConnectionSource;

const CONNECTION_PROPS: [&str; 3] = ["connection", "mozConnection", "webkitConnection"];

pub struct NavigatorConnection;

impl NavigatorConnection {
    fn connection() -> Option<JsValue> {
        let navigator = web_sys::window()?.navigator();
        CONNECTION_PROPS.iter().find_map(|prop| {
            Reflect::get(&navigator, &JsValue::from_str(prop))
                .ok()
                .filter(|value| value.is_object())
        })
    }

    /// Target for `change` notifications, when the runtime offers them.
    pub fn change_target() -> Option<EventTarget> {
        let connection = Self::connection()?;
        let add = Reflect::get(&connection, &JsValue::from_str("addEventListener")).ok()?;
        if !add.is_function() {
            return None;
        }
        Some(connection.unchecked_into::<EventTarget>())
    }
}

fn read_string(target: &JsValue, prop: &str) -> Option<String> {
    Reflect::get(target, &JsValue::from_str(prop))
        .ok()
        .and_then(|value| value.as_string())
}

impl ConnectionSource for NavigatorConnection {
    fn probe(&self) -> NetworkProbe {
        let Some(connection) = Self::connection() else {
            return NetworkProbe::Unavailable;
        };
        let save_data = Reflect::get(&connection, &JsValue::from_str("saveData"))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        NetworkProbe::Available(ConnectionReading {
            save_data,
            connection_type: read_string(&connection, "type"),
            effective_type: read_string(&connection, "effectiveType"),
        })
    }
}

//! Binds a [`ViewerController`] to the elements of a real page.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::{Catalog, ConfigError, ViewerConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, EventTarget, HtmlElement};

use crate::viewer::ports::{SystemClock, TextSink, ViewerHandles};
use crate::viewer::{ControllerOptions, ViewerController};

use super::events::{total_progress, EventSubscription};
use super::network::NavigatorConnection;
use super::overlay::OverlayNode;
use super::registry::{self, MountedViewer};
use super::tabs::{clicked_key, TabContainer};
use super::text::{HintNode, RotateButton, TextNode};
use super::timers::BrowserScheduler;
use super::widget::ModelViewerElement;

pub fn document() -> Result<Document, ConfigError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ConfigError::InvalidConfig("no document available".into()))
}

/// Write a setup failure where the page can see it, if it has a status node.
pub fn report(document: Option<&Document>, status_id: &str, err: &ConfigError) {
    log::error!("[viewer] {}", err);
    if let Some(status) = document.and_then(|doc| doc.get_element_by_id(status_id)) {
        TextNode(status).set_text(&err.to_string());
    }
}

/// Run `action` on the controller, or right after the current handler if
/// the controller is busy (an event fired synchronously from inside one of
/// its own updates).
fn dispatch<F>(controller: &Rc<RefCell<ViewerController>>, action: F)
where
    F: FnOnce(&mut ViewerController) + 'static,
{
    match controller.try_borrow_mut() {
        Ok(mut controller) => action(&mut controller),
        Err(_) => {
            let controller = Rc::clone(controller);
            spawn_local(async move {
                if let Ok(mut controller) = controller.try_borrow_mut() {
                    action(&mut controller);
                }
            });
        }
    }
}

fn subscribe<F>(
    subscriptions: &mut Vec<EventSubscription>,
    target: &EventTarget,
    event: &'static str,
    controller: &Rc<RefCell<ViewerController>>,
    action: F,
) where
    F: Fn(&mut ViewerController, &web_sys::Event) + 'static,
{
    let controller = Rc::clone(controller);
    let action = Rc::new(action);
    let subscription = EventSubscription::listen(target, event, move |event| {
        let action = Rc::clone(&action);
        dispatch(&controller, move |controller| (*action)(controller, &event));
    });
    subscriptions.extend(subscription);
}

fn html_element(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

/// Mount a tabbed viewer and return its registry id.
pub fn mount_tabbed_viewer(config: &ViewerConfig) -> Result<u32, ConfigError> {
    let document = document()?;
    let ids = &config.elements;

    let Some(widget_element) = document.get_element_by_id(&ids.widget) else {
        let err = ConfigError::MissingElement(ids.widget.clone());
        report(Some(&document), &ids.status, &err);
        return Err(err);
    };
    let catalog = Catalog::from_configs(&config.items).inspect_err(|err| {
        report(Some(&document), &ids.status, err);
    })?;
    let Some(overlay) = OverlayNode::ensure(&document, &widget_element, &ids.overlay) else {
        let err = ConfigError::MissingElement(ids.overlay.clone());
        report(Some(&document), &ids.status, &err);
        return Err(err);
    };

    let tabs_element = document.get_element_by_id(&ids.tabs);
    let rotate_element = document.get_element_by_id(&ids.rotate_button);
    let reset_element = document.get_element_by_id(&ids.reset_button);

    let connection_target = NavigatorConnection::change_target();
    let handles = ViewerHandles {
        widget: Rc::new(ModelViewerElement::new(widget_element.clone())),
        overlay: Rc::new(overlay),
        tabs: tabs_element
            .clone()
            .map(|element| Rc::new(TabContainer::new(document.clone(), element)) as _),
        status: document
            .get_element_by_id(&ids.status)
            .map(|element| Rc::new(TextNode(element)) as _),
        title: document
            .get_element_by_id(&ids.title)
            .map(|element| Rc::new(TextNode(element)) as _),
        hint: document
            .get_element_by_id(&ids.net_hint)
            .and_then(html_element)
            .map(|element| Rc::new(HintNode(element)) as _),
        rotate_button: rotate_element
            .clone()
            .map(|element| Rc::new(RotateButton(element)) as _),
        connection: Rc::new(NavigatorConnection),
        scheduler: Rc::new(BrowserScheduler),
        clock: Rc::new(SystemClock),
    };

    let controller =
        ViewerController::new(catalog, ControllerOptions::from(config), handles).into_shared();

    let mut subscriptions = Vec::new();
    subscribe(&mut subscriptions, &widget_element, "progress", &controller, |c, event| {
        c.on_progress(total_progress(event))
    });
    subscribe(&mut subscriptions, &widget_element, "load", &controller, |c, _| c.on_loaded());
    subscribe(&mut subscriptions, &widget_element, "error", &controller, |c, _| c.on_error());

    if let Some(tabs) = &tabs_element {
        subscribe(&mut subscriptions, tabs, "click", &controller, |c, event| {
            if let Some(key) = clicked_key(event) {
                c.select_item(&key);
            }
        });
    }
    if let Some(button) = &rotate_element {
        subscribe(&mut subscriptions, button, "click", &controller, |c, _| {
            c.toggle_rotate();
        });
    }
    if let Some(button) = &reset_element {
        subscribe(&mut subscriptions, button, "click", &controller, |c, _| c.reset_view());
    }
    if let Some(target) = &connection_target {
        subscribe(&mut subscriptions, target, "change", &controller, |c, _| {
            c.on_connection_change()
        });
    }

    // the first selection ran before the controller was shared
    controller.borrow().schedule_load_check();

    Ok(registry::register(MountedViewer {
        widget_id: ids.widget.clone(),
        controller,
        subscriptions,
    }))
}

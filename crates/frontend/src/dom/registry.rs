//! Controllers mounted on this page.
//!
//! Handles given to JS only carry an id: dropping or freeing a handle must
//! not tear the viewer down, only an explicit `detach` does.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::viewer::ViewerController;

use super::events::EventSubscription;

pub struct MountedViewer {
    pub widget_id: String,
    pub controller: Rc<RefCell<ViewerController>>,
    pub subscriptions: Vec<EventSubscription>,
}

impl MountedViewer {
    fn cancel(self) {
        for subscription in self.subscriptions {
            subscription.cancel();
        }
    }
}

thread_local! {
    static VIEWERS: RefCell<HashMap<u32, MountedViewer>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

/// Register a viewer, detaching any earlier one bound to the same widget.
pub fn register(viewer: MountedViewer) -> u32 {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });
    let replaced = VIEWERS.with(|viewers| {
        let mut viewers = viewers.borrow_mut();
        let previous: Vec<u32> = viewers
            .iter()
            .filter(|(_, mounted)| mounted.widget_id == viewer.widget_id)
            .map(|(id, _)| *id)
            .collect();
        let replaced: Vec<MountedViewer> = previous
            .into_iter()
            .filter_map(|id| viewers.remove(&id))
            .collect();
        viewers.insert(id, viewer);
        replaced
    });
    for old in replaced {
        log::info!("[viewer] replacing viewer already bound to #{}", old.widget_id);
        old.cancel();
    }
    id
}

/// Remove a viewer and stop dispatching events to it.
pub fn detach(id: u32) -> bool {
    let removed = VIEWERS.with(|viewers| viewers.borrow_mut().remove(&id));
    match removed {
        Some(viewer) => {
            log::debug!("[viewer] detached #{}", viewer.widget_id);
            viewer.cancel();
            true
        }
        None => false,
    }
}

pub fn controller(id: u32) -> Option<Rc<RefCell<ViewerController>>> {
    VIEWERS.with(|viewers| {
        viewers
            .borrow()
            .get(&id)
            .map(|viewer| Rc::clone(&viewer.controller))
    })
}

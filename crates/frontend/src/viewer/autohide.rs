//! Stand-alone overlay auto-hide for pages that only embed a widget and a
//! loading overlay, without tabs.

use std::rc::Rc;

use super::controller::OVERLAY_COLLAPSE_DELAY;
use super::ports::{LoadingOverlay, ModelWidget, Scheduler};

/// Hides one overlay exactly once, when its widget finishes loading.
pub struct OverlayAutoHide {
    overlay: Rc<dyn LoadingOverlay>,
    scheduler: Rc<dyn Scheduler>,
    hidden: bool,
}

impl OverlayAutoHide {
    pub fn new(overlay: Rc<dyn LoadingOverlay>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            overlay,
            scheduler,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn on_progress(&mut self, fraction: Option<f64>) {
        if fraction.is_some_and(|f| f >= 1.0) {
            self.hide();
        }
    }

    pub fn on_loaded(&mut self) {
        self.hide();
    }

    /// Fallback for widgets that were already loaded before we subscribed.
    pub fn poll(&mut self, widget: &dyn ModelWidget) {
        if widget.is_loaded() {
            self.hide();
        }
    }

    fn hide(&mut self) {
        if self.hidden {
            return;
        }
        self.hidden = true;
        self.overlay.fade_out();
        let overlay = Rc::clone(&self.overlay);
        self.scheduler
            .defer(OVERLAY_COLLAPSE_DELAY, Box::new(move || overlay.collapse()));
    }
}

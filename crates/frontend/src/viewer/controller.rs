//! Tab/viewer state controller.
//!
//! Translates tab clicks, rotate/reset clicks and widget lifecycle events
//! into updates of the injected page handles. One controller owns one widget
//! and one overlay; nothing here is persisted beyond the page session.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use contracts::shared::cache_bust::cache_busted;
use contracts::{CameraSnapshot, Catalog, Item, ResetMode, StatusMessage, ViewerConfig};

use super::load_cycle::{LoadCycle, LoadPhase};
use super::ports::{TabButton, ViewerHandles};

/// Delay between fading the overlay and removing it from layout.
pub const OVERLAY_COLLAPSE_DELAY: Duration = Duration::from_millis(250);

/// Delay of the one-off "did the widget load without telling us" check.
pub const LOAD_FALLBACK_DELAY: Duration = Duration::from_millis(800);

/// Behaviour switches taken from [`ViewerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    pub cache_bust: bool,
    pub reset_mode: ResetMode,
    pub hint_text: Option<String>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from(&ViewerConfig::default())
    }
}

impl From<&ViewerConfig> for ControllerOptions {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            cache_bust: config.cache_bust,
            reset_mode: config.reset_mode,
            hint_text: config.hint_text().map(str::to_string),
        }
    }
}

pub struct ViewerController {
    catalog: Catalog,
    options: ControllerOptions,
    handles: ViewerHandles,
    active: Option<String>,
    cycle: LoadCycle,
    initial_camera: Option<CameraSnapshot>,
    this: Weak<RefCell<ViewerController>>,
}

impl ViewerController {
    /// Wire the controller to its handles and select the first item.
    pub fn new(catalog: Catalog, options: ControllerOptions, handles: ViewerHandles) -> Self {
        let initial_camera = handles
            .widget
            .camera_snapshot()
            .filter(|snapshot| !snapshot.is_blank());
        handles.widget.ensure_defaults();

        let mut controller = Self {
            catalog,
            options,
            handles,
            active: None,
            cycle: LoadCycle::default(),
            initial_camera,
            this: Weak::new(),
        };
        controller.render_tabs();
        controller.sync_rotate_button();

        let first = controller.catalog.first().key.clone();
        controller.select_item(&first);
        log::info!(
            "[viewer] initialized with {} item(s), active '{}'",
            controller.catalog.len(),
            first
        );
        controller
    }

    /// Move the controller behind `Rc<RefCell<_>>` so deferred work can
    /// reach it again. Every selection made afterwards schedules its own
    /// load check.
    pub fn into_shared(self) -> Rc<RefCell<Self>> {
        let mut controller = self;
        Rc::new_cyclic(|this| {
            controller.this = this.clone();
            RefCell::new(controller)
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_item(&self) -> Option<&Item> {
        self.active.as_deref().and_then(|key| self.catalog.get(key))
    }

    pub fn phase(&self) -> LoadPhase {
        self.cycle.phase()
    }

    pub fn initial_camera(&self) -> Option<&CameraSnapshot> {
        self.initial_camera.as_ref()
    }

    /// Make `key` the active item and start loading it. Unknown keys are
    /// ignored. Returns whether the selection happened.
    pub fn select_item(&mut self, key: &str) -> bool {
        let Some(item) = self.catalog.get(key).cloned() else {
            log::debug!("[viewer] select '{}': unknown key, ignored", key);
            return false;
        };
        log::debug!("[viewer] select '{}' ({})", item.key, item.src);

        // the widget ignores an unchanged src, so a retry must differ
        let retry = self.cycle.phase() == LoadPhase::Errored && self.active.as_deref() == Some(key);
        self.active = Some(item.key.clone());
        self.cycle.begin();

        if let Some(tabs) = &self.handles.tabs {
            tabs.set_active(&item.key);
        }
        if let Some(title) = &self.handles.title {
            title.set_text(&item.label);
        }

        let overlay = &self.handles.overlay;
        overlay.show();
        overlay.set_percent(0);
        self.handles.set_status(&StatusMessage::Loading.to_string());
        self.update_overlay_caption();
        self.update_hint();

        let src = if self.options.cache_bust || retry {
            cache_busted(&item.src, self.handles.clock.now_millis())
        } else {
            item.src.clone()
        };
        let widget = &self.handles.widget;
        widget.disable_ar();
        widget.set_src(&src);
        widget.reframe();
        self.schedule_load_check();
        true
    }

    /// Widget `progress` event. `None`/NaN carry no number and are ignored.
    pub fn on_progress(&mut self, fraction: Option<f64>) {
        let Some(percent) = fraction.and_then(|f| self.cycle.progress(f)) else {
            return;
        };
        self.handles.overlay.set_percent(percent);
        self.handles
            .set_status(&StatusMessage::for_percent(percent).to_string());
        self.update_overlay_caption();
    }

    /// Widget `load` event.
    pub fn on_loaded(&mut self) {
        log::debug!("[viewer] loaded '{}'", self.active.as_deref().unwrap_or(""));
        self.cycle.finish();
        self.hide_overlay();
        self.handles.set_status(&StatusMessage::Loaded.to_string());
        self.handles.widget.reframe();
        self.update_hint();
    }

    /// Widget `error` event. The selection stays as it is; picking a tab
    /// again is the only way to retry.
    pub fn on_error(&mut self) {
        log::error!(
            "[viewer] model-viewer error for '{}'",
            self.active.as_deref().unwrap_or("")
        );
        self.cycle.fail();
        self.hide_overlay();
        self.handles.set_status(&StatusMessage::Failed.to_string());
        self.update_hint();
    }

    /// Runtime reported new network characteristics.
    pub fn on_connection_change(&mut self) {
        self.update_hint();
        if self.cycle.phase().in_flight() {
            self.update_overlay_caption();
        }
    }

    /// Setup fallback: complete the cycle if the widget already considers
    /// itself loaded but never told us.
    pub fn poll_widget_loaded(&mut self) -> bool {
        if self.cycle.phase().in_flight() && self.handles.widget.is_loaded() {
            log::debug!("[viewer] widget reports loaded without a load event");
            self.on_loaded();
            return true;
        }
        false
    }

    /// Poll the widget once `LOAD_FALLBACK_DELAY` from now, unless another
    /// selection started meanwhile. Covers loads that never emit `load`,
    /// such as reselecting an unchanged src. No-op before [`Self::into_shared`].
    pub fn schedule_load_check(&self) {
        if self.this.strong_count() == 0 {
            return;
        }
        let this = self.this.clone();
        let token = self.cycle.token();
        self.handles.scheduler.defer(
            LOAD_FALLBACK_DELAY,
            Box::new(move || {
                if !token.is_current() {
                    return;
                }
                let Some(shared) = this.upgrade() else {
                    return;
                };
                let Ok(mut controller) = shared.try_borrow_mut() else {
                    return;
                };
                controller.poll_widget_loaded();
            }),
        );
    }

    /// Flip auto-rotate. Returns the new flag.
    pub fn toggle_rotate(&mut self) -> bool {
        let enabled = !self.handles.widget.auto_rotate();
        self.handles.widget.set_auto_rotate(enabled);
        self.sync_rotate_button();
        enabled
    }

    pub fn reset_view(&mut self) {
        match (self.options.reset_mode, self.initial_camera.clone()) {
            (ResetMode::Auto | ResetMode::RestoreCamera, Some(snapshot)) => {
                log::debug!("[viewer] reset: restoring initial camera");
                self.handles.widget.apply_camera(&snapshot);
                self.sync_rotate_button();
            }
            (ResetMode::RestoreCamera, None) => {
                log::debug!("[viewer] reset: no initial camera, reframing");
                self.handles.widget.reframe();
            }
            (ResetMode::Auto, None) | (ResetMode::Reselect, _) => {
                log::debug!("[viewer] reset: reselecting active item");
                self.handles.widget.reset_turntable();
                let key = self
                    .active
                    .clone()
                    .unwrap_or_else(|| self.catalog.first().key.clone());
                self.select_item(&key);
            }
        }
    }

    fn render_tabs(&self) {
        let Some(tabs) = &self.handles.tabs else {
            return;
        };
        let buttons: Vec<TabButton> = self
            .catalog
            .items()
            .iter()
            .map(|item| TabButton {
                key: item.key.clone(),
                text: item.tab.clone(),
            })
            .collect();
        tabs.render(&buttons);
    }

    fn sync_rotate_button(&self) {
        if let Some(button) = &self.handles.rotate_button {
            button.set_pressed(self.handles.widget.auto_rotate());
        }
    }

    fn hide_overlay(&self) {
        let overlay = Rc::clone(&self.handles.overlay);
        overlay.fade_out();
        let token = self.cycle.token();
        self.handles.scheduler.defer(
            OVERLAY_COLLAPSE_DELAY,
            Box::new(move || {
                if token.is_current() {
                    overlay.collapse();
                }
            }),
        );
    }

    fn update_overlay_caption(&self) {
        let caption = match &self.options.hint_text {
            Some(text) if self.handles.connection.probe().is_slow() => text.as_str(),
            _ => "",
        };
        self.handles.overlay.set_caption(caption);
    }

    fn update_hint(&self) {
        let Some(hint) = &self.handles.hint else {
            return;
        };
        let heavy = self.active_item().is_some_and(|item| item.heavy);
        match &self.options.hint_text {
            Some(text) if self.handles.connection.probe().hint_visible(heavy) => hint.show(text),
            _ => hint.hide(),
        }
    }
}

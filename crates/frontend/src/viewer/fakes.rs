//! In-memory page used by the controller tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use contracts::{CameraSnapshot, NetworkProbe};

use super::ports::{
    Clock, ConnectionSource, HintDisplay, LoadingOverlay, ModelWidget, Scheduler, TabButton,
    TabStrip, Task, TextSink, ToggleButton, ViewerHandles,
};

#[derive(Default)]
pub struct FakeWidget {
    src: RefCell<String>,
    camera: RefCell<CameraSnapshot>,
    defaults_applied: Cell<bool>,
    ar_source: Cell<bool>,
    reframes: Cell<u32>,
    turntable_resets: Cell<u32>,
    loaded: Cell<bool>,
}

impl FakeWidget {
    pub fn new() -> Self {
        Self {
            ar_source: Cell::new(true),
            ..Self::default()
        }
    }

    pub fn with_camera(camera: CameraSnapshot) -> Self {
        let widget = Self::new();
        *widget.camera.borrow_mut() = camera;
        widget
    }

    pub fn src(&self) -> String {
        self.src.borrow().clone()
    }

    pub fn camera(&self) -> CameraSnapshot {
        self.camera.borrow().clone()
    }

    pub fn move_camera(&self, orbit: &str) {
        self.camera.borrow_mut().camera_orbit = Some(orbit.to_string());
    }

    pub fn auto_rotate_flag(&self) -> bool {
        self.camera.borrow().auto_rotate
    }

    pub fn defaults_applied(&self) -> bool {
        self.defaults_applied.get()
    }

    pub fn has_ar_source(&self) -> bool {
        self.ar_source.get()
    }

    pub fn reframe_count(&self) -> u32 {
        self.reframes.get()
    }

    pub fn turntable_resets(&self) -> u32 {
        self.turntable_resets.get()
    }

    pub fn mark_loaded(&self) {
        self.loaded.set(true);
    }
}

impl ModelWidget for FakeWidget {
    fn set_src(&self, src: &str) {
        // like the real element, an unchanged src is not reloaded
        if *self.src.borrow() != src {
            self.loaded.set(false);
        }
        *self.src.borrow_mut() = src.to_string();
    }

    fn ensure_defaults(&self) {
        self.defaults_applied.set(true);
    }

    fn disable_ar(&self) {
        self.ar_source.set(false);
    }

    fn reframe(&self) {
        self.reframes.set(self.reframes.get() + 1);
    }

    fn auto_rotate(&self) -> bool {
        self.camera.borrow().auto_rotate
    }

    fn set_auto_rotate(&self, enabled: bool) {
        self.camera.borrow_mut().auto_rotate = enabled;
    }

    fn camera_snapshot(&self) -> Option<CameraSnapshot> {
        Some(self.camera.borrow().clone())
    }

    fn apply_camera(&self, snapshot: &CameraSnapshot) {
        *self.camera.borrow_mut() = snapshot.clone();
    }

    fn reset_turntable(&self) {
        self.turntable_resets.set(self.turntable_resets.get() + 1);
    }

    fn is_loaded(&self) -> bool {
        self.loaded.get()
    }
}

#[derive(Default)]
pub struct FakeTabs {
    buttons: RefCell<Vec<TabButton>>,
    active: RefCell<Option<String>>,
}

impl FakeTabs {
    pub fn buttons(&self) -> Vec<TabButton> {
        self.buttons.borrow().clone()
    }

    /// Keys of the buttons currently marked active.
    pub fn active_keys(&self) -> Vec<String> {
        let active = self.active.borrow();
        self.buttons
            .borrow()
            .iter()
            .filter(|button| active.as_deref() == Some(button.key.as_str()))
            .map(|button| button.key.clone())
            .collect()
    }
}

impl TabStrip for FakeTabs {
    fn render(&self, buttons: &[TabButton]) {
        *self.buttons.borrow_mut() = buttons.to_vec();
        *self.active.borrow_mut() = None;
    }

    fn set_active(&self, key: &str) {
        *self.active.borrow_mut() = Some(key.to_string());
    }
}

#[derive(Default)]
pub struct FakeText(RefCell<String>);

impl FakeText {
    pub fn text(&self) -> String {
        self.0.borrow().clone()
    }
}

impl TextSink for FakeText {
    fn set_text(&self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

#[derive(Default)]
pub struct FakeHint {
    text: RefCell<Option<String>>,
}

impl FakeHint {
    pub fn visible(&self) -> bool {
        self.text.borrow().is_some()
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone().unwrap_or_default()
    }
}

impl HintDisplay for FakeHint {
    fn show(&self, text: &str) {
        *self.text.borrow_mut() = Some(text.to_string());
    }

    fn hide(&self) {
        *self.text.borrow_mut() = None;
    }
}

#[derive(Default)]
pub struct FakeOverlay {
    shown: Cell<bool>,
    faded: Cell<bool>,
    collapsed: Cell<bool>,
    percent: Cell<u8>,
    caption: RefCell<String>,
}

impl FakeOverlay {
    /// Shown and neither fading nor collapsed.
    pub fn visible(&self) -> bool {
        self.shown.get() && !self.faded.get() && !self.collapsed.get()
    }

    pub fn faded(&self) -> bool {
        self.faded.get()
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed.get()
    }

    pub fn percent(&self) -> u8 {
        self.percent.get()
    }

    pub fn caption(&self) -> String {
        self.caption.borrow().clone()
    }
}

impl LoadingOverlay for FakeOverlay {
    fn show(&self) {
        self.shown.set(true);
        self.faded.set(false);
        self.collapsed.set(false);
    }

    fn fade_out(&self) {
        self.faded.set(true);
    }

    fn collapse(&self) {
        self.collapsed.set(true);
    }

    fn set_percent(&self, percent: u8) {
        self.percent.set(percent);
    }

    fn set_caption(&self, text: &str) {
        *self.caption.borrow_mut() = text.to_string();
    }
}

#[derive(Default)]
pub struct FakeToggle(Cell<Option<bool>>);

impl FakeToggle {
    pub fn pressed(&self) -> Option<bool> {
        self.0.get()
    }
}

impl ToggleButton for FakeToggle {
    fn set_pressed(&self, pressed: bool) {
        self.0.set(Some(pressed));
    }
}

#[derive(Default)]
pub struct FakeConnection(RefCell<NetworkProbe>);

impl FakeConnection {
    pub fn set(&self, probe: NetworkProbe) {
        *self.0.borrow_mut() = probe;
    }
}

impl ConnectionSource for FakeConnection {
    fn probe(&self) -> NetworkProbe {
        self.0.borrow().clone()
    }
}

/// Collects deferred tasks; tests decide when time passes.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<Vec<(Duration, Task)>>,
}

impl ManualScheduler {
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_all(&self) {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay: Duration, task: Task) {
        self.tasks.borrow_mut().push((delay, task));
    }
}

#[derive(Default)]
pub struct FakeClock(Cell<i64>);

impl FakeClock {
    pub fn set(&self, millis: i64) {
        self.0.set(millis);
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> i64 {
        self.0.get()
    }
}

/// One of each fake, shared with the handles given to the controller.
pub struct FakePage {
    pub widget: Rc<FakeWidget>,
    pub overlay: Rc<FakeOverlay>,
    pub tabs: Rc<FakeTabs>,
    pub status: Rc<FakeText>,
    pub title: Rc<FakeText>,
    pub hint: Rc<FakeHint>,
    pub rotate_button: Rc<FakeToggle>,
    pub connection: Rc<FakeConnection>,
    pub scheduler: Rc<ManualScheduler>,
    pub clock: Rc<FakeClock>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::with_widget(FakeWidget::new())
    }

    pub fn with_widget(widget: FakeWidget) -> Self {
        Self {
            widget: Rc::new(widget),
            overlay: Rc::default(),
            tabs: Rc::default(),
            status: Rc::default(),
            title: Rc::default(),
            hint: Rc::default(),
            rotate_button: Rc::default(),
            connection: Rc::default(),
            scheduler: Rc::default(),
            clock: Rc::default(),
        }
    }

    pub fn handles(&self) -> ViewerHandles {
        ViewerHandles {
            widget: self.widget.clone(),
            overlay: self.overlay.clone(),
            tabs: Some(self.tabs.clone()),
            status: Some(self.status.clone()),
            title: Some(self.title.clone()),
            hint: Some(self.hint.clone()),
            rotate_button: Some(self.rotate_button.clone()),
            connection: self.connection.clone(),
            scheduler: self.scheduler.clone(),
            clock: self.clock.clone(),
        }
    }
}

//! Seams between the controller and the page.
//!
//! The controller never reaches for `document`: every element it drives is
//! handed in through one of these traits. The browser implementations live
//! in `crate::dom`; tests use the in-memory fakes.

use std::rc::Rc;
use std::time::Duration;

use contracts::{CameraSnapshot, NetworkProbe};

/// The model display widget (`<model-viewer>`).
pub trait ModelWidget {
    fn set_src(&self, src: &str);

    /// Add `camera-controls` and a neutral environment when the page did not
    /// declare them.
    fn ensure_defaults(&self);

    /// Drop the AR source; AR is not offered.
    fn disable_ar(&self);

    /// Automatic orbit/target/field of view, applied immediately.
    fn reframe(&self);

    fn auto_rotate(&self) -> bool;

    fn set_auto_rotate(&self, enabled: bool);

    /// Camera attributes currently declared on the widget.
    fn camera_snapshot(&self) -> Option<CameraSnapshot>;

    fn apply_camera(&self, snapshot: &CameraSnapshot);

    /// Best-effort turntable/orbit reset through the widget's own methods.
    fn reset_turntable(&self);

    /// Whether the widget itself reports the current model as loaded.
    fn is_loaded(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub key: String,
    pub text: String,
}

pub trait TabStrip {
    /// Replace the strip content with one button per entry.
    fn render(&self, buttons: &[TabButton]);

    /// Mark exactly the button with `key` as active.
    fn set_active(&self, key: &str);
}

pub trait TextSink {
    fn set_text(&self, text: &str);
}

pub trait HintDisplay {
    fn show(&self, text: &str);
    fn hide(&self);
}

pub trait LoadingOverlay {
    fn show(&self);

    /// Start the fade-out; the overlay still occupies layout.
    fn fade_out(&self);

    /// Remove the overlay from layout.
    fn collapse(&self);

    fn set_percent(&self, percent: u8);

    fn set_caption(&self, text: &str);
}

pub trait ToggleButton {
    fn set_pressed(&self, pressed: bool);
}

pub trait ConnectionSource {
    fn probe(&self) -> NetworkProbe;
}

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    fn defer(&self, delay: Duration, task: Task);
}

pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Everything a controller drives. Only the widget and the overlay are
/// required; missing optional elements turn the matching updates into
/// no-ops.
#[derive(Clone)]
pub struct ViewerHandles {
    pub widget: Rc<dyn ModelWidget>,
    pub overlay: Rc<dyn LoadingOverlay>,
    pub tabs: Option<Rc<dyn TabStrip>>,
    pub status: Option<Rc<dyn TextSink>>,
    pub title: Option<Rc<dyn TextSink>>,
    pub hint: Option<Rc<dyn HintDisplay>>,
    pub rotate_button: Option<Rc<dyn ToggleButton>>,
    pub connection: Rc<dyn ConnectionSource>,
    pub scheduler: Rc<dyn Scheduler>,
    pub clock: Rc<dyn Clock>,
}

impl ViewerHandles {
    pub fn set_status(&self, text: &str) {
        if let Some(status) = &self.status {
            status.set_text(text);
        }
    }
}

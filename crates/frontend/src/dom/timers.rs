use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::viewer::ports::{Scheduler, Task};

/// `setTimeout` through gloo's future timer on the local executor.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn defer(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            task();
        });
    }
}

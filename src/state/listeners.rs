// Owned browser registrations. Dropping a guard clears the interval or removes
// the listener, so a view can tie their lifetime to a Yew effect cleanup.

use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, KeyboardEvent, Window};

pub struct IntervalGuard {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalGuard {
    pub fn start(window: &Window, period_ms: u32, f: impl FnMut() + 'static) -> Result<Self> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .map_err(|e| anyhow!("setInterval({}ms) failed: {:?}", period_ms, e))?;
        Ok(Self { window: window.clone(), id, _callback: callback })
    }
}

impl Drop for IntervalGuard {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl ListenerGuard {
    pub fn keydown(target: &EventTarget, f: impl FnMut(KeyboardEvent) + 'static) -> Result<Self> {
        let event = "keydown";
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(KeyboardEvent)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("addEventListener({}) failed: {:?}", event, e))?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

//! `requestAnimationFrame` plumbing.
//!
//! [`RafLoop`] drives the continuous marquee/wave tick; [`request_frame`]
//! schedules the one-shot frame callbacks that the scroll and pointer frame
//! gates coalesce bursts into. Callbacks receive the browser's
//! DOMHighResTimeStamp in milliseconds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window/Performance objects on every frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Current `performance.now()` in milliseconds.
#[inline]
pub fn now_ms() -> f64 {
    performance_now()
}

/// Schedule `f` for the next paint frame. The closure is consumed by the
/// browser when the frame fires.
pub fn request_frame(f: impl FnOnce(f64) + 'static) {
    let cb = Closure::once_into_js(f);
    request_animation_frame(&cb);
}

type TickCallback = Box<dyn FnMut(f64, f32)>;

/// A re-registering animation loop.
///
/// The user callback receives `(timestamp_ms, dt_s)`, where `dt_s` is the
/// time since the previous tick (zero on the first). The loop re-registers
/// itself each frame until [`stop`](Self::stop) is called or the `RafLoop`
/// is dropped.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Stored in its own `RefCell` so we can set it once in `start()` and
    /// reference it from inside itself without conflicting with `callback`.
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,

    /// The user-supplied per-tick callback.
    callback: RefCell<TickCallback>,

    /// Timestamp of the previous tick, for dt computation.
    last_ts: Cell<Option<f64>>,

    /// Whether the loop is currently running.
    running: Cell<bool>,

    /// The ID returned by the most recent `requestAnimationFrame` call,
    /// used by `cancelAnimationFrame` when stopping.
    raf_id: Cell<i32>,
}

impl RafLoop {
    /// Creates a new loop that is not yet running.
    pub fn new(callback: impl FnMut(f64, f32) + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                last_ts: Cell::new(None),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Starts the loop. If already running, this is a no-op.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);
        self.inner.last_ts.set(None);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if !inner.running.get() {
                return;
            }

            let dt_s = match inner.last_ts.get() {
                Some(prev) => ((timestamp_ms - prev) / 1000.0).max(0.0) as f32,
                None => 0.0,
            };
            inner.last_ts.set(Some(timestamp_ms));

            // Invoke the user callback. The borrow is scoped so it doesn't
            // overlap with the `closure` RefCell.
            inner.callback.borrow_mut()(timestamp_ms, dt_s);

            // Re-register for the next frame if still running.
            if inner.running.get() {
                if let Some(ref closure) = *inner.closure.borrow() {
                    let id = request_animation_frame(closure.as_ref().unchecked_ref());
                    inner.raf_id.set(id);
                }
            }
        }) as Box<dyn FnMut(f64)>);

        // Register the first frame.
        let id = request_animation_frame(closure.as_ref().unchecked_ref());
        self.inner.raf_id.set(id);
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Stops the loop; the pending callback is cancelled. Can be restarted.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

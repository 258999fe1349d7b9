//! `requestAnimationFrame` loop with a stop hook.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

struct LoopState {
    running: Cell<bool>,
    /// Handle of the frame currently requested, if any.
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
        let handle = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.pending.set(Some(handle));
        Ok(())
    }

    fn cancel(&self) {
        self.running.set(false);
        if let Some(handle) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }
}

/// Calls `frame` once per display refresh until it returns `false` or the
/// loop is stopped. Dropping the loop stops it.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut() -> bool + 'static) -> Result<Self, JsValue> {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        // Weak: the closure lives inside the state it points back to.
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let tick = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            if !frame() {
                state.running.set(false);
                return;
            }
            if let Err(err) = state.schedule() {
                log::error!("could not schedule next frame: {:?}", err);
                state.running.set(false);
            }
        }) as Box<dyn FnMut()>);

        *state.callback.borrow_mut() = Some(tick);
        state.schedule()?;
        Ok(Self { state })
    }

    /// Cancel the pending frame; the callback never runs again.
    pub fn stop(&self) {
        self.state.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.state.cancel();
    }
}

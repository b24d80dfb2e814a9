//! `requestAnimationFrame` loop with scoped cancellation
//!
//! The loop re-arms itself every frame until the `FrameLoop` handle is
//! dropped or cancelled. Do not drop the handle from inside its own callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::PlatformError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle to a running frame loop
pub struct FrameLoop {
    callback: FrameCallback,
    request_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Start calling `on_frame` with the frame timestamp (ms) every display frame
    pub fn start<F>(mut on_frame: F) -> Result<Self, PlatformError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));

        let closure = {
            let callback = callback.clone();
            let request_id = request_id.clone();
            let stopped = stopped.clone();
            let window = window.clone();
            Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                request_id.set(None);
                if stopped.get() {
                    return;
                }
                on_frame(time);
                if let Some(cb) = callback.borrow().as_ref() {
                    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => request_id.set(Some(id)),
                        Err(e) => log::error!("Failed to re-arm frame loop: {:?}", e),
                    }
                }
            })
        };

        // The first frame cannot fire before the closure is stored below
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| PlatformError::Js(format!("{:?}", e)))?;
        *callback.borrow_mut() = Some(closure);
        request_id.set(Some(id));
        log::debug!("Frame loop started");

        Ok(Self {
            callback,
            request_id,
            stopped,
        })
    }

    /// Stop scheduling further frames
    pub fn cancel(&self) {
        self.stopped.set(true);
        if let Some(id) = self.request_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        // Break the closure's reference to itself
        self.callback.borrow_mut().take();
        log::debug!("Frame loop released");
    }
}

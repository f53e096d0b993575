// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` driver for render passes.
//!
//! [`FrameLoop`] calls a user callback once per animation frame. The callback
//! typically runs [`Stage::render_pass`]; since a pass over an empty queue
//! does nothing, an idle page costs one branch per frame.
//!
//! [`Stage::render_pass`]: veneer_core::stage::Stage::render_pass

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(handle: i32);
}

/// What a [`FrameLoop`] callback learns about the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// The `requestAnimationFrame` timestamp in milliseconds.
    pub timestamp_ms: f64,
    /// Frames delivered since the loop was created.
    pub frame_index: u64,
}

type FrameClosure = Closure<dyn FnMut(f64)>;

struct LoopState {
    /// Registered with `requestAnimationFrame`; re-registers itself.
    closure: RefCell<Option<FrameClosure>>,
    callback: RefCell<Box<dyn FnMut(FrameInfo)>>,
    frames: Cell<u64>,
    running: Cell<bool>,
    handle: Cell<i32>,
}

/// Runs a callback on every animation frame until stopped or dropped.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    /// Creates a stopped loop. Call [`start`](Self::start) to begin.
    pub fn new(callback: impl FnMut(FrameInfo) + 'static) -> Self {
        Self {
            state: Rc::new(LoopState {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                frames: Cell::new(0),
                running: Cell::new(false),
                handle: Cell::new(0),
            }),
        }
    }

    /// Starts delivering frames. Does nothing if already running.
    pub fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }

        if self.state.closure.borrow().is_none() {
            let state = Rc::clone(&self.state);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                if !state.running.get() {
                    return;
                }
                let frame_index = state.frames.get();
                state.frames.set(frame_index + 1);
                state.callback.borrow_mut()(FrameInfo {
                    timestamp_ms,
                    frame_index,
                });

                if state.running.get()
                    && let Some(ref closure) = *state.closure.borrow()
                {
                    state
                        .handle
                        .set(request_animation_frame(closure.as_ref().unchecked_ref()));
                }
            }) as Box<dyn FnMut(f64)>);
            *self.state.closure.borrow_mut() = Some(closure);
        }

        if let Some(ref closure) = *self.state.closure.borrow() {
            self.state
                .handle
                .set(request_animation_frame(closure.as_ref().unchecked_ref()));
        }
    }

    /// Stops delivering frames and cancels the pending request.
    pub fn stop(&self) {
        if self.state.running.replace(false) {
            cancel_animation_frame(self.state.handle.get());
        }
    }

    /// Whether frames are being delivered.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Frames delivered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.state.frames.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure's self-reference.
        self.state.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameLoop")
            .field("running", &self.state.running.get())
            .field("frames", &self.state.frames.get())
            .finish_non_exhaustive()
    }
}

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
Timer handles over the browser's `setInterval`/`setTimeout`.

An [`Interval`] stops when dropped; keep the handle around for as long as
the callback should keep firing.
*/

use std::cell::Cell;
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::{self, JsResult};

/// A repeating timer. The callback fires every `period` until the handle is
/// stopped or dropped.
pub struct Interval {
    id: Cell<Option<i32>>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Start a repeating timer firing `callback` every `period`.
    pub fn start(period: Duration, callback: impl FnMut() + 'static) -> JsResult<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = dom::window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period.as_millis() as i32,
        )?;
        Ok(Self { id: Cell::new(Some(id)), _callback: callback })
    }

    /// Stop the timer. Does nothing when already stopped.
    pub fn stop(&self) {
        if let Some(id) = self.id.take() {
            if let Ok(window) = dom::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }

    /// Returns true while the timer fires.
    pub fn running(&self) -> bool {
        self.id.get().is_some()
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Call `callback` once after `delay`. Fire-and-forget: the closure frees
/// itself after the call.
pub fn single_shot(delay: Duration, callback: impl FnOnce() + 'static) -> JsResult<()> {
    let closure = Closure::once_into_js(callback);
    dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        delay.as_millis() as i32,
    )?;
    Ok(())
}

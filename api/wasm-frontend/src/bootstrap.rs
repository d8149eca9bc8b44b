// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Bindings to the Bootstrap widget bundle loaded by the page templates.

use std::cell::Cell;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A `bootstrap.Tooltip` widget instance.
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &web_sys::Element) -> Tooltip;

    /// A `bootstrap.Toast` widget instance.
    pub type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &web_sys::Element) -> Toast;

    #[wasm_bindgen(method)]
    pub fn show(this: &Toast);
}

thread_local! {
    static WARNED: Cell<bool> = const { Cell::new(false) };
}

/// Whether the Bootstrap bundle is present on the page.
///
/// Pages rendered without it (and the browser test harness) still get the
/// DOM side of every behavior; only the widget calls are skipped. Logged
/// once per page.
pub fn is_loaded() -> bool {
    let loaded = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))
        .map(|value| !value.is_undefined())
        .unwrap_or(false);
    if !loaded {
        WARNED.with(|warned| {
            if !warned.replace(true) {
                web_sys::console::warn_1(
                    &"bootstrap bundle not present, widgets stay inert".into(),
                );
            }
        });
    }
    loaded
}

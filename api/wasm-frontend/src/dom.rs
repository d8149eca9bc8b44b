// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Thin helpers over `web_sys` for the repetitive query/listen patterns.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Shorthand used by all glue modules.
pub type JsResult<T> = Result<T, JsValue>;

/// The DOM window, as an error instead of a panic when absent.
pub fn window() -> JsResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| JsValue::from_str("could not retrieve DOM window"))
}

/// The DOM document of the current window.
pub fn document() -> JsResult<Document> {
    window()?.document().ok_or_else(|| JsValue::from_str("could not retrieve DOM document"))
}

/// All elements of the document matching a selector group.
pub fn select_all(document: &Document, selector: &str) -> JsResult<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// All descendants of `root` matching a selector group.
pub fn select_within(root: &Element, selector: &str) -> JsResult<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Attach an event handler to a target.
///
/// The closure is leaked: all listeners registered here live for the rest of
/// the page.
pub fn add_event_listener<Arg: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(Arg) + 'static,
) -> JsResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
Search input decoration.

Every search-like input gets a leading magnifier icon, and, only while it
holds text, a trailing clear button. The decoration is idempotent: at most
one icon and one clear button per input, re-checked on every input event.
*/

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::dom::{self, JsResult};

/// Inputs that receive the decoration.
pub const SEARCH_SELECTOR: &str = r#"input[type="search"], input[name="q"]"#;

const ICON_STYLE: &str =
    "position: absolute; left: 0.75rem; top: 50%; transform: translateY(-50%); color: #6c757d; z-index: 10;";
const CLEAR_STYLE: &str =
    "position: absolute; right: 0.75rem; top: 50%; transform: translateY(-50%); z-index: 10;";

/// A decorated search input.
#[derive(Clone)]
pub struct SearchBox {
    input: HtmlInputElement,
}

impl SearchBox {
    /// Decorate an input: icon now, clear button when non-empty.
    pub fn new(input: HtmlInputElement) -> JsResult<Self> {
        let search_box = Self { input };
        search_box.ensure_icon()?;
        search_box.sync_clear_button()?;
        Ok(search_box)
    }

    /// The underlying input element.
    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    /// Add or remove the clear button to match the current value.
    pub fn sync_clear_button(&self) -> JsResult<()> {
        if self.input.value().trim().is_empty() {
            self.remove_clear_button()
        } else {
            self.add_clear_button()
        }
    }

    fn parent(&self) -> Option<Element> {
        self.input.parent_element()
    }

    fn ensure_icon(&self) -> JsResult<()> {
        let Some(parent) = self.parent() else { return Ok(()) };
        if parent.query_selector(".search-icon")?.is_some() {
            return Ok(());
        }

        self.input.style().set_property("padding-left", "2.5rem")?;

        let icon = dom::document()?.create_element("i")?;
        icon.set_class_name("fas fa-search search-icon");
        if let Some(icon) = icon.dyn_ref::<HtmlElement>() {
            icon.style().set_css_text(ICON_STYLE);
        }
        if let Some(parent) = parent.dyn_ref::<HtmlElement>() {
            parent.style().set_property("position", "relative")?;
        }
        parent.insert_before(&icon, Some(self.input.as_ref()))?;
        Ok(())
    }

    fn add_clear_button(&self) -> JsResult<()> {
        let Some(parent) = self.parent() else { return Ok(()) };
        if parent.query_selector(".clear-search")?.is_some() {
            return Ok(());
        }

        let button = dom::document()?.create_element("button")?;
        button.set_attribute("type", "button")?;
        button.set_class_name("btn-close clear-search");
        if let Some(button) = button.dyn_ref::<HtmlElement>() {
            button.style().set_css_text(CLEAR_STYLE);
        }

        // Clearing dispatches a synthetic input event so the decoration
        // (and any other listener) re-evaluates the now-empty value.
        let input = self.input.clone();
        dom::add_event_listener::<web_sys::Event>(button.as_ref(), "click", move |_| {
            input.set_value("");
            if let Ok(event) = web_sys::Event::new("input") {
                let _ = input.dispatch_event(&event);
            }
            let _ = input.focus();
        })?;

        parent.append_child(&button)?;
        self.input.style().set_property("padding-right", "2.5rem")?;
        Ok(())
    }

    fn remove_clear_button(&self) -> JsResult<()> {
        let Some(parent) = self.parent() else { return Ok(()) };
        if let Some(button) = parent.query_selector(".clear-search")? {
            button.remove();
            self.input.style().remove_property("padding-right")?;
        }
        Ok(())
    }
}

/// Decorate every search input of the document.
pub fn attach(document: &Document) -> JsResult<Vec<SearchBox>> {
    let mut boxes = Vec::new();
    for element in dom::select_all(document, SEARCH_SELECTOR)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else { continue };
        let search_box = SearchBox::new(input)?;

        let on_input = search_box.clone();
        dom::add_event_listener::<web_sys::Event>(search_box.input().as_ref(), "input", move |_| {
            let _ = on_input.sync_clear_button();
        })?;

        boxes.push(search_box);
    }
    Ok(boxes)
}

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Toast notifications.
//!
//! At most one `.toast-container` exists per document; it is created on the
//! first toast. Toast elements remove themselves after the hide animation.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use i_biblio_core::toast::ToastLevel;

use crate::bootstrap;
use crate::dom::{self, JsResult};

/// Show a toast with the given severity in the shared container.
pub fn show(message: &str, level: ToastLevel) -> JsResult<()> {
    let document = dom::document()?;
    let container = ensure_container(&document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name(&format!(
        "toast align-items-center text-white {} border-0",
        level.css_class()
    ));
    toast.set_attribute("role", "alert")?;
    toast.set_inner_html(
        r#"<div class="d-flex">
            <div class="toast-body"></div>
            <button type="button" class="btn-close btn-close-white me-2 m-auto" data-bs-dismiss="toast"></button>
        </div>"#,
    );
    if let Some(body) = toast.query_selector(".toast-body")? {
        body.set_text_content(Some(message));
    }
    container.append_child(&toast)?;

    let hidden = toast.clone();
    dom::add_event_listener::<web_sys::Event>(toast.as_ref(), "hidden.bs.toast", move |_| {
        hidden.remove();
    })?;

    if bootstrap::is_loaded() {
        bootstrap::Toast::new(&toast).show();
    }
    Ok(())
}

fn ensure_container(document: &Document) -> JsResult<Element> {
    if let Some(existing) = document.query_selector(".toast-container")? {
        return Ok(existing);
    }
    let container = document.create_element("div")?;
    container.set_class_name("toast-container position-fixed top-0 end-0 p-3");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&container)?;
    Ok(container)
}

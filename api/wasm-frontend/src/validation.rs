// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
Form validation styling.

Forms marked `novalidate` get submit-time and blur-time validation classes
so Bootstrap's pseudo-class styling reveals errors; ISBN fields get a
plausibility rule on top via the constraint-validation API.
*/

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement};

use i_biblio_core::isbn;

use crate::dom::{self, JsResult};

const FORM_SELECTOR: &str = "form[novalidate]";
const FIELD_SELECTOR: &str = "input, select, textarea";
const ISBN_SELECTOR: &str = r#"input[name="isbn"]"#;

#[wasm_bindgen]
extern "C" {
    /// Structural view of input/select/textarea: web-sys has no common type
    /// carrying the constraint-validation API.
    type FormField;

    #[wasm_bindgen(method, js_name = checkValidity)]
    fn check_validity(this: &FormField) -> bool;
}

/// Wire validation styling on all opted-in forms and ISBN fields.
pub fn attach(document: &Document) -> JsResult<()> {
    for element in dom::select_all(document, FORM_SELECTOR)? {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else { continue };
        attach_form(&form)?;
    }

    for element in dom::select_all(document, ISBN_SELECTOR)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else { continue };
        attach_isbn_rule(&input)?;
    }
    Ok(())
}

fn attach_form(form: &HtmlFormElement) -> JsResult<()> {
    let submitted = form.clone();
    dom::add_event_listener::<web_sys::Event>(form.as_ref(), "submit", move |event| {
        if !submitted.check_validity() {
            event.prevent_default();
            event.stop_propagation();
        }
        let _ = submitted.class_list().add_1("was-validated");
    })?;

    for field in dom::select_within(form.as_ref(), FIELD_SELECTOR)? {
        let validity: FormField = JsValue::from(field.clone()).unchecked_into();
        let classes = field.class_list();
        dom::add_event_listener::<web_sys::Event>(field.as_ref(), "blur", move |_| {
            if validity.check_validity() {
                let _ = classes.remove_1("is-invalid");
                let _ = classes.add_1("is-valid");
            } else {
                let _ = classes.remove_1("is-valid");
                let _ = classes.add_1("is-invalid");
            }
        })?;
    }
    Ok(())
}

fn attach_isbn_rule(input: &HtmlInputElement) -> JsResult<()> {
    let field = input.clone();
    dom::add_event_listener::<web_sys::Event>(input.as_ref(), "input", move |_| {
        field.set_custom_validity(isbn::validation_message(&field.value()).unwrap_or(""));
    })
}

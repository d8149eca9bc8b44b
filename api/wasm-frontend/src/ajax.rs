// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
Asynchronous form submission.

Opted-in forms post their fields with `fetch` instead of navigating. The
endpoint answers the shared `{"success": bool, "message": string?}`
envelope; the outcome is surfaced as a toast. The request carries the
`X-Requested-With: XMLHttpRequest` header the server uses to tell these
submissions apart. That header and the envelope are a fixed contract.
*/

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement, Request, RequestInit, Response};

use i_biblio_core::ajax::{AjaxResponse, CONNECTION_ERROR_MESSAGE};
use i_biblio_core::toast::ToastLevel;

use crate::dom::{self, JsResult};
use crate::{loading, toast};

const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

/// Intercept the submission of every form matching `selector`.
///
/// `on_success` is invoked with the parsed response body after a successful
/// submission.
pub fn attach(selector: &str, on_success: Option<js_sys::Function>) -> JsResult<()> {
    let document = dom::document()?;
    for element in dom::select_all(&document, selector)? {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else { continue };

        let submitted = form.clone();
        let callback = on_success.clone();
        dom::add_event_listener::<web_sys::Event>(form.as_ref(), "submit", move |event| {
            event.prevent_default();

            // busy state goes on before the first await, within the handler
            let button = submitted
                .query_selector(SUBMIT_BUTTON_SELECTOR)
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());
            if let Some(button) = &button {
                let _ = loading::show_loading_state(button);
            }

            let form = submitted.clone();
            let callback = callback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submit(form, button, callback).await;
            });
        })?;
    }
    Ok(())
}

async fn submit(
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    on_success: Option<js_sys::Function>,
) {
    match send(&form).await {
        Ok((response, raw)) => {
            if response.success {
                let message = response.message.as_deref().unwrap_or_default();
                let _ = toast::show(message, ToastLevel::Success);
                if let Some(callback) = on_success {
                    let _ = callback.call1(&JsValue::UNDEFINED, &raw);
                }
            } else {
                let _ = toast::show(response.display_message(), ToastLevel::Danger);
            }
        }
        Err(error) => {
            web_sys::console::error_1(&error);
            let _ = toast::show(CONNECTION_ERROR_MESSAGE, ToastLevel::Danger);
        }
    }

    // the counterpart of the original `finally`: the control is released on
    // every exit path once the request settled
    if let Some(button) = &button {
        loading::clear_loading_state(button);
    }
}

/// Post the form and parse the envelope. Any network or parse failure comes
/// back as `Err`.
async fn send(form: &HtmlFormElement) -> JsResult<(AjaxResponse, JsValue)> {
    let form_data = FormData::new_with_form(form)?;

    let init = RequestInit::new();
    init.set_method(&form.method());
    init.set_body(form_data.as_ref());

    let request = Request::new_with_str_and_init(&form.action(), &init)?;
    request.headers().set("X-Requested-With", "XMLHttpRequest")?;

    let response = JsFuture::from(dom::window()?.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into()?;
    let text = JsFuture::from(response.text()?).await?.as_string().unwrap_or_default();

    let parsed: AjaxResponse =
        serde_json::from_str(&text).map_err(|error| JsValue::from_str(&error.to_string()))?;
    let raw = js_sys::JSON::parse(&text)?;
    Ok((parsed, raw))
}

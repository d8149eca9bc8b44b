// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
This wasm library attaches the Biblio page behaviors to the DOM.

Load it from the page and call [`attach`] once the document is ready:

```js
import init, { attach } from "biblio_wasm_frontend";
await init();
const behaviors = attach();
// ... behaviors.dispose() on teardown, if the page ever needs it
```

Besides [`attach`], the module exports the utility operations other page
scripts use: [`show_toast`], [`format_date`], [`show_loading_state`] and
[`attach_ajax_form`].
*/

#![cfg(target_arch = "wasm32")]

mod ajax;
mod bootstrap;
mod confirm;
pub mod dom;
mod loading;
pub mod overdue;
pub mod search;
mod timer;
mod toast;
mod tooltip;
mod validation;

pub use search::SearchBox;

use wasm_bindgen::prelude::*;

use i_biblio_core::{due_dates, pages, toast::ToastLevel};

#[wasm_bindgen(typescript_custom_section)]
const AJAX_CALLBACK_SECTION: &'static str = r#"
type AjaxSuccessCallback = (data: any) => void;
"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "AjaxSuccessCallback")]
    pub type AjaxSuccessCallback;
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Handle over the attached behaviors.
///
/// Dropping or [disposing](PageBehaviors::dispose) it stops the periodic
/// overdue refresh; everything else is plain event listeners torn down with
/// the page.
#[wasm_bindgen]
pub struct PageBehaviors {
    refresher: Option<overdue::OverdueRefresher>,
    _tooltips: Vec<tooltip::TooltipTarget>,
    _search_boxes: Vec<search::SearchBox>,
}

#[wasm_bindgen]
impl PageBehaviors {
    /// Stop the periodic overdue refresh.
    pub fn dispose(&mut self) {
        if let Some(refresher) = &mut self.refresher {
            refresher.stop();
        }
    }

    /// Whether the overdue refresh timer is currently running.
    #[wasm_bindgen(getter)]
    pub fn refreshing(&self) -> bool {
        self.refresher.as_ref().is_some_and(overdue::OverdueRefresher::is_running)
    }
}

/// Wire all page behaviors: tooltips, form validation, search decoration,
/// confirmation guards and, on loan-related pages, the overdue refresh.
#[wasm_bindgen]
pub fn attach() -> Result<PageBehaviors, JsValue> {
    let document = dom::document()?;

    let tooltips = tooltip::attach_all(&document)?;
    validation::attach(&document)?;
    let search_boxes = search::attach(&document)?;
    confirm::attach(&document)?;

    let path = dom::window()?.location().pathname()?;
    let refresher = if pages::shows_loans(&path) {
        let mut refresher = overdue::OverdueRefresher::new(&document)?;
        refresher.refresh_now();
        refresher.start()?;
        Some(refresher)
    } else {
        None
    };

    Ok(PageBehaviors { refresher, _tooltips: tooltips, _search_boxes: search_boxes })
}

/// Show a toast notification. `level` is one of `info` (default),
/// `success`, `warning` or `danger`.
#[wasm_bindgen]
pub fn show_toast(message: &str, level: Option<String>) -> Result<(), JsValue> {
    toast::show(message, level.as_deref().map(ToastLevel::from_name).unwrap_or_default())
}

/// Format a date the way the application displays dates (`dd/mm/yyyy`).
#[wasm_bindgen]
pub fn format_date(date: &js_sys::Date) -> String {
    due_dates::format_date(date.get_date(), date.get_month() + 1, date.get_full_year() as i32)
}

/// Mark a submit control as busy; it re-enables itself after three seconds
/// unless something re-enables it earlier.
#[wasm_bindgen]
pub fn show_loading_state(button: &web_sys::HtmlButtonElement) -> Result<(), JsValue> {
    loading::show_loading_state(button)
}

/// Submit every form matching `selector` asynchronously, with toast
/// feedback and an optional success callback receiving the response body.
#[wasm_bindgen]
pub fn attach_ajax_form(
    selector: &str,
    on_success: Option<AjaxSuccessCallback>,
) -> Result<(), JsValue> {
    let callback = on_success.map(|callback| js_sys::Function::from(JsValue::from(callback)));
    ajax::attach(selector, callback)
}

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Busy state for submit controls.

use std::time::Duration;

use web_sys::HtmlButtonElement;

use crate::dom::JsResult;
use crate::timer;

/// How long a control stays disabled at most when nobody re-enables it.
const REENABLE_FALLBACK: Duration = Duration::from_secs(3);

/// Mark a submit control as busy: `loading` class plus `disabled`.
///
/// A single-shot timer re-enables the control after three seconds in case
/// the submission never completes.
pub fn show_loading_state(button: &HtmlButtonElement) -> JsResult<()> {
    button.class_list().add_1("loading")?;
    button.set_disabled(true);

    let button = button.clone();
    timer::single_shot(REENABLE_FALLBACK, move || {
        clear_loading_state(&button);
    })
}

/// Undo [`show_loading_state`].
pub fn clear_loading_state(button: &HtmlButtonElement) {
    let _ = button.class_list().remove_1("loading");
    button.set_disabled(false);
}

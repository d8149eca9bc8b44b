// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Confirmation prompts in front of destructive submissions.
//!
//! The prompt blocks the UI event loop until answered; rejecting it cancels
//! the click before the form submission starts.

use web_sys::{Document, Element};

use i_biblio_core::prompts;

use crate::dom::{self, JsResult};

/// Submit controls that delete data.
pub const DELETE_SELECTOR: &str =
    r#"button[type="submit"][class*="danger"], form[action*="delete"] button[type="submit"]"#;

/// Submit controls that return a book.
pub const RETURN_SELECTOR: &str = r#"form[action*="return"] button[type="submit"]"#;

#[derive(Copy, Clone)]
enum Action {
    Delete,
    Return,
}

/// Guard all destructive and return submissions of the document.
pub fn attach(document: &Document) -> JsResult<()> {
    for button in dom::select_all(document, DELETE_SELECTOR)? {
        attach_guard(&button, Action::Delete)?;
    }
    for button in dom::select_all(document, RETURN_SELECTOR)? {
        attach_guard(&button, Action::Return)?;
    }
    Ok(())
}

fn attach_guard(button: &Element, action: Action) -> JsResult<()> {
    let control = button.clone();
    dom::add_event_listener::<web_sys::Event>(button.as_ref(), "click", move |event| {
        let custom = control.get_attribute("data-confirm");
        let message = match action {
            Action::Delete => prompts::delete_prompt(custom.as_deref()),
            Action::Return => prompts::RETURN_CONFIRM,
        };
        let confirmed = dom::window()
            .and_then(|window| window.confirm_with_message(message))
            .unwrap_or(false);
        if !confirmed {
            event.prevent_default();
        }
    })
}

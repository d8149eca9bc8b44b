// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Tooltip activation for elements opting in via `data-bs-toggle`.

use web_sys::{Document, Element};

use crate::bootstrap;
use crate::dom::{self, JsResult};

/// Elements that asked for a tooltip.
pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

/// One element with its attached tooltip widget.
pub struct TooltipTarget {
    _element: Element,
    _widget: Option<bootstrap::Tooltip>,
}

impl TooltipTarget {
    fn new(element: Element) -> Self {
        let widget = bootstrap::is_loaded().then(|| bootstrap::Tooltip::new(&element));
        Self { _element: element, _widget: widget }
    }
}

/// Attach a tooltip widget to every flagged element of the document.
pub fn attach_all(document: &Document) -> JsResult<Vec<TooltipTarget>> {
    Ok(dom::select_all(document, TOOLTIP_SELECTOR)?
        .into_iter()
        .map(TooltipTarget::new)
        .collect())
}

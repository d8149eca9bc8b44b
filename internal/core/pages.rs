// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Page-kind inference from the document path.

/// Whether the path belongs to a page that shows loan data and therefore
/// runs the periodic overdue refresh.
pub fn shows_loans(path: &str) -> bool {
    path.contains("loans") || path.contains("dashboard")
}

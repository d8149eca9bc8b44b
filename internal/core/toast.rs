// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Severity levels for toast notifications.

/// The severity of a toast, selecting the Bootstrap background color.
///
/// Used by `show_toast()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ToastLevel {
    /// Neutral information. The default.
    #[default]
    Info,
    /// A completed operation.
    Success,
    /// Something the user should look at.
    Warning,
    /// A failed operation.
    Danger,
}

impl ToastLevel {
    /// Parse the level name passed from JS. Unknown or missing names fall
    /// back to [`ToastLevel::Info`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            _ => Self::Info,
        }
    }

    /// The `bg-*` class carried by the toast element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "bg-info",
            Self::Success => "bg-success",
            Self::Warning => "bg-warning",
            Self::Danger => "bg-danger",
        }
    }
}

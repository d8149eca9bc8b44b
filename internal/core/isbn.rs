// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Plausibility check for ISBN form fields.
//!
//! This is not a checksum validation: the server verifies the number. The
//! form only refuses values that cannot possibly be an ISBN, so that the
//! mistake is caught before the round trip.

/// Message set as the field's custom validity when the check fails.
pub const INVALID_ISBN_MESSAGE: &str = "El ISBN debe tener 10 o 13 dígitos";

/// Whether the value has an ISBN-shaped length once hyphens and whitespace
/// are stripped: empty (not yet entered), 10 or 13 characters.
///
/// The count is over the remaining characters rather than digits only, so a
/// trailing `X` check digit in an ISBN-10 passes.
pub fn is_plausible(value: &str) -> bool {
    let len = value.chars().filter(|c| *c != '-' && !c.is_whitespace()).count();
    len == 0 || len == 10 || len == 13
}

/// The custom-validity message for a field value: `None` when the value is
/// acceptable (maps to clearing the custom validity).
pub fn validation_message(value: &str) -> Option<&'static str> {
    (!is_plausible(value)).then_some(INVALID_ISBN_MESSAGE)
}

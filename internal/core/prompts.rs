// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Texts for the blocking confirmation prompts.

/// Default prompt for delete-style submissions without a `data-confirm`
/// attribute.
pub const DELETE_CONFIRM_DEFAULT: &str = "¿Estás seguro de que quieres eliminar este elemento?";

/// Prompt shown before a book return is submitted.
pub const RETURN_CONFIRM: &str = "¿Confirmas la devolución de este libro?";

/// The message for a destructive control: its own `data-confirm` text when
/// present, the fixed default otherwise.
pub fn delete_prompt(custom: Option<&str>) -> &str {
    custom.unwrap_or(DELETE_CONFIRM_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_message_wins() {
        assert_eq!(delete_prompt(Some("¿Borrar el libro?")), "¿Borrar el libro?");
        assert_eq!(delete_prompt(None), DELETE_CONFIRM_DEFAULT);
    }
}

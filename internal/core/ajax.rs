// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! The response envelope of the asynchronous form endpoints.
//!
//! Every AJAX-enabled endpoint answers `{"success": bool, "message":
//! string?}`. This shape is shared with the server and must not change.

use serde::Deserialize;

/// Toast text when the server reports a failure without a message.
pub const PROCESSING_ERROR_MESSAGE: &str = "Error al procesar la solicitud";

/// Toast text when the request itself failed (network error, non-JSON body).
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión";

/// Parsed body of an AJAX form response.
#[derive(Debug, Clone, Deserialize)]
pub struct AjaxResponse {
    /// Whether the operation was applied.
    pub success: bool,
    /// Human-readable outcome, shown in a toast.
    #[serde(default)]
    pub message: Option<String>,
}

impl AjaxResponse {
    /// The text to show the user: the server's message, or the fixed
    /// fallback for unsuccessful responses that carry none.
    pub fn display_message(&self) -> &str {
        match &self.message {
            Some(message) => message,
            None => PROCESSING_ERROR_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_with_message() {
        let r: AjaxResponse = serde_json::from_str(r#"{"success":true,"message":"Saved"}"#).unwrap();
        assert!(r.success);
        assert_eq!(r.display_message(), "Saved");
    }

    #[test]
    fn message_is_optional() {
        let r: AjaxResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!r.success);
        assert_eq!(r.display_message(), PROCESSING_ERROR_MESSAGE);
    }

    #[test]
    fn non_json_bodies_are_an_error() {
        assert!(serde_json::from_str::<AjaxResponse>("<html>").is_err());
        assert!(serde_json::from_str::<AjaxResponse>("").is_err());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        // endpoints may attach extra payload for the success callback
        let r: AjaxResponse =
            serde_json::from_str(r#"{"success":true,"message":"ok","loan_id":7}"#).unwrap();
        assert!(r.success);
    }
}

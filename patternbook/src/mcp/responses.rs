//! Response envelope creation for MCP tool calls
//!
//! Every tool invocation completes with a well-formed envelope: the success
//! payload pretty-printed as JSON text, or an `{"error": ...}` payload with
//! the error flag set. Domain failures never surface as protocol-level
//! errors; the transport call itself always succeeds.

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};
use rmcp::Error as McpError;
use serde::Serialize;

/// Create a success envelope from a serializable payload
pub fn json_success_response<T: Serialize>(
    payload: &T,
) -> std::result::Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(payload)
        .map_err(|e| McpError::internal_error(format!("Failed to serialize response: {e}"), None))?;
    Ok(text_response(text, false))
}

/// Create an error envelope carrying a human-readable message
pub fn error_response(message: impl Into<String>) -> CallToolResult {
    let payload = serde_json::json!({ "error": message.into() });
    // Serializing a single-field object cannot fail.
    let text = serde_json::to_string_pretty(&payload).unwrap_or_default();
    text_response(text, true)
}

fn text_response(text: String, is_error: bool) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text }),
            None,
        )],
        is_error: Some(is_error),
    }
}

/// Extract the text payload of an envelope, if any
pub fn response_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|content| match &content.raw {
        RawContent::Text(text_content) => Some(text_content.text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_is_pretty_json() {
        let result = json_success_response(&serde_json::json!({"patterns": []})).unwrap();
        assert_eq!(result.is_error, Some(false));
        let text = response_text(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert!(value["patterns"].is_array());
    }

    #[test]
    fn test_error_response_wraps_message() {
        let result = error_response("Pattern not found: not-real");
        assert_eq!(result.is_error, Some(true));
        let text = response_text(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["error"], "Pattern not found: not-real");
    }
}

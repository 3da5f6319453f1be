//! Error handling utilities for MCP server

use kheti_core::KhetiError;
use rmcp::ErrorData;

/// Convert a core error into an MCP error.
///
/// Bad requests and unknown IDs are the caller's to fix and are reported as
/// invalid params; anything else is an internal error.
pub fn to_mcp_error(message: &str, error: &KhetiError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        KhetiError::InvalidInput { .. }
        | KhetiError::EntryNotFound { .. }
        | KhetiError::TransactionNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_invalid_input_is_invalid_params() {
        let err = KhetiError::invalid_input("sowingISO").with_reason("bad date");
        let mcp = to_mcp_error("Failed to generate plan", &err);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.starts_with("Failed to generate plan: "));
    }

    #[test]
    fn test_storage_errors_are_internal() {
        let err = KhetiError::configuration("Task join error");
        assert_eq!(
            to_mcp_error("Failed", &err).code,
            ErrorCode::INTERNAL_ERROR
        );
        let err = KhetiError::EntryNotFound { id: 9 };
        assert_eq!(to_mcp_error("Failed", &err).code, ErrorCode::INVALID_PARAMS);
    }
}

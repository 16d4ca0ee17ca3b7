//! Request types for pattern MCP operations

use serde::{Deserialize, Serialize};

/// Request to fetch one detailed pattern by id
///
/// # Examples
///
/// ```ignore
/// GetPatternRequest {
///     pattern_id: "builder-pattern".to_string(),
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPatternRequest {
    /// Registry id of the pattern to retrieve
    pub pattern_id: String,
}

/// Request to list all pattern overviews
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ListPatternsRequest {
    // No parameters needed for listing all patterns
}

/// Request for the code quality fundamentals document
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GetQualityFundamentalsRequest {
    // No parameters needed - returns the full static document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_pattern_request_uses_camel_case() {
        let request: GetPatternRequest =
            serde_json::from_str(r#"{"patternId": "builder-pattern"}"#).unwrap();
        assert_eq!(request.pattern_id, "builder-pattern");
    }

    #[test]
    fn test_get_pattern_request_rejects_missing_id() {
        let result: Result<GetPatternRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_pattern_request_rejects_non_string_id() {
        let result: Result<GetPatternRequest, _> = serde_json::from_str(r#"{"patternId": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_patterns_request_accepts_empty_object() {
        let result: Result<ListPatternsRequest, _> = serde_json::from_str("{}");
        assert!(result.is_ok());
    }
}

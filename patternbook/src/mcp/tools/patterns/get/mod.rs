//! Pattern detail tool
//!
//! The parameterized lookup: takes a required `patternId` string, validates it
//! against the registry, and returns the full write-up merged with its id.

use crate::mcp::responses::{error_response, json_success_response};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetPatternRequest;
use crate::PatternBookError;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for fetching one detailed pattern by id
#[derive(Default)]
pub struct GetPatternTool;

impl GetPatternTool {
    /// Creates a new instance of the GetPatternTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetPatternTool {
    fn name(&self) -> &'static str {
        "get_pattern"
    }

    fn description(&self) -> &'static str {
        "Retrieve the full write-up of one design pattern: problem, solution, code comparisons, best practices, and related patterns"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "patternId": {
                    "type": "string",
                    "description": "Registry id of the pattern, e.g. 'builder-pattern'. Use get_patterns for the full list."
                }
            },
            "required": ["patternId"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetPatternRequest = match BaseToolImpl::parse_arguments(
            arguments,
            "patternId",
            "required and must be a string",
        ) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Rejected get_pattern arguments: {}", e);
                return Ok(error_response(e.to_string()));
            }
        };

        match context.registry.detailed(&request.pattern_id) {
            Ok(document) => {
                tracing::debug!("Serving pattern '{}'", document.id);
                json_success_response(&serde_json::json!({ "pattern": document }))
            }
            Err(e @ PatternBookError::PatternNotFound(_)) => {
                tracing::debug!("{}", e);
                Ok(error_response(e.to_string()))
            }
            Err(e) => Err(McpError::internal_error(e.to_string(), None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::mcp::responses::response_text;
    use std::sync::Arc;

    fn context() -> ToolContext {
        ToolContext::new(
            Arc::new(catalog::registry().unwrap()),
            Arc::new(catalog::quality_fundamentals()),
        )
    }

    fn args_with_id(id: &str) -> serde_json::Map<String, serde_json::Value> {
        let mut args = serde_json::Map::new();
        args.insert("patternId".to_string(), serde_json::json!(id));
        args
    }

    #[tokio::test]
    async fn test_known_pattern_round_trip() {
        let result = GetPatternTool::new()
            .execute(args_with_id("builder-pattern"), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));

        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        assert_eq!(value["pattern"]["id"], "builder-pattern");
        assert!(!value["pattern"]["examples"].as_array().unwrap().is_empty());
        assert!(value["pattern"]["examples"][0]["bad"]["code"].is_string());
        assert!(value["pattern"]["examples"][0]["good"]["code"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_pattern_is_error_envelope() {
        let result = GetPatternTool::new()
            .execute(args_with_id("not-real"), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));

        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        assert!(value["error"].as_str().unwrap().contains("not-real"));
    }

    #[tokio::test]
    async fn test_missing_id_is_invalid_argument() {
        let result = GetPatternTool::new()
            .execute(serde_json::Map::new(), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));

        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        assert!(value["error"].as_str().unwrap().contains("patternId"));
    }

    #[tokio::test]
    async fn test_non_string_id_is_invalid_argument() {
        let mut args = serde_json::Map::new();
        args.insert("patternId".to_string(), serde_json::json!(42));

        let result = GetPatternTool::new().execute(args, &context()).await.unwrap();
        assert_eq!(result.is_error, Some(true));

        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        assert!(value["error"].as_str().unwrap().contains("patternId"));
    }
}

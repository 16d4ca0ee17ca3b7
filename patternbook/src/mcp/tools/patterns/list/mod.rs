//! Pattern listing tool
//!
//! Returns every registered overview in registry order plus a static usage
//! hint pointing callers at the detail tool.

use crate::mcp::responses::json_success_response;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing all pattern overviews
#[derive(Default)]
pub struct ListPatternsTool;

impl ListPatternsTool {
    /// Creates a new instance of the ListPatternsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListPatternsTool {
    fn name(&self) -> &'static str {
        "get_patterns"
    }

    fn description(&self) -> &'static str {
        "List all available React/TypeScript design patterns with a short overview of each"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let patterns: Vec<serde_json::Value> = context
            .registry
            .overviews()
            .into_iter()
            .map(|(id, overview)| {
                serde_json::json!({
                    "id": id,
                    "name": overview.name,
                    "description": overview.description,
                    "whenToUse": overview.when_to_use,
                })
            })
            .collect();

        tracing::debug!("Listing {} patterns", patterns.len());

        json_success_response(&serde_json::json!({
            "patterns": patterns,
            "usage": {
                "nextStep": "Call get_pattern with a patternId to retrieve the full write-up",
                "example": r#"get_pattern({"patternId": "builder-pattern"})"#,
            },
        }))
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

    #[tokio::test]
    async fn test_lists_every_registered_pattern() {
        let context = context();
        let tool = ListPatternsTool::new();

        let result = tool.execute(serde_json::Map::new(), &context).await.unwrap();
        assert_eq!(result.is_error, Some(false));

        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        let patterns = value["patterns"].as_array().unwrap();
        assert_eq!(patterns.len(), context.registry.len());

        for pattern in patterns {
            assert!(pattern["id"].is_string());
            assert!(!pattern["name"].as_str().unwrap().is_empty());
            assert!(!pattern["description"].as_str().unwrap().is_empty());
            assert!(!pattern["whenToUse"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_usage_hint_points_at_detail_tool() {
        let result = ListPatternsTool::new()
            .execute(serde_json::Map::new(), &context())
            .await
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        assert!(value["usage"]["nextStep"]
            .as_str()
            .unwrap()
            .contains("get_pattern"));
        assert!(value["usage"]["example"].as_str().unwrap().contains("patternId"));
    }

    #[tokio::test]
    async fn test_arguments_are_ignored() {
        let mut args = serde_json::Map::new();
        args.insert("unexpected".to_string(), serde_json::json!(true));

        let result = ListPatternsTool::new().execute(args, &context()).await.unwrap();
        assert_eq!(result.is_error, Some(false));
    }
}

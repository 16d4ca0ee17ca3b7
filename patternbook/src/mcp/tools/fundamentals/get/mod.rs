//! Quality fundamentals tool
//!
//! Returns the standalone code quality document verbatim. No parameters, no
//! failure mode beyond serialization itself.

use crate::mcp::responses::json_success_response;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for fetching the code quality fundamentals document
#[derive(Default)]
pub struct QualityFundamentalsTool;

impl QualityFundamentalsTool {
    /// Creates a new instance of the QualityFundamentalsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for QualityFundamentalsTool {
    fn name(&self) -> &'static str {
        "get_quality_fundamentals"
    }

    fn description(&self) -> &'static str {
        "Get the code quality fundamentals document: readability, predictability, cohesion, and coupling, with concepts and code comparisons for each"
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
        tracing::debug!("Serving quality fundamentals document");
        json_success_response(context.fundamentals.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::mcp::responses::response_text;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_returns_all_four_principles() {
        let context = ToolContext::new(
            Arc::new(catalog::registry().unwrap()),
            Arc::new(catalog::quality_fundamentals()),
        );

        let result = QualityFundamentalsTool::new()
            .execute(serde_json::Map::new(), &context)
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));

        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        for key in ["readability", "predictability", "cohesion", "coupling"] {
            let principle = &value["principles"][key];
            assert!(principle.is_object(), "missing principle {key}");
            assert!(!principle["concepts"].as_array().unwrap().is_empty());
        }
    }
}

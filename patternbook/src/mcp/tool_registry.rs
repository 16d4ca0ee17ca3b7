//! Tool registry for MCP operations
//!
//! Name-to-handler dispatch table for the tool surface. Registration order is
//! recorded so `tools/list` responses come back in a stable order regardless
//! of map iteration.

use crate::fundamentals::QualityFundamentals;
use crate::patterns::PatternRegistry;
use crate::{PatternBookError, Result};
use rmcp::model::Tool;
use rmcp::Error as McpError;
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
///
/// Everything in here is immutable after construction, so concurrent tool
/// invocations need no locking.
#[derive(Clone)]
pub struct ToolContext {
    /// The pattern registry all lookups run against
    pub registry: Arc<PatternRegistry>,
    /// The static code quality fundamentals document
    pub fundamentals: Arc<QualityFundamentals>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(registry: Arc<PatternRegistry>, fundamentals: Arc<QualityFundamentals>) -> Self {
        Self {
            registry,
            fundamentals,
        }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    ///
    /// Domain failures (unknown id, bad arguments) come back as `Ok` with an
    /// error envelope; `Err` is reserved for faults the dispatch layer should
    /// log and translate into a generic error payload.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<rmcp::model::CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), Box::new(tool)).is_none() {
            self.order.push(name);
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names in registration order
    pub fn list_tool_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// The validation failure names the field the caller got wrong rather
    /// than passing the raw serde error through.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
        field: &str,
        expectation: &str,
    ) -> Result<T> {
        serde_json::from_value(serde_json::Value::Object(arguments)).map_err(|_| {
            PatternBookError::InvalidArgument {
                field: field.to_string(),
                reason: expectation.to_string(),
            }
        })
    }
}

/// Register the pattern listing and lookup tools
pub fn register_pattern_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::patterns;
    registry.register(patterns::list::ListPatternsTool::new());
    registry.register(patterns::get::GetPatternTool::new());
}

/// Register the quality fundamentals tool
pub fn register_fundamentals_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::fundamentals;
    registry.register(fundamentals::get::QualityFundamentalsTool::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::mcp::responses::json_success_response;
    use rmcp::model::CallToolResult;

    /// Mock tool for testing
    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
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
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            json_success_response(&serde_json::json!({ "tool": self.name }))
        }
    }

    fn test_context() -> ToolContext {
        ToolContext::new(
            Arc::new(catalog::registry().unwrap()),
            Arc::new(catalog::quality_fundamentals()),
        )
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        assert_eq!(registry.len(), 1);
        let tool = registry.get_tool("test_tool").unwrap();
        assert_eq!(tool.name(), "test_tool");
        assert_eq!(tool.description(), "A test tool");
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_list_tools_preserves_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "zeta",
            description: "Registered first",
        });
        registry.register(MockTool {
            name: "alpha",
            description: "Registered second",
        });

        let names: Vec<String> = registry
            .list_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(registry.list_tool_names(), vec!["zeta", "alpha"]);
    }

    #[tokio::test]
    async fn test_mock_tool_execution() {
        let context = test_context();
        let tool = MockTool {
            name: "exec_test",
            description: "Execution test tool",
        };

        let result = tool.execute(serde_json::Map::new(), &context).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(!result.content.is_empty());
    }

    #[test]
    fn test_parse_arguments_names_the_field() {
        use crate::mcp::types::GetPatternRequest;

        let args = serde_json::Map::new();
        let result: Result<GetPatternRequest> =
            BaseToolImpl::parse_arguments(args, "patternId", "required and must be a string");

        match result {
            Err(PatternBookError::InvalidArgument { field, reason }) => {
                assert_eq!(field, "patternId");
                assert!(reason.contains("string"));
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_arguments_accepts_valid_input() {
        use crate::mcp::types::GetPatternRequest;

        let mut args = serde_json::Map::new();
        args.insert(
            "patternId".to_string(),
            serde_json::Value::String("builder-pattern".to_string()),
        );

        let request: GetPatternRequest =
            BaseToolImpl::parse_arguments(args, "patternId", "required and must be a string")
                .unwrap();
        assert_eq!(request.pattern_id, "builder-pattern");
    }

    #[test]
    fn test_standard_tool_registration() {
        let mut registry = ToolRegistry::new();
        register_pattern_tools(&mut registry);
        register_fundamentals_tools(&mut registry);

        assert_eq!(
            registry.list_tool_names(),
            vec!["get_patterns", "get_pattern", "get_quality_fundamentals"]
        );
    }
}

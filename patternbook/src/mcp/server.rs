//! MCP server implementation for serving the pattern catalog

use crate::catalog;
use crate::fundamentals::QualityFundamentals;
use crate::patterns::PatternRegistry;
use crate::Result;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::responses::error_response;
use super::tool_registry::{
    register_fundamentals_tools, register_pattern_tools, ToolContext, ToolRegistry,
};

const SERVER_INSTRUCTIONS: &str = "A reference library of React/TypeScript design patterns. \
Use get_patterns to list every pattern with a short overview, get_pattern with a patternId \
to retrieve the full write-up including bad/good code comparisons, and \
get_quality_fundamentals for the standalone code quality document.";

/// MCP server for serving the pattern catalog
///
/// All state is immutable after construction; the server is cheap to clone
/// and safe under concurrent tool invocations.
#[derive(Clone)]
pub struct PatternServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl PatternServer {
    /// Create a new MCP server over an explicit registry and fundamentals document.
    ///
    /// The contents are injected rather than read from ambient state, so tests
    /// can serve a registry of their own construction.
    pub fn new(registry: PatternRegistry, fundamentals: QualityFundamentals) -> Self {
        let tool_context = Arc::new(ToolContext::new(
            Arc::new(registry),
            Arc::new(fundamentals),
        ));

        let mut tool_registry = ToolRegistry::new();
        register_pattern_tools(&mut tool_registry);
        register_fundamentals_tools(&mut tool_registry);

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context,
        }
    }

    /// Create a server over the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog fails its integrity checks,
    /// which would be a defect in the shipped content.
    pub fn from_catalog() -> Result<Self> {
        let registry = catalog::registry()?;
        let fundamentals = catalog::quality_fundamentals();
        Ok(Self::new(registry, fundamentals))
    }

    /// The tool execution context, exposed for integration with CLI commands
    pub fn tool_context(&self) -> &Arc<ToolContext> {
        &self.tool_context
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }

    fn implementation() -> Implementation {
        Implementation {
            name: "Patternbook".into(),
            version: crate::VERSION.into(),
        }
    }
}

/// Resolve a tool by name and run it, translating every failure into an
/// error envelope.
///
/// The transport-level call always succeeds: unknown names and unexpected
/// handler faults come back as `is_error` payloads, never as protocol errors.
async fn dispatch_tool(
    registry: &ToolRegistry,
    context: &ToolContext,
    name: &str,
    arguments: serde_json::Map<String, serde_json::Value>,
) -> CallToolResult {
    let Some(tool) = registry.get_tool(name) else {
        tracing::warn!("Requested unknown tool '{}'", name);
        let err = crate::PatternBookError::UnknownTool(name.to_string());
        return error_response(err.to_string());
    };

    match tool.execute(arguments, context).await {
        Ok(result) => result,
        Err(e) => {
            // Handlers report domain failures inside the envelope; an Err
            // here is an unexpected fault, logged and surfaced generically.
            tracing::error!("Tool '{}' failed unexpectedly: {}", name, e);
            error_response(format!("Tool '{name}' failed unexpectedly"))
        }
    }
}

impl ServerHandler for PatternServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Self::implementation(),
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(dispatch_tool(
            &self.tool_registry,
            &self.tool_context,
            &request.name,
            request.arguments.unwrap_or_default(),
        )
        .await)
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Self::implementation(),
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_construction_from_catalog() {
        let server = PatternServer::from_catalog().unwrap();
        assert_eq!(server.tool_registry.len(), 3);
        assert_eq!(server.tool_context.registry.len(), 12);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_is_error_envelope() {
        use crate::mcp::responses::response_text;

        let server = PatternServer::from_catalog().unwrap();
        let result = dispatch_tool(
            &server.tool_registry,
            &server.tool_context,
            "does_not_exist",
            serde_json::Map::new(),
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        assert_eq!(value["error"], "Unknown tool: does_not_exist");
    }

    #[tokio::test]
    async fn test_dispatch_handler_fault_is_generic_error_envelope() {
        use crate::mcp::responses::response_text;
        use crate::mcp::McpTool;

        struct FailingTool;

        #[async_trait::async_trait]
        impl McpTool for FailingTool {
            fn name(&self) -> &'static str {
                "explode"
            }

            fn description(&self) -> &'static str {
                "Always fails"
            }

            fn schema(&self) -> serde_json::Value {
                serde_json::json!({ "type": "object", "properties": {}, "required": [] })
            }

            async fn execute(
                &self,
                _arguments: serde_json::Map<String, serde_json::Value>,
                _context: &ToolContext,
            ) -> std::result::Result<CallToolResult, McpError> {
                Err(McpError::internal_error("wiring snapped", None))
            }
        }

        let server = PatternServer::from_catalog().unwrap();
        let mut registry = ToolRegistry::new();
        registry.register(FailingTool);

        let result = dispatch_tool(
            &registry,
            &server.tool_context,
            "explode",
            serde_json::Map::new(),
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        let value: serde_json::Value =
            serde_json::from_str(response_text(&result).unwrap()).unwrap();
        let message = value["error"].as_str().unwrap();
        assert_eq!(message, "Tool 'explode' failed unexpectedly");
        // The internal fault detail stays in the log, not on the wire.
        assert!(!message.contains("wiring snapped"));
    }

    #[test]
    fn test_get_info_advertises_tools_only() {
        let server = PatternServer::from_catalog().unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.capabilities.resources.is_none());
        assert_eq!(info.server_info.version, crate::VERSION);
    }
}

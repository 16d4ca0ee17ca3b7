//! MCP server support for serving the pattern catalog
//!
//! The tool surface is deliberately small: one parameterized lookup tool, one
//! listing tool, and one tool for the quality fundamentals document. All
//! handlers are pure reads over immutable data injected at construction.

pub mod responses;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

pub use server::PatternServer;
pub use tool_registry::{register_fundamentals_tools, register_pattern_tools};
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};

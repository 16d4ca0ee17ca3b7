//! MCP tool implementations, one module per tool
//!
//! Layout follows `<category>/<action>/mod.rs`; each module owns its tool
//! struct, schema, and handler logic.

pub mod fundamentals;
pub mod patterns;

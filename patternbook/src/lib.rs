//! # Patternbook
//!
//! A reference library of React/TypeScript design patterns, served over the
//! Model Context Protocol (MCP).
//!
//! ## Features
//!
//! - **Pattern Registry**: an immutable, in-memory catalog of design patterns
//!   (Container/Presentational, Strategy, Builder, Factory, and friends)
//! - **Quality Fundamentals**: a standalone code-quality document covering
//!   readability, predictability, cohesion, and coupling
//! - **MCP Support**: tool-based access to every document via the `rmcp` SDK
//!
//! ## Quick Start
//!
//! ```rust
//! use patternbook::catalog;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = catalog::registry()?;
//!
//! for (id, overview) in registry.overviews() {
//!     println!("{id}: {}", overview.name);
//! }
//!
//! let builder = registry.detailed("builder-pattern")?;
//! println!("{}", builder.detailed.problem);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Pattern data model and registry
pub mod patterns;

/// Code quality fundamentals document types
pub mod fundamentals;

/// Hand-authored pattern and fundamentals content
pub mod catalog;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Error types used throughout the library
pub mod error;

pub use error::{PatternBookError, Result};
pub use fundamentals::{Concept, Principle, Principles, QualityFundamentals};
pub use patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternDocument,
    PatternOverview, PatternRegistry,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::mcp::PatternServer;
    pub use crate::{
        CodeComparisonExample, CodeSample, DetailedPattern, PatternBookError, PatternDefinition,
        PatternDocument, PatternOverview, PatternRegistry, QualityFundamentals, Result,
    };
}

//! Code quality fundamentals tools

pub mod get;

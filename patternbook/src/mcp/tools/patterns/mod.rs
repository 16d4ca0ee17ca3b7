//! Pattern catalog tools

pub mod get;
pub mod list;

//! Tool management and execution framework for fmp-agent-rs
//!
//! This crate provides a framework for defining and executing tools (functions)
//! that agents can use to perform actions, plus a batch dispatcher that runs
//! several registered tools concurrently and collects their results in order.

pub mod compound;
pub mod error;
pub mod registry;
pub mod tool;

pub use compound::CompoundTool;
pub use error::{Error, Result};
pub use registry::ToolRegistry;
pub use tool::Tool;

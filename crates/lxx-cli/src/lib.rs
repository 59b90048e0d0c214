//! CLI library components for the collation tool.

pub mod logging;
pub mod pipeline;

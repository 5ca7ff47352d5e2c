//! CLI library components for rxlink.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;

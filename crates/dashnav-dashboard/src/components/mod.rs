//! Dashboard screens and the root component.

mod actors;
mod app;
mod cluster;
mod common;
mod jobs;
mod logs;
mod metrics;
mod overview;
mod serve;

pub use actors::*;
pub use app::*;
pub use cluster::*;
pub use common::*;
pub use jobs::*;
pub use logs::*;
pub use metrics::*;
pub use overview::*;
pub use serve::*;
